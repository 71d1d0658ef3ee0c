pub(crate) mod blueprint;
pub(crate) mod instance;
pub(crate) mod method;
pub(crate) mod value;
