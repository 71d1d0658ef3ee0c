#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::pedantic::large_types_passed_by_value
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

mod blueprint_pool;
mod debugging;
mod realm;
mod result;
mod values;

extern crate ahash;
extern crate anyhow;
extern crate colored;
extern crate stash;

pub use blueprint_pool::BlueprintPointer;
pub use debugging::{DebugRepresentation, DebugWithRealm, Renderer, Representation};
pub use realm::{Binding, Realm};
pub use result::{DelegationError, ModelResult};
pub use values::blueprint::{Blueprint, BlueprintBuilder, FieldInit};
pub use values::instance::Instance;
pub use values::method::{Method, MethodFn};
pub use values::value::Value;
