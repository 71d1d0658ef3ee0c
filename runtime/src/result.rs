use std::fmt::{Display, Formatter};

use crate::blueprint_pool::BlueprintPointer;
use crate::realm::Realm;

/// The model's only failure modes. Queries (`lookup`, `has_own`,
/// `get_delegate`) are total and never produce one of these; not-found is a
/// valid outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegationError {
    /// The proposed delegate's chain reaches back to the blueprint being
    /// reparented. The prior delegate is left in place.
    InvalidDelegation {
        blueprint: BlueprintPointer,
        delegate: BlueprintPointer,
    },
    /// The pointer does not resolve in this realm: it was never declared
    /// here, or belongs to a different realm.
    UndefinedBlueprint { pointer: BlueprintPointer },
}

pub type ModelResult<T = ()> = Result<T, DelegationError>;

impl Display for DelegationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DelegationError::InvalidDelegation {
                blueprint,
                delegate,
            } => f.write_fmt(format_args!(
                "InvalidDelegation: delegating {} to {} would form a cycle",
                blueprint, delegate
            )),
            DelegationError::UndefinedBlueprint { pointer } => f.write_fmt(format_args!(
                "UndefinedBlueprint: {} does not resolve in this realm",
                pointer
            )),
        }
    }
}

impl DelegationError {
    pub fn render(self, realm: &Realm) -> anyhow::Error {
        match self {
            DelegationError::InvalidDelegation {
                blueprint,
                delegate,
            } => anyhow::Error::msg(format!(
                "InvalidDelegation: {} cannot delegate to {}",
                name_or_pointer(realm, blueprint),
                name_or_pointer(realm, delegate)
            )),
            DelegationError::UndefinedBlueprint { pointer } => anyhow::Error::msg(format!(
                "UndefinedBlueprint: {} does not resolve in this realm",
                pointer
            )),
        }
    }
}

fn name_or_pointer(realm: &Realm, pointer: BlueprintPointer) -> String {
    match pointer.name(realm) {
        Some(name) => name.to_owned(),
        None => pointer.to_string(),
    }
}
