use serde::Serialize;

use crate::identity::Identity;

/// What the gate knows about the current session.
///
/// `Pending` lasts until the first resolution (startup lookup or session
/// notification) completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "identity", rename_all = "snake_case")]
pub enum IdentityState {
    #[default]
    Pending,
    Anonymous,
    Authenticated(Identity),
}

impl IdentityState {
    pub fn is_pending(&self) -> bool {
        matches!(self, IdentityState::Pending)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            IdentityState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

impl From<Option<Identity>> for IdentityState {
    fn from(value: Option<Identity>) -> Self {
        match value {
            Some(identity) => IdentityState::Authenticated(identity),
            None => IdentityState::Anonymous,
        }
    }
}
