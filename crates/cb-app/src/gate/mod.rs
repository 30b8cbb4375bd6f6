//! Session/onboarding gate.
//!
//! Owns the one authoritative navigation decision. Identity changes arrive
//! from two sources, the session subscription and the awaited result of an
//! explicit sign-in/up/out. Both feed the same reconciliation step.

mod session_gate;

pub use session_gate::{GatePorts, SessionGate};

use cb_core::ports::StorageError;

use crate::usecases::auth::AuthError;

#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("failed to persist onboarding flag: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("dashboard is not active")]
    NotOnDashboard,

    #[error("session gate already started")]
    AlreadyStarted,
}

impl GateError {
    /// Text for an inline error banner.
    pub fn display_message(&self) -> String {
        match self {
            GateError::Auth(err) => err.display_message(),
            other => other.to_string(),
        }
    }
}
