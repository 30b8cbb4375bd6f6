//! Command surface.
//!
//! Each command opens a `command.*` span, calls into the gate, and maps
//! failures to a display string through [`error::map_err`].

pub mod auth;
pub mod dashboard;
pub mod dto;
pub mod error;
pub mod navigation;
pub mod onboarding;

pub use auth::{sign_in, sign_out, sign_up, submit_auth};
pub use dashboard::{current_identity, select_tab, wallet_status};
pub use dto::StatusDto;
pub use navigation::{current_decision, navigate, status};
pub use onboarding::complete_onboarding;
