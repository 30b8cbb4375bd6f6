//! Crypto Bill Pay application layer
//!
//! Use cases, the session/onboarding gate, the dashboard shell and the
//! screen view models.

pub mod app_paths;
pub mod dashboard;
pub mod gate;
pub mod screens;
pub mod usecases;

pub use app_paths::AppPaths;
pub use dashboard::{DashboardShell, WalletLoad};
pub use gate::{GateError, GatePorts, SessionGate};
pub use usecases::auth::AuthError;
