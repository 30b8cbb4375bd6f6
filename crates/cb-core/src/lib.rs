//! # cb-core
//!
//! Core domain models and business rules for Crypto Bill Pay.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the navigation gate decision, identity and wallet records, client-side
//! validation, static reference catalogs, and the port traits implemented by
//! the infrastructure layer.

pub mod app_dirs;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod identity;
pub mod ids;
pub mod onboarding;
pub mod ports;
pub mod security;
pub mod session;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use dashboard::{DashboardTab, WalletSummary};
pub use identity::{Credentials, Identity, SignUpRequest};
pub use ids::UserId;
pub use session::{GateSnapshot, IdentityState, NavigationDecision, Route};
pub use validation::{PasswordCriteria, ValidationError};
