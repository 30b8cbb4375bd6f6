//! Port interfaces implemented by the infrastructure and platform layers.
//!
//! Use cases depend on these traits only; adapters live in `cb-infra` and
//! `cb-platform`.

pub mod app_dirs;
pub mod errors;
pub mod identity_gateway;
pub mod local_storage;
pub mod wallet;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, GatewayError, StorageError};
pub use identity_gateway::IdentityGatewayPort;
pub use local_storage::LocalStoragePort;
pub use wallet::WalletSummaryPort;
