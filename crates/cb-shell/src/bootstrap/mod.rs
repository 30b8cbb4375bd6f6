pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{apply_env_overrides, load_config, resolve_config};
pub use runtime::{create_runtime, AppRuntime};
pub use wiring::{wire_dependencies, StorageMode, WiringError};

use cb_core::ports::AppDirsError;

/// Startup failures. Each one is reported once by the entry point, which then
/// exits; none of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error(
        "backend is not configured: set [backend] url and anon_key in {config_path}, \
         or CRYPTOBILL_BACKEND_URL and CRYPTOBILL_ANON_KEY"
    )]
    BackendNotConfigured { config_path: String },

    #[error(transparent)]
    AppDirs(#[from] AppDirsError),

    #[error("failed to load configuration: {0:#}")]
    Config(anyhow::Error),

    #[error(transparent)]
    Wiring(#[from] WiringError),
}
