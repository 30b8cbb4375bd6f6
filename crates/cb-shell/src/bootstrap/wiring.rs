//! Dependency assembly.
//!
//! The only place that names concrete adapters. It builds them from an
//! already-resolved [`AppConfig`] and hands the gate its ports; it makes no
//! decisions about what the configuration means.

use std::sync::Arc;
use std::time::Duration;

use cb_app::GatePorts;
use cb_core::config::AppConfig;
use cb_core::ports::LocalStoragePort;
use cb_infra::backend::SessionStore;
use cb_infra::{
    BackendClient, BackendConfig, FileLocalStorage, InMemoryLocalStorage, RestIdentityGateway,
    RestWalletRepository,
};
use tracing::info;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Where the local key-value store lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageMode {
    /// JSON file at the configured storage path.
    #[default]
    File,
    /// Process memory only; nothing survives exit.
    Ephemeral,
}

fn create_storage(config: &AppConfig, mode: StorageMode) -> Arc<dyn LocalStoragePort> {
    match mode {
        StorageMode::File => {
            info!(path = %config.storage_path.display(), "using file storage");
            Arc::new(FileLocalStorage::new(config.storage_path.clone()))
        }
        StorageMode::Ephemeral => {
            info!("using in-memory storage");
            Arc::new(InMemoryLocalStorage::new())
        }
    }
}

fn backend_config(config: &AppConfig) -> BackendConfig {
    let backend = BackendConfig::new(&config.backend_url, &config.backend_anon_key);
    match config.request_timeout_secs {
        0 => backend,
        secs => backend.with_timeout(Duration::from_secs(secs)),
    }
}

pub fn wire_dependencies(config: &AppConfig, mode: StorageMode) -> WiringResult<GatePorts> {
    let storage = create_storage(config, mode);
    let client = BackendClient::new(&backend_config(config))
        .map_err(|e| WiringError::HttpClientInit(e.to_string()))?;
    let sessions = Arc::new(SessionStore::new(storage.clone()));

    Ok(GatePorts {
        gateway: Arc::new(RestIdentityGateway::new(client.clone(), sessions.clone())),
        wallets: Arc::new(RestWalletRepository::new(client, sessions)),
        storage,
    })
}
