//! Application runtime.
//!
//! Holds the wired [`SessionGate`] for the lifetime of the process. Commands
//! receive `&AppRuntime` and reach the gate through it.

use std::sync::Arc;

use cb_app::SessionGate;
use cb_core::config::AppConfig;
use cb_core::session::NavigationDecision;
use tracing::{info, info_span, Instrument};

use super::wiring::{wire_dependencies, StorageMode};
use super::BootstrapError;

pub struct AppRuntime {
    config: AppConfig,
    gate: Arc<SessionGate>,
}

impl AppRuntime {
    pub fn new(config: AppConfig, gate: Arc<SessionGate>) -> Self {
        Self { config, gate }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn gate(&self) -> &Arc<SessionGate> {
        &self.gate
    }

    /// Run the gate's startup sequence and return the first steady decision.
    pub async fn start(&self) -> anyhow::Result<NavigationDecision> {
        let span = info_span!("runtime.start", backend = %self.config.backend_url);
        async {
            let decision = self.gate.start().await?;
            info!(?decision, "gate started");
            Ok(decision)
        }
        .instrument(span)
        .await
    }

    /// Stop the gate and release its session subscription.
    pub async fn shutdown(&self) {
        self.gate.shutdown().await;
        info!("runtime stopped");
    }
}

/// Wire adapters for `config` and build an unstarted runtime.
pub fn create_runtime(config: AppConfig, mode: StorageMode) -> Result<AppRuntime, BootstrapError> {
    let ports = wire_dependencies(&config, mode)?;
    let gate = Arc::new(SessionGate::new(ports));
    Ok(AppRuntime::new(config, gate))
}
