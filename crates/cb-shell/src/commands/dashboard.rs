use cb_app::{GateError, WalletLoad};
use cb_core::dashboard::DashboardTab;
use cb_core::identity::Identity;
use cb_core::session::NavigationDecision;
use tracing::{info_span, Instrument};

use super::error::map_err;
use crate::bootstrap::AppRuntime;

pub async fn select_tab(
    runtime: &AppRuntime,
    tab: DashboardTab,
) -> Result<NavigationDecision, String> {
    let span = info_span!("command.dashboard.select_tab", tab = %tab);
    async { runtime.gate().select_tab(tab).await.map_err(map_err) }
        .instrument(span)
        .await
}

/// Wallet fetch status of the mounted dashboard.
pub async fn wallet_status(runtime: &AppRuntime) -> Result<WalletLoad, String> {
    let shell = runtime
        .gate()
        .dashboard()
        .await
        .ok_or_else(|| map_err(GateError::NotOnDashboard))?;
    Ok(shell.wallet())
}

/// Identity shown on the dashboard, `None` when it is not mounted.
pub async fn current_identity(runtime: &AppRuntime) -> Option<Identity> {
    let shell = runtime.gate().dashboard().await?;
    Some(shell.identity().clone())
}
