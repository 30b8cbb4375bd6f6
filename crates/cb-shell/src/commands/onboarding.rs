use cb_core::session::NavigationDecision;
use tracing::{info_span, Instrument};

use super::error::map_err;
use crate::bootstrap::AppRuntime;

/// Record onboarding as done. Safe to repeat.
pub async fn complete_onboarding(runtime: &AppRuntime) -> Result<NavigationDecision, String> {
    let span = info_span!("command.onboarding.complete");
    async { runtime.gate().complete_onboarding().await.map_err(map_err) }
        .instrument(span)
        .await
}
