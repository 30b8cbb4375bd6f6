use cb_core::session::NavigationDecision;
use tracing::{info_span, Instrument};

use super::dto::StatusDto;
use crate::bootstrap::AppRuntime;

pub fn current_decision(runtime: &AppRuntime) -> NavigationDecision {
    runtime.gate().decision()
}

/// Request a path such as `/dashboard/wallet`. The returned decision is
/// already resolved; the gate's route reflects any redirect.
pub async fn navigate(runtime: &AppRuntime, path: &str) -> NavigationDecision {
    let span = info_span!("command.navigation.navigate", path);
    async { runtime.gate().navigate(path).await }
        .instrument(span)
        .await
}

pub async fn status(runtime: &AppRuntime) -> StatusDto {
    let snapshot = runtime.gate().snapshot().await;
    StatusDto {
        decision: runtime.gate().decision(),
        route: snapshot.route.path(),
        onboarding_complete: snapshot.onboarding_complete,
        signed_in_as: snapshot.identity.identity().map(|i| i.email.clone()),
    }
}
