use cb_app::screens::AuthSubmission;
use cb_core::identity::{Credentials, SignUpRequest};
use cb_core::session::NavigationDecision;
use tracing::{info_span, Instrument};

use super::error::map_err;
use crate::bootstrap::AppRuntime;

pub async fn sign_in(
    runtime: &AppRuntime,
    credentials: &Credentials,
) -> Result<NavigationDecision, String> {
    let span = info_span!("command.auth.sign_in");
    async { runtime.gate().sign_in(credentials).await.map_err(map_err) }
        .instrument(span)
        .await
}

pub async fn sign_up(
    runtime: &AppRuntime,
    request: &SignUpRequest,
) -> Result<NavigationDecision, String> {
    let span = info_span!("command.auth.sign_up");
    async { runtime.gate().sign_up(request).await.map_err(map_err) }
        .instrument(span)
        .await
}

pub async fn sign_out(runtime: &AppRuntime) -> Result<NavigationDecision, String> {
    let span = info_span!("command.auth.sign_out");
    async { runtime.gate().sign_out().await.map_err(map_err) }
        .instrument(span)
        .await
}

/// Dispatch a validated auth form submission.
pub async fn submit_auth(
    runtime: &AppRuntime,
    submission: &AuthSubmission,
) -> Result<NavigationDecision, String> {
    match submission {
        AuthSubmission::SignIn(credentials) => sign_in(runtime, credentials).await,
        AuthSubmission::SignUp(request) => sign_up(runtime, request).await,
    }
}
