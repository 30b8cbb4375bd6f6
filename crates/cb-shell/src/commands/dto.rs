use cb_core::session::NavigationDecision;
use serde::Serialize;

/// Gate state as reported by the `status` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusDto {
    pub decision: NavigationDecision,
    pub route: String,
    pub onboarding_complete: bool,
    /// Email of the signed-in user.
    pub signed_in_as: Option<String>,
}
