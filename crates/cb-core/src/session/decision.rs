//! Navigation gate decision.
//!
//! Defines a pure, total function from (onboarding flag, identity state,
//! requested route) to the screen that must be shown.

use serde::Serialize;

use super::{IdentityState, Route};
use crate::dashboard::DashboardTab;

/// Upper bound on decisions evaluated by [`GateSnapshot::resolve_final`].
///
/// The longest chain is an unknown path while signed in:
/// `Unknown -> Root -> Dashboard`, two redirects and then the final decision.
pub const MAX_REDIRECTS: usize = 3;

/// Top-level screen, ignoring the requested route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Loading,
    Onboarding,
    Auth,
    Dashboard,
}

/// Outcome of one evaluation of the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "target", rename_all = "snake_case")]
pub enum NavigationDecision {
    /// Transient: identity not yet resolved.
    Loading,
    ShowOnboarding,
    ShowAuth,
    ShowDashboard(DashboardTab),
    /// The requested route is not valid for the current state.
    Redirect(Route),
}

impl NavigationDecision {
    pub fn is_steady(&self) -> bool {
        matches!(
            self,
            NavigationDecision::ShowOnboarding
                | NavigationDecision::ShowAuth
                | NavigationDecision::ShowDashboard(_)
        )
    }

    pub fn screen(&self) -> Option<Screen> {
        match self {
            NavigationDecision::Loading => Some(Screen::Loading),
            NavigationDecision::ShowOnboarding => Some(Screen::Onboarding),
            NavigationDecision::ShowAuth => Some(Screen::Auth),
            NavigationDecision::ShowDashboard(_) => Some(Screen::Dashboard),
            NavigationDecision::Redirect(_) => None,
        }
    }
}

/// Everything the gate decision depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSnapshot {
    pub onboarding_complete: bool,
    pub identity: IdentityState,
    pub route: Route,
}

impl GateSnapshot {
    pub fn new(onboarding_complete: bool, identity: IdentityState, route: Route) -> Self {
        Self {
            onboarding_complete,
            identity,
            route,
        }
    }

    /// Priority order: pending identity, incomplete onboarding, anonymous,
    /// authenticated.
    ///
    /// Onboarding wins over an existing session: an authenticated user on a
    /// fresh device still sees the carousel first.
    pub fn screen(&self) -> Screen {
        match (&self.identity, self.onboarding_complete) {
            (IdentityState::Pending, _) => Screen::Loading,
            (_, false) => Screen::Onboarding,
            (IdentityState::Anonymous, true) => Screen::Auth,
            (IdentityState::Authenticated(_), true) => Screen::Dashboard,
        }
    }

    /// Decide for the requested route. May return a redirect.
    pub fn decide(&self) -> NavigationDecision {
        let screen = self.screen();
        if screen == Screen::Loading {
            return NavigationDecision::Loading;
        }

        match (&self.route, screen) {
            (Route::Unknown(_), _) => NavigationDecision::Redirect(Route::Root),
            (Route::Dashboard(_), Screen::Onboarding | Screen::Auth) => {
                NavigationDecision::Redirect(Route::Auth)
            }
            (Route::Root | Route::Auth, Screen::Onboarding) => NavigationDecision::ShowOnboarding,
            (Route::Root | Route::Auth, Screen::Auth) => NavigationDecision::ShowAuth,
            (Route::Root | Route::Auth, Screen::Dashboard) => {
                NavigationDecision::Redirect(Route::Dashboard(DashboardTab::Home))
            }
            (Route::Dashboard(tab), Screen::Dashboard) => NavigationDecision::ShowDashboard(*tab),
            (_, Screen::Loading) => NavigationDecision::Loading,
        }
    }

    /// Follow redirects until a non-redirect decision.
    ///
    /// Returns the route the decision was reached on together with the
    /// decision itself.
    pub fn resolve_final(&self) -> (Route, NavigationDecision) {
        let mut current = self.clone();
        for _ in 0..MAX_REDIRECTS {
            match current.decide() {
                NavigationDecision::Redirect(target) => current.route = target,
                decision => return (current.route, decision),
            }
        }
        // Unreachable with the current rule set; fall back to the screen the
        // state alone selects.
        let fallback = match current.screen() {
            Screen::Loading => NavigationDecision::Loading,
            Screen::Onboarding => NavigationDecision::ShowOnboarding,
            Screen::Auth => NavigationDecision::ShowAuth,
            Screen::Dashboard => NavigationDecision::ShowDashboard(DashboardTab::Home),
        };
        (current.route, fallback)
    }
}
