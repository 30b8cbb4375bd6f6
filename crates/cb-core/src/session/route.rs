use serde::Serialize;

use crate::dashboard::DashboardTab;

/// Logical paths exposed by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "value", rename_all = "snake_case")]
pub enum Route {
    /// `/`
    Root,
    /// `/auth`
    Auth,
    /// `/dashboard` and `/dashboard/<tab>`
    Dashboard(DashboardTab),
    /// Anything else, kept verbatim for logging.
    Unknown(String),
}

impl Route {
    /// Parse a path. Trailing slashes, query strings and fragments are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let mut segments = trimmed.split('/').filter(|s| !s.is_empty());

        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Route::Root,
            (Some("auth"), None, _) => Route::Auth,
            (Some("dashboard"), None, _) => Route::Dashboard(DashboardTab::Home),
            (Some("dashboard"), Some(segment), None) => DashboardTab::from_path_segment(segment)
                .map(Route::Dashboard)
                .unwrap_or_else(|| Route::Unknown(path.to_string())),
            _ => Route::Unknown(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Auth => "/auth".to_string(),
            Route::Dashboard(tab) => tab.path(),
            Route::Unknown(path) => path.clone(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Root);
        assert_eq!(Route::parse(""), Route::Root);
        assert_eq!(Route::parse("/auth"), Route::Auth);
        assert_eq!(Route::parse("/auth/"), Route::Auth);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard(DashboardTab::Home));
        assert_eq!(
            Route::parse("/dashboard/wallet"),
            Route::Dashboard(DashboardTab::Wallet)
        );
        assert_eq!(
            Route::parse("/dashboard/giftcards?ref=home"),
            Route::Dashboard(DashboardTab::GiftCards)
        );
    }

    #[test]
    fn unknown_paths_are_preserved() {
        assert_eq!(
            Route::parse("/dashboard/profile"),
            Route::Unknown("/dashboard/profile".to_string())
        );
        assert_eq!(
            Route::parse("/auth/reset"),
            Route::Unknown("/auth/reset".to_string())
        );
        assert_eq!(Route::parse("/nope"), Route::Unknown("/nope".to_string()));
    }

    #[test]
    fn path_round_trips_for_known_routes() {
        for route in [
            Route::Root,
            Route::Auth,
            Route::Dashboard(DashboardTab::Home),
            Route::Dashboard(DashboardTab::Settings),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
