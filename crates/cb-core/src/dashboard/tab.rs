use serde::{Deserialize, Serialize};

/// Bottom-navigation tabs of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Home,
    Wallet,
    Bills,
    GiftCards,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Home,
        DashboardTab::Wallet,
        DashboardTab::Bills,
        DashboardTab::GiftCards,
        DashboardTab::Settings,
    ];

    /// Path segment under `/dashboard`. Home is the bare `/dashboard`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            DashboardTab::Home => "",
            DashboardTab::Wallet => "wallet",
            DashboardTab::Bills => "bills",
            DashboardTab::GiftCards => "giftcards",
            DashboardTab::Settings => "settings",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "" => Some(DashboardTab::Home),
            "wallet" => Some(DashboardTab::Wallet),
            "bills" => Some(DashboardTab::Bills),
            "giftcards" => Some(DashboardTab::GiftCards),
            "settings" => Some(DashboardTab::Settings),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Home => "Home",
            DashboardTab::Wallet => "Wallet",
            DashboardTab::Bills => "Bills",
            DashboardTab::GiftCards => "Gift Cards",
            DashboardTab::Settings => "Settings",
        }
    }

    pub fn path(&self) -> String {
        match self.path_segment() {
            "" => "/dashboard".to_string(),
            segment => format!("/dashboard/{segment}"),
        }
    }
}

impl std::fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
