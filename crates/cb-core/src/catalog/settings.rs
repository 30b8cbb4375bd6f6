#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const SETTINGS_OPTIONS: [SettingsOption; 5] = [
    SettingsOption {
        id: "profile",
        name: "Profile",
        description: "Manage your personal information",
    },
    SettingsOption {
        id: "security",
        name: "Security",
        description: "Password and authentication settings",
    },
    SettingsOption {
        id: "payment",
        name: "Payment Methods",
        description: "Manage your payment methods",
    },
    SettingsOption {
        id: "notifications",
        name: "Notifications",
        description: "Configure your notification preferences",
    },
    SettingsOption {
        id: "help",
        name: "Help & Support",
        description: "Get help with your account",
    },
];

pub const APP_VERSION: &str = "1.0.0";
pub const COPYRIGHT_NOTICE: &str = "© 2025 Crypto Bill Pay";
