use cb_core::catalog::{SettingsOption, APP_VERSION, COPYRIGHT_NOTICE, SETTINGS_OPTIONS};
use cb_core::identity::Identity;

/// Settings tab. Sign-out is routed through the shell, not handled here.
#[derive(Debug, Clone)]
pub struct SettingsView<'a> {
    identity: &'a Identity,
}

impl<'a> SettingsView<'a> {
    pub fn new(identity: &'a Identity) -> Self {
        Self { identity }
    }

    pub fn avatar_initial(&self) -> char {
        self.identity.initial()
    }

    pub fn name(&self) -> &str {
        self.identity.display_name_or_default()
    }

    pub fn email(&self) -> &str {
        &self.identity.email
    }

    pub fn options(&self) -> &'static [SettingsOption] {
        &SETTINGS_OPTIONS
    }

    pub fn version_label(&self) -> String {
        format!("App Version {APP_VERSION}")
    }

    pub fn copyright(&self) -> &'static str {
        COPYRIGHT_NOTICE
    }
}
