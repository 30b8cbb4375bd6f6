//! Dashboard shell: tab selection plus the wallet record shared by the tabs.

mod shell;

pub use shell::{DashboardShell, WalletLoad};
