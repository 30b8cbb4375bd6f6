//! Dashboard domain models: tabs and the wallet summary snapshot.

mod tab;
mod wallet;

pub use tab::DashboardTab;
pub use wallet::{WalletSummary, BTC_TO_NGN_RATE, USDT_TO_NGN_RATE};
