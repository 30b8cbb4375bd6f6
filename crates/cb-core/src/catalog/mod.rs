//! Static reference data shown by the screens.
//!
//! None of this is fetched; it ships with the client.

mod bills;
mod gift_cards;
mod market;
mod onboarding;
mod settings;
mod transactions;

pub use bills::{providers_for, BillCategory, BillProvider, BILL_CATEGORIES};
pub use gift_cards::{GiftCard, GIFT_CARDS};
pub use market::{CryptoAsset, QuickAction, CRYPTO_ASSETS, QUICK_ACTIONS};
pub use onboarding::{OnboardingSlide, ONBOARDING_SLIDES};
pub use settings::{SettingsOption, APP_VERSION, COPYRIGHT_NOTICE, SETTINGS_OPTIONS};
pub use transactions::{MockTransaction, TransactionKind, MOCK_TRANSACTIONS};

/// Case-insensitive substring match used by the search boxes.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(&query.to_lowercase())
}
