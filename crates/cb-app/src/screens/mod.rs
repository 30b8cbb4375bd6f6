//! Screen view models.
//!
//! Each screen holds only its own UI state and reads the shared wallet
//! record by reference. Rendering is left to the front end.

mod auth_form;
mod bills;
mod gift_cards;
mod home;
mod onboarding;
mod settings;
mod wallet;

pub use auth_form::{AuthForm, AuthMode, AuthSubmission};
pub use bills::BillsView;
pub use gift_cards::{GiftCardsView, NO_GIFT_CARDS_FOUND, NO_RECENT_PURCHASES};
pub use home::{HomeView, MASKED_BALANCE};
pub use onboarding::{CarouselStep, OnboardingCarousel};
pub use settings::SettingsView;
pub use wallet::{AssetRow, WalletSubTab, WalletView, BALANCE_PLACEHOLDER};

pub use bills::NO_RECENT_PAYMENTS;
