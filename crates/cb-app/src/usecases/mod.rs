//! Use cases.
//!
//! Each use case holds the ports it needs as `Arc<dyn Port>` and exposes a
//! single async `execute`.

pub mod auth;
pub mod onboarding;
pub mod wallet;

pub use auth::{GetCurrentIdentity, SignIn, SignOut, SignUp};
pub use onboarding::{CompleteOnboarding, LoadOnboardingFlag};
pub use wallet::FetchWalletSummary;
