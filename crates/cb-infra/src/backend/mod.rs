//! Backend adapters over a Supabase-compatible REST API.
//!
//! `auth/v1` provides identity and sessions, `rest/v1` the wallet rows.

mod client;
mod dto;
mod identity;
mod session;
mod wallet;

pub use client::{BackendClient, BackendConfig};
pub use identity::RestIdentityGateway;
pub use session::{SessionStore, SESSION_STORAGE_KEY};
pub use wallet::RestWalletRepository;
