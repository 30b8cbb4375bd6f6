//! Infrastructure adapters: local storage and the backend REST API.

pub mod backend;
pub mod storage;

pub use backend::{BackendClient, BackendConfig, RestIdentityGateway, RestWalletRepository};
pub use storage::{FileLocalStorage, InMemoryLocalStorage};
