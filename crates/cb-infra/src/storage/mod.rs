//! [`LocalStoragePort`](cb_core::ports::LocalStoragePort) implementations.

mod file;
mod memory;

pub use file::{FileLocalStorage, DEFAULT_STORAGE_FILE};
pub use memory::InMemoryLocalStorage;
