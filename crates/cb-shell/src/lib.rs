//! Terminal shell for Crypto Bill Pay.
//!
//! `bootstrap` turns configuration into a running [`bootstrap::AppRuntime`];
//! `commands` is the only surface the front end calls; `render` and `repl`
//! are the text front end itself.

pub mod bootstrap;
pub mod commands;
pub mod render;
pub mod repl;

pub use bootstrap::{AppRuntime, BootstrapError, StorageMode};
pub use repl::Repl;
