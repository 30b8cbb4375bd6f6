//! ID type wrappers for type safety.

pub mod user_id;

pub use user_id::UserId;
