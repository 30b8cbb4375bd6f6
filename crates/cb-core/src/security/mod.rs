//! Secret handling for credentials.

mod secret;

pub use secret::SecretString;
