//! Identity domain models
//!
//! An [`Identity`] is the signed-in user as reported by the backend identity
//! service. It is read-only on the client: the gate holds whatever the most
//! recent session notification or startup lookup delivered.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::security::SecretString;

const FALLBACK_DISPLAY_NAME: &str = "User";
const FALLBACK_INITIAL: char = 'U';

/// Authenticated user record.
///
/// Unknown fields in the backend payload are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<UserId>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name: None,
            phone: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Name shown in the profile header.
    pub fn display_name_or_default(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => FALLBACK_DISPLAY_NAME,
        }
    }

    /// Avatar letter: display name first, then email, then `U`.
    pub fn initial(&self) -> char {
        self.display_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .or_else(|| self.email.chars().next())
            .unwrap_or(FALLBACK_INITIAL)
    }
}

/// Email/password pair for sign-in.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Account creation request.
///
/// Must pass [`crate::validation::validate_sign_up`] before it is handed to
/// the identity gateway.
#[derive(Debug)]
pub struct SignUpRequest {
    pub email: String,
    pub password: SecretString,
    pub display_name: String,
    pub phone: String,
}

impl SignUpRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<SecretString>,
        display_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: display_name.into(),
            phone: phone.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_prefers_display_name_then_email() {
        let named = Identity::new("u1", "ada@example.com").with_display_name("Grace");
        assert_eq!(named.initial(), 'G');

        let unnamed = Identity::new("u1", "ada@example.com");
        assert_eq!(unnamed.initial(), 'a');

        let empty = Identity::new("u1", "");
        assert_eq!(empty.initial(), 'U');
    }

    #[test]
    fn display_name_defaults_to_user() {
        let identity = Identity::new("u1", "ada@example.com");
        assert_eq!(identity.display_name_or_default(), "User");

        let blank = Identity::new("u1", "ada@example.com").with_display_name("");
        assert_eq!(blank.display_name_or_default(), "User");
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let json = r#"{
            "id": "u1",
            "email": "ada@example.com",
            "display_name": "Ada",
            "aud": "authenticated",
            "created_at": "2025-01-01T00:00:00Z"
        }"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.id.as_str(), "u1");
        assert_eq!(identity.display_name.as_deref(), Some("Ada"));
        assert_eq!(identity.phone, None);
    }
}
