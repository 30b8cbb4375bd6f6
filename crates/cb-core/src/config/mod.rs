//! Configuration DTO.
//!
//! Data only. No validation and no default calculation happens here; an
//! empty backend URL is a fact, and deciding whether it is fatal belongs to
//! the bootstrap layer.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the backend service, e.g. `https://xyz.supabase.co`.
    pub backend_url: String,

    /// Public (anon) API key sent with every backend request.
    pub backend_anon_key: String,

    /// Per-request timeout in seconds. `0` means "not set".
    pub request_timeout_secs: u64,

    /// Local key-value storage file. Empty means "not set".
    pub storage_path: PathBuf,
}

impl AppConfig {
    /// Map a parsed TOML document onto the DTO. Missing keys become empty
    /// values, never errors.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let backend = toml_value.get("backend");
        Ok(Self {
            backend_url: backend
                .and_then(|b| b.get("url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            backend_anon_key: backend
                .and_then(|b| b.get("anon_key"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_secs: backend
                .and_then(|b| b.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            storage_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    pub fn empty() -> Self {
        Self {
            backend_url: String::new(),
            backend_anon_key: String::new(),
            request_timeout_secs: 0,
            storage_path: PathBuf::new(),
        }
    }

    /// Empty config whose storage file lives under `data_dir`.
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            storage_path: data_dir.join("local_storage.json"),
            ..Self::empty()
        }
    }

    pub fn has_backend(&self) -> bool {
        !self.backend_url.trim().is_empty() && !self.backend_anon_key.trim().is_empty()
    }
}
