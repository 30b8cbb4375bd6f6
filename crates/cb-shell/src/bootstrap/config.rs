//! Configuration loading.
//!
//! The TOML file is read as-is into [`AppConfig`]; environment overrides are
//! layered on top; only then is the result checked for a usable backend.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cb_app::AppPaths;
use cb_core::config::AppConfig;
use tracing::{debug, info};

use super::BootstrapError;

pub const BACKEND_URL_ENV: &str = "CRYPTOBILL_BACKEND_URL";
pub const ANON_KEY_ENV: &str = "CRYPTOBILL_ANON_KEY";

/// Read and map a TOML file. No validation.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Replace backend settings with non-empty values from `lookup`.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(BACKEND_URL_ENV) {
        debug!(env = BACKEND_URL_ENV, "backend url overridden from environment");
        config.backend_url = url;
    }
    if let Some(key) = non_empty(ANON_KEY_ENV) {
        debug!(env = ANON_KEY_ENV, "anon key overridden from environment");
        config.backend_anon_key = key;
    }
    config
}

/// Produce the effective configuration.
///
/// `explicit_path` must exist when given. Otherwise the per-user config file
/// is used if present. Relative and empty storage paths are resolved against
/// the app data directory.
pub fn resolve_config(
    paths: &AppPaths,
    explicit_path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, BootstrapError> {
    let config_path = explicit_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paths.config_path.clone());

    let from_file = if explicit_path.is_some() || config_path.exists() {
        info!(path = %config_path.display(), "loading configuration");
        load_config(&config_path).map_err(BootstrapError::Config)?
    } else {
        debug!(path = %config_path.display(), "no configuration file, using defaults");
        AppConfig::empty()
    };

    let mut config = apply_env_overrides(from_file, lookup);
    config.storage_path = resolve_storage_path(&config.storage_path, paths);

    if !config.has_backend() {
        return Err(BootstrapError::BackendNotConfigured {
            config_path: config_path.display().to_string(),
        });
    }
    Ok(config)
}

fn resolve_storage_path(configured: &Path, paths: &AppPaths) -> PathBuf {
    if configured.as_os_str().is_empty() {
        return paths.storage_path.clone();
    }
    if configured.is_relative() {
        if let Some(root) = paths.storage_path.parent() {
            return root.join(configured);
        }
    }
    configured.to_path_buf()
}
