//! Environment lookup with an optional dotenv-style overlay.

use std::{collections::HashMap, path::Path};

use crate::ConfigError;

/// Variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Read-only source of environment-like variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// The process environment layered over values read from a dotenv file.
///
/// Real process variables win over the file. The process environment itself
/// is never modified.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv {
    overlay: HashMap<String, String>,
}

impl ProcessEnv {
    /// Load `path` as the overlay. A missing or unreadable file only logs a
    /// warning and leaves the overlay empty; malformed lines are skipped.
    pub fn load(path: &Path) -> Self {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(err) => {
                log::warn!(
                    "Could not load {} ({err}). Falling back to system environment variables.",
                    path.display()
                );
                return Self::default();
            }
        };

        let overlay: HashMap<String, String> = iter
            .filter_map(|item| match item {
                Ok(pair) => Some(pair),
                Err(err) => {
                    log::warn!("Skipping malformed entry in {}: {err}", path.display());
                    None
                }
            })
            .collect();

        log::debug!("loaded {} variable(s) from {}", overlay.len(), path.display());
        Self { overlay }
    }
}

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().or_else(|| self.overlay.get(key).cloned())
    }
}

/// `OPENWEATHER_API_KEY` from `env`; unset or blank is fatal.
pub fn resolve_api_key(env: &dyn EnvSource) -> Result<String, ConfigError> {
    env.var(API_KEY_VAR)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or(ConfigError::MissingApiKey)
}
