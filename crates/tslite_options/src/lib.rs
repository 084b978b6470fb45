//! tslite_options: front end configuration.
//!
//! Options come from a JSON config file and can be overridden per process
//! through `TSLITE_*` environment variables. Every field is optional; unset
//! fields fall back to their defaults at the accessor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_LOG_ACTIONS: &str = "TSLITE_LOG_ACTIONS";
pub const ENV_LOG_RELEASES: &str = "TSLITE_LOG_RELEASES";
pub const ENV_WARN_UNKNOWN_TYPES: &str = "TSLITE_WARN_UNKNOWN_TYPES";

/// Front end options, matching the `frontendOptions` config schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendOptions {
    /// Log every semantic action at `debug` level.
    pub log_actions: Option<bool>,
    /// Log every released node at `trace` level.
    pub log_releases: Option<bool>,
    /// Report a warning when a type name resolves to `any` because it is unknown.
    pub warn_unknown_types: Option<bool>,
}

impl FrontendOptions {
    pub fn log_actions(&self) -> bool {
        self.log_actions.unwrap_or(false)
    }

    pub fn log_releases(&self) -> bool {
        self.log_releases.unwrap_or(false)
    }

    pub fn warn_unknown_types(&self) -> bool {
        self.warn_unknown_types.unwrap_or(false)
    }

    /// Override fields from environment variables found through `lookup`.
    /// Values that are not a recognizable boolean leave the field unchanged.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let read = |name: &str| lookup(name).as_deref().and_then(parse_bool);
        if let Some(v) = read(ENV_LOG_ACTIONS) {
            self.log_actions = Some(v);
        }
        if let Some(v) = read(ENV_LOG_RELEASES) {
            self.log_releases = Some(v);
        }
        if let Some(v) = read(ENV_WARN_UNKNOWN_TYPES) {
            self.warn_unknown_types = Some(v);
        }
    }

    /// Defaults overridden by the current process environment.
    pub fn from_process_env() -> Self {
        let mut options = Self::default();
        options.apply_env(|name| std::env::var(name).ok());
        options
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// The config file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendConfig {
    pub frontend_options: Option<FrontendOptions>,
}

impl FrontendConfig {
    pub fn options(&self) -> FrontendOptions {
        self.frontend_options.clone().unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a config from a string.
pub fn parse_config(content: &str) -> Result<FrontendConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a config from a path.
pub fn parse_config_file(path: &str) -> Result<FrontendConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let config = parse_config(&content)?;
    Ok(config)
}
