//! Configuration management for the storefront client.

use crate::{CoreError, CoreResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Default API base URL (can be overridden at compile time via BUTCHERY_API_URL env var).
pub const DEFAULT_API_URL: &str = match option_env!("BUTCHERY_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api/v1",
};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default UI locale.
pub const DEFAULT_LOCALE: &str = "en";

/// Runtime override for the API base URL.
pub const ENV_API_URL: &str = "BUTCHERY_API_URL";

/// Runtime override for the log level.
pub const ENV_LOG_LEVEL: &str = "BUTCHERY_LOG_LEVEL";

/// Runtime override for the UI locale.
pub const ENV_LOCALE: &str = "BUTCHERY_LOCALE";

/// Storefront client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Backend REST API base URL, including the version prefix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// UI locale code (`en` or `ar`).
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            api_url: default_api_url(),
            locale: default_locale(),
        }
    }
}

impl Config {
    /// Load `config.json` from the data directory if present, then apply
    /// environment overrides. Environment always wins over the file.
    pub fn load(paths: &Paths) -> CoreResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, paths: &Paths) -> CoreResult<()> {
        paths.ensure_dirs()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.config_file(), content)?;
        Ok(())
    }

    /// Apply overrides from an environment lookup. Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(api_url) = non_empty(ENV_API_URL) {
            self.api_url = api_url;
        }
        if let Some(log_level) = non_empty(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }
        if let Some(locale) = non_empty(ENV_LOCALE) {
            self.locale = locale;
        }
    }

    /// The API base URL, parsed and checked for an http(s) scheme.
    pub fn api_url(&self) -> CoreResult<Url> {
        let url = Url::parse(&self.api_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CoreError::Config(format!(
                "API URL must use http or https, got {other}"
            ))),
        }
    }
}
