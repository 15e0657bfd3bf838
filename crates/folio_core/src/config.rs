//! Site configuration.
//!
//! # Responsibility
//! - Load site settings from an optional JSON file with per-field defaults.
//! - Apply the `FOLIO_SITE_URL` environment override.
//!
//! # Invariants
//! - A config returned by [`SiteConfig::load`] has passed [`SiteConfig::validate`].
//! - `site_url` never ends with `/`.

use crate::logging::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding [`SiteConfig::site_url`].
pub const SITE_URL_ENV: &str = "FOLIO_SITE_URL";
pub const DEFAULT_SITE_URL: &str = "https://example.com";
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;
const MAX_DELAY_MS: u64 = 5_000;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::InvalidValue { field, message } => write!(f, "invalid `{field}`: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Runtime settings for page services and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute base URL used by the sitemap.
    pub site_url: String,
    /// Quiet period before a tag change is written to the URL.
    pub url_debounce_ms: u64,
    /// Length of the creations cross-fade.
    pub transition_ms: u64,
    pub log_level: String,
    /// Optional JSON catalog replacing the builtin content.
    pub content_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            url_debounce_ms: DEFAULT_DEBOUNCE_MS,
            transition_ms: DEFAULT_DEBOUNCE_MS,
            log_level: default_log_level().to_string(),
            content_path: None,
        }
    }
}

impl SiteConfig {
    /// Parses config JSON, applies the site URL override and validates.
    pub fn from_json_str(json: &str, site_url_override: Option<String>) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = serde_json::from_str(json)?;
        if let Some(url) = site_url_override.filter(|value| !value.trim().is_empty()) {
            config.site_url = url;
        }
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Loads config from `path`, or defaults when `path` is `None`.
    ///
    /// Reads [`SITE_URL_ENV`] from the process environment. A relative
    /// `contentPath` is resolved against the directory holding `path`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let site_url_override = std::env::var(SITE_URL_ENV).ok();
        let Some(path) = path else {
            return Self::from_json_str("{}", site_url_override);
        };
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json_str(&json, site_url_override)?;
        config.resolve_content_path(path);
        Ok(config)
    }

    pub fn url_debounce(&self) -> Duration {
        Duration::from_millis(self.url_debounce_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.site_url.starts_with("http://") || self.site_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "siteUrl",
                message: format!("expected http(s) URL, got `{}`", self.site_url),
            });
        }
        for (field, value) in [
            ("urlDebounceMs", self.url_debounce_ms),
            ("transitionMs", self.transition_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: format!("{value} exceeds {MAX_DELAY_MS} ms"),
                });
            }
        }
        Ok(())
    }

    fn resolve_content_path(&mut self, config_path: &Path) {
        let Some(content_path) = self.content_path.as_mut() else {
            return;
        };
        if content_path.is_absolute() {
            return;
        }
        if let Some(dir) = config_path.parent() {
            *content_path = dir.join(&*content_path);
        }
    }

    fn normalize(&mut self) {
        let trimmed = self.site_url.trim().trim_end_matches('/');
        self.site_url = trimmed.to_string();
    }
}
