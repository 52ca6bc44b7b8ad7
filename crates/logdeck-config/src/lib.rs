//! Shared configuration for the logdeck TUI.
//!
//! Defaults → TOML file (XDG path) → `LOGDECK_`-prefixed environment
//! variables, merged with figment, then translated into
//! `logdeck_core::DashboardConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use logdeck_core::DashboardConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// On-disk / environment configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Backend base URL.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Seconds between scheduled feed refreshes.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Whether scheduled refreshes start enabled.
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,

    /// Summaries requested per fetch.
    #[serde(default = "default_summaries_limit")]
    pub summaries_limit: u32,

    /// Alerts requested per fetch.
    #[serde(default = "default_alerts_limit")]
    pub alerts_limit: u32,

    /// Chat exchanges requested on the initial history load.
    #[serde(default = "default_chat_history_limit")]
    pub chat_history_limit: u32,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            refresh_interval_secs: default_refresh_interval(),
            auto_refresh: default_auto_refresh(),
            summaries_limit: default_summaries_limit(),
            alerts_limit: default_alerts_limit(),
            chat_history_limit: default_chat_history_limit(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_backend() -> String {
    "http://127.0.0.1:5000".into()
}
fn default_refresh_interval() -> u64 {
    30
}
fn default_auto_refresh() -> bool {
    true
}
fn default_summaries_limit() -> u32 {
    10
}
fn default_alerts_limit() -> u32 {
    20
}
fn default_chat_history_limit() -> u32 {
    20
}
fn default_timeout() -> u64 {
    30
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "logdeck", "logdeck").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("logdeck");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the config from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path (absent file is fine -- defaults and
/// environment still apply).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LOGDECK_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, falling back to defaults on any failure.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Validate and translate to the core's runtime config.
    pub fn to_dashboard_config(&self) -> Result<DashboardConfig, ConfigError> {
        let backend: url::Url = self
            .backend
            .parse()
            .map_err(|_| ConfigError::Validation {
                field: "backend".into(),
                reason: format!("invalid URL: {}", self.backend),
            })?;

        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::Validation {
                field: "refresh_interval_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }

        Ok(DashboardConfig {
            backend,
            refresh_interval: Duration::from_secs(self.refresh_interval_secs),
            summaries_limit: self.summaries_limit,
            alerts_limit: self.alerts_limit,
            chat_history_limit: self.chat_history_limit,
            timeout: Duration::from_secs(self.timeout_secs),
            auto_refresh: self.auto_refresh,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_match_the_dashboard_contract() {
        let cfg = Config::default();
        assert_eq!(cfg.refresh_interval_secs, 30);
        assert_eq!(cfg.summaries_limit, 10);
        assert_eq!(cfg.alerts_limit, 20);
        assert_eq!(cfg.chat_history_limit, 20);
        assert!(cfg.auto_refresh);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "backend = \"http://10.0.0.9:8080\"\nrefresh_interval_secs = 5"
        )
        .unwrap();

        let cfg = load_config_from(file.path()).unwrap();
        assert_eq!(cfg.backend, "http://10.0.0.9:8080");
        assert_eq!(cfg.refresh_interval_secs, 5);
        // Untouched fields keep defaults.
        assert_eq!(cfg.alerts_limit, 20);
    }

    #[test]
    fn missing_file_still_yields_defaults() {
        let cfg = load_config_from(Path::new("/nonexistent/logdeck.toml")).unwrap();
        assert_eq!(cfg.backend, "http://127.0.0.1:5000");
    }

    #[test]
    fn invalid_backend_url_fails_validation() {
        let cfg = Config {
            backend: "not a url".into(),
            ..Config::default()
        };
        let err = cfg.to_dashboard_config().unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "backend"));
    }

    #[test]
    fn zero_refresh_interval_is_rejected() {
        let cfg = Config {
            refresh_interval_secs: 0,
            ..Config::default()
        };
        assert!(cfg.to_dashboard_config().is_err());
    }

    #[test]
    fn translation_produces_durations() {
        let dash = Config::default().to_dashboard_config().unwrap();
        assert_eq!(dash.refresh_interval, Duration::from_secs(30));
        assert_eq!(dash.timeout, Duration::from_secs(30));
    }
}
