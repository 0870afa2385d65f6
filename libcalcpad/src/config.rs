//! Configuration management for Calcpad
//!
//! Configuration is optional: a missing file yields defaults. Environment
//! variables override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;
use crate::recovery::{RecoveryPolicy, DEFAULT_RECOVERY_DELAY};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub recovery: RecoveryConfig,
    pub ui: UiConfig,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    pub delay_ms: u64,
    pub policy: RecoveryPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    pub mouse: bool,
    pub colors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: String,
    pub level: String,
    /// Log file for the TUI; it never logs to the terminal it draws on
    pub file: Option<String>,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_RECOVERY_DELAY.as_millis() as u64,
            policy: RecoveryPolicy::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            mouse: true,
            colors: true,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, then apply env overrides
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        let config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default()
        };
        config.with_env_overrides().validated()
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validated()
    }

    /// Apply `CALCPAD_*` and `NO_COLOR` environment overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(ms) = env_parse("CALCPAD_RECOVERY_MS") {
            self.recovery.delay_ms = ms;
        }
        if let Some(ms) = env_parse("CALCPAD_TUI_TICK_MS") {
            self.ui.tick_rate_ms = ms;
        }
        if std::env::var("NO_COLOR").is_ok() || std::env::var("CALCPAD_NO_COLOR").is_ok() {
            self.ui.colors = false;
        }
        if let Ok(format) = std::env::var("CALCPAD_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(level) = std::env::var("CALCPAD_LOG_LEVEL") {
            self.logging.level = level;
        }
        self
    }

    /// Reject values the calculator cannot run with
    pub fn validated(self) -> Result<Self> {
        if self.recovery.delay_ms == 0 {
            return Err(invalid("recovery.delay_ms", "must be greater than zero"));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms", "must be greater than zero"));
        }
        self.log_format()?;
        Ok(self)
    }

    pub fn recovery_delay(&self) -> Duration {
        Duration::from_millis(self.recovery.delay_ms)
    }

    pub fn log_format(&self) -> Result<LogFormat> {
        self.logging
            .format
            .parse()
            .map_err(|reason| invalid("logging.format", reason))
    }

    /// Log file path with `~` expanded
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

/// Resolve the configuration file path following the XDG Base Directory layout
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CALCPAD_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("calcpad").join("config.toml"))
}

fn env_parse(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

fn invalid(field: &str, reason: impl Into<String>) -> crate::error::CalcpadError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
    .into()
}
