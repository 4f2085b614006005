//! Ping configuration: defaults, JSON loading and validation

use crate::error::{AppError, Result};
use crate::logging::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied by [`crate::runner::Pinger`] when a call leaves them out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingConfig {
    /// Packets per run
    pub count: u32,

    /// Seconds between packets, `None` for the ping binary's default
    pub interval_secs: Option<f64>,

    /// Shell handed to the executor, `None` for the executor's default
    pub shell: Option<String>,

    /// Redirection target for background runs
    pub background_output: String,

    /// Emit run logs on stdout/stderr; runs are silent otherwise
    pub log_to_console: bool,

    /// Minimum level emitted by the ping logger
    pub log_level: LogLevel,

    /// Log line format
    pub log_format: LogFormat,

    /// Enable colored terminal output
    pub enable_color: bool,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            count: crate::defaults::DEFAULT_COUNT,
            interval_secs: None,
            shell: None,
            background_output: crate::defaults::NULL_DEVICE.to_string(),
            log_to_console: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Console,
            enable_color: crate::defaults::DEFAULT_ENABLE_COLOR,
        }
    }
}

impl PingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document; missing keys take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    /// Validate the configuration and return the first problem found
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(AppError::config("count must be greater than 0"));
        }

        if let Some(secs) = self.interval_secs {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(AppError::config(format!(
                    "interval_secs must be a positive number, got {}",
                    secs
                )));
            }
        }

        if let Some(shell) = &self.shell {
            if shell.trim().is_empty() {
                return Err(AppError::config("shell must not be empty when set"));
            }
        }

        if self.background_output.is_empty() {
            return Err(AppError::config("background_output must not be empty"));
        }

        Ok(())
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_interval(mut self, secs: f64) -> Self {
        self.interval_secs = Some(secs);
        self
    }

    pub fn with_shell<S: Into<String>>(mut self, shell: S) -> Self {
        self.shell = Some(shell.into());
        self
    }

    pub fn with_background_output<S: Into<String>>(mut self, filename: S) -> Self {
        self.background_output = filename.into();
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
