//! Structured logging for ping runs
//!
//! This module provides:
//! - Leveled log entries with structured fields
//! - Console, JSON and compact line formats
//! - Correlation IDs tying a dispatched command to its parsed outcome
//! - An in-memory sink so callers and tests can capture log lines

use crate::config::PingConfig;
use crate::error::{AppError, Result};
use crate::models::PingResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, RwLock};
use uuid::Uuid;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace level - most detailed
    Trace = 0,
    /// Debug level - detailed information for debugging
    Debug = 1,
    /// Info level - general information
    Info = 2,
    /// Warning level - potentially harmful situations
    Warn = 3,
    /// Error level - failed operations
    Error = 4,
    /// Fatal level - unrecoverable failures
    Fatal = 5,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Get ANSI color code for console output
    pub fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Trace => "\x1b[37m",    // White
            LogLevel::Debug => "\x1b[36m",    // Cyan
            LogLevel::Info => "\x1b[32m",     // Green
            LogLevel::Warn => "\x1b[33m",     // Yellow
            LogLevel::Error => "\x1b[31m",    // Red
            LogLevel::Fatal => "\x1b[35m",    // Magenta
        }
    }

    /// Reset ANSI color code
    pub fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(AppError::config(format!("Invalid log level: {}", s))),
        }
    }
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    /// Human-readable console format
    Console,
    /// JSON format for structured logging
    Json,
    /// Compact single-line format
    Compact,
}

/// Log entry structure for structured logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp when log entry was created
    pub timestamp: DateTime<Utc>,
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Logger name/component
    pub logger: String,
    /// Correlation ID for tracking related events
    pub correlation_id: Option<String>,
    /// Additional structured fields
    pub fields: HashMap<String, serde_json::Value>,
}

/// Where formatted lines go
#[derive(Debug, Clone)]
pub enum LogSink {
    /// stdout, with warnings and above on stderr
    Stdio,
    /// Shared in-memory buffer
    Memory(Arc<Mutex<Vec<String>>>),
    /// Drop everything
    Discard,
}

/// Shared logging context
#[derive(Debug, Default)]
struct LogContext {
    session_id: Option<String>,
    context_fields: HashMap<String, serde_json::Value>,
}

/// Logger implementation with multiple output formats
#[derive(Debug, Clone)]
pub struct Logger {
    min_level: LogLevel,
    use_color: bool,
    format: LogFormat,
    name: String,
    sink: LogSink,
    context: Arc<RwLock<LogContext>>,
}

impl Logger {
    /// Create a new logger
    pub fn new(name: String) -> Self {
        Self {
            min_level: LogLevel::Info,
            use_color: true,
            format: LogFormat::Console,
            name,
            sink: LogSink::Stdio,
            context: Arc::new(RwLock::new(LogContext::default())),
        }
    }

    /// Create a logger that writes into `buffer` instead of stdio
    pub fn in_memory(name: String, buffer: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            sink: LogSink::Memory(buffer),
            use_color: false,
            ..Self::new(name)
        }
    }

    /// Create a logger that emits nothing
    pub fn discarding(name: String) -> Self {
        Self {
            sink: LogSink::Discard,
            ..Self::new(name)
        }
    }

    /// Set minimum log level
    pub fn set_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Set output format
    pub fn set_format(&mut self, format: LogFormat) {
        self.format = format;
    }

    /// Enable or disable colored output
    pub fn set_color(&mut self, use_color: bool) {
        self.use_color = use_color;
    }

    /// Set session correlation ID
    pub fn set_session_id(&self, session_id: String) {
        if let Ok(mut context) = self.context.write() {
            context.session_id = Some(session_id);
        }
    }

    /// Add context field for all subsequent log entries
    pub fn add_context_field<T: Serialize>(&self, key: String, value: T) {
        if let Ok(json_value) = serde_json::to_value(value) {
            if let Ok(mut context) = self.context.write() {
                context.context_fields.insert(key, json_value);
            }
        }
    }

    /// Create a log entry builder
    pub fn log(&self, level: LogLevel, message: &str) -> LogEntryBuilder<'_> {
        LogEntryBuilder::new(self, level, message.to_string())
    }

    /// Convenience methods for different log levels
    pub fn trace(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Trace, message)
    }

    pub fn debug(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Error, message)
    }

    /// Check if a log level would be output
    pub fn would_log(&self, level: LogLevel) -> bool {
        !matches!(self.sink, LogSink::Discard) && level >= self.min_level
    }

    fn write_entry(&self, mut entry: LogEntry) {
        if !self.would_log(entry.level) {
            return;
        }

        if let Ok(context) = self.context.read() {
            if let Some(session_id) = &context.session_id {
                entry.fields.insert(
                    "session_id".to_string(),
                    serde_json::Value::String(session_id.clone()),
                );
            }
            for (key, value) in &context.context_fields {
                entry.fields.insert(key.clone(), value.clone());
            }
        }

        let output = match self.format {
            LogFormat::Console => self.format_console(&entry),
            LogFormat::Json => self.format_json(&entry),
            LogFormat::Compact => self.format_compact(&entry),
        };

        match &self.sink {
            LogSink::Stdio if entry.level >= LogLevel::Warn => {
                let _ = writeln!(io::stderr(), "{}", output);
            }
            LogSink::Stdio => {
                let _ = writeln!(io::stdout(), "{}", output);
            }
            LogSink::Memory(buffer) => {
                if let Ok(mut lines) = buffer.lock() {
                    lines.push(output);
                }
            }
            LogSink::Discard => {}
        }
    }

    fn format_console(&self, entry: &LogEntry) -> String {
        let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
        let level_str = entry.level.as_str();

        let formatted_level = if self.use_color {
            format!("{}{:>5}{}", entry.level.color_code(), level_str, LogLevel::reset_code())
        } else {
            format!("{:>5}", level_str)
        };

        let mut output = format!("{} {} [{}] {}", timestamp, formatted_level, entry.logger, entry.message);

        if let Some(correlation_id) = &entry.correlation_id {
            let short = correlation_id.get(..8).unwrap_or(correlation_id.as_str());
            output.push_str(&format!(" [{}]", short));
        }

        if !entry.fields.is_empty() {
            let mut fields: Vec<String> = entry
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            fields.sort();
            output.push_str(&format!(" {{{}}}", fields.join(", ")));
        }

        output
    }

    fn format_json(&self, entry: &LogEntry) -> String {
        match serde_json::to_string(entry) {
            Ok(json) => json,
            Err(_) => format!(
                "{{\"error\": \"Failed to serialize log entry\", \"message\": \"{}\"}}",
                entry.message
            ),
        }
    }

    fn format_compact(&self, entry: &LogEntry) -> String {
        let timestamp = entry.timestamp.format("%H:%M:%S");
        format!(
            "{} {} {}: {}",
            timestamp,
            entry.level.as_str().chars().next().unwrap_or('?'),
            entry.logger,
            entry.message
        )
    }
}

/// Builder pattern for creating log entries
pub struct LogEntryBuilder<'a> {
    logger: &'a Logger,
    entry: LogEntry,
}

impl<'a> LogEntryBuilder<'a> {
    fn new(logger: &'a Logger, level: LogLevel, message: String) -> Self {
        Self {
            logger,
            entry: LogEntry {
                timestamp: Utc::now(),
                level,
                message,
                logger: logger.name.clone(),
                correlation_id: None,
                fields: HashMap::new(),
            },
        }
    }

    /// Add a correlation ID
    pub fn correlation_id(mut self, id: &str) -> Self {
        self.entry.correlation_id = Some(id.to_string());
        self
    }

    /// Add a structured field
    pub fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.entry.fields.insert(key.to_string(), json_value);
        }
        self
    }

    /// Add parsed ping statistics
    pub fn ping_result(self, result: &PingResult) -> Self {
        self.field("transmitted", result.transmitted)
            .field("received", result.received)
            .field("errors", result.errors)
            .field("loss_pc", result.loss_pc)
            .field("time_ms", result.time_ms)
    }

    /// Add error information
    pub fn error_info(self, error: &AppError) -> Self {
        self.field("error_category", error.category())
            .field("error_exit_code", error.exit_code())
    }

    /// Finalize and write the log entry
    pub fn log(self) {
        self.logger.write_entry(self.entry);
    }
}

/// Logger for the ping lifecycle: dispatch, parse outcome, failure
#[derive(Debug, Clone)]
pub struct PingLogger {
    logger: Logger,
}

impl PingLogger {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Build a ping logger from level/format/color settings
    pub fn with_settings(level: LogLevel, format: LogFormat, use_color: bool) -> Self {
        let mut logger = Logger::new("PING".to_string());
        logger.set_level(level);
        logger.set_format(format);
        logger.set_color(use_color);
        Self { logger }
    }

    /// Ping logger for `config`; silent unless `log_to_console` is set
    pub fn from_config(config: &PingConfig) -> Self {
        if config.log_to_console {
            Self::with_settings(config.log_level, config.log_format, config.enable_color)
        } else {
            Self::new(Logger::discarding("PING".to_string()))
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Log a command handed to the executor and return its correlation ID
    pub fn log_dispatch(&self, command: &str, shell: Option<&str>, background: bool) -> String {
        let correlation_id = Uuid::new_v4().to_string();
        self.logger
            .debug(&format!("Dispatching: {}", command))
            .correlation_id(&correlation_id)
            .field("command", command)
            .field("shell", shell)
            .field("background", background)
            .log();
        correlation_id
    }

    pub fn log_result(&self, correlation_id: &str, destination: &str, result: &PingResult) {
        let level = if result.is_reachable() { LogLevel::Info } else { LogLevel::Warn };
        self.logger
            .log(level, &format!("Ping to {}: {}", destination, result))
            .correlation_id(correlation_id)
            .field("destination", destination)
            .ping_result(result)
            .log();
    }

    pub fn log_pid(&self, correlation_id: &str, destination: &str, pid: u32) {
        self.logger
            .info(&format!("Background ping to {} running as pid {}", destination, pid))
            .correlation_id(correlation_id)
            .field("destination", destination)
            .field("pid", pid)
            .log();
    }

    pub fn log_failure(&self, correlation_id: Option<&str>, destination: &str, error: &AppError) {
        let mut builder = self
            .logger
            .error(&format!("Ping to {} failed: {}", destination, error))
            .field("destination", destination)
            .error_info(error);
        if let Some(id) = correlation_id {
            builder = builder.correlation_id(id);
        }
        builder.log();
    }
}
