//! Foreground and background ping runners
//!
//! Each runner validates its inputs, builds one command line, makes exactly
//! one blocking call to the executor and parses what comes back. Executor
//! failures are returned untouched; nothing is retried.

use crate::command::PingCommand;
use crate::config::PingConfig;
use crate::error::{AppError, Result};
use crate::executor::CommandExecutor;
use crate::logging::PingLogger;
use crate::models::PingResult;
use crate::parser::{parse_background_pid, parse_ping_output};
use std::cell::RefCell;

/// Run ping in the foreground and parse its statistics line
pub fn ping<E>(
    executor: &E,
    count: u32,
    destination: &str,
    interval: Option<f64>,
    shell: Option<&str>,
) -> Result<PingResult>
where
    E: CommandExecutor + ?Sized,
{
    let command = PingCommand::build(count, destination, interval)?;
    let raw = executor.execute(&command.command_line(), shell)?;
    if raw.is_empty() {
        return Err(AppError::execution(format!(
            "'{}' produced no output",
            command
        )));
    }
    parse_ping_output(&raw)
}

/// Launch ping as a background shell job and return its pid
///
/// Standard output is appended to `filename`; pass
/// [`crate::defaults::NULL_DEVICE`] to discard it.
pub fn ping_background<E>(
    executor: &E,
    count: u32,
    destination: &str,
    filename: &str,
    interval: Option<f64>,
    shell: Option<&str>,
) -> Result<u32>
where
    E: CommandExecutor + ?Sized,
{
    if filename.is_empty() {
        return Err(AppError::invalid_argument("output filename must not be empty"));
    }
    let command = PingCommand::build(count, destination, interval)?;
    let raw = executor.execute(&command.background(filename)?, shell)?;
    parse_background_pid(&raw)
}

/// Logs each command on its way to the wrapped executor
struct Dispatch<'a, E: ?Sized> {
    inner: &'a E,
    logger: &'a PingLogger,
    background: bool,
    correlation_id: RefCell<Option<String>>,
}

impl<'a, E: CommandExecutor + ?Sized> Dispatch<'a, E> {
    fn new(inner: &'a E, logger: &'a PingLogger, background: bool) -> Self {
        Self { inner, logger, background, correlation_id: RefCell::new(None) }
    }

    /// Correlation ID of the dispatched command, `None` if validation failed first
    fn correlation_id(&self) -> Option<String> {
        self.correlation_id.borrow().clone()
    }
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for Dispatch<'_, E> {
    fn execute(&self, command: &str, shell: Option<&str>) -> Result<String> {
        let id = self.logger.log_dispatch(command, shell, self.background);
        *self.correlation_id.borrow_mut() = Some(id);
        self.inner.execute(command, shell)
    }
}

/// Runner bound to an executor, with defaults and logging from a [`PingConfig`]
pub struct Pinger<E> {
    executor: E,
    config: PingConfig,
    logger: PingLogger,
}

impl<E: CommandExecutor> Pinger<E> {
    /// Create a pinger with the default configuration
    pub fn new(executor: E) -> Self {
        let config = PingConfig::default();
        let logger = PingLogger::from_config(&config);
        Self { executor, config, logger }
    }

    /// Create a pinger after validating `config`
    pub fn with_config(executor: E, config: PingConfig) -> Result<Self> {
        config.validate()?;
        let logger = PingLogger::from_config(&config);
        Ok(Self { executor, config, logger })
    }

    /// Replace the ping logger
    pub fn with_logger(mut self, logger: PingLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &PingConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn logger(&self) -> &PingLogger {
        &self.logger
    }

    /// Foreground ping using the configured count and interval
    pub fn ping(&self, destination: &str) -> Result<PingResult> {
        self.ping_with(self.config.count, destination, self.config.interval_secs)
    }

    /// Foreground ping with an explicit count and interval
    pub fn ping_with(&self, count: u32, destination: &str, interval: Option<f64>) -> Result<PingResult> {
        let dispatch = Dispatch::new(&self.executor, &self.logger, false);
        let outcome = ping(&dispatch, count, destination, interval, self.config.shell.as_deref());
        let correlation_id = dispatch.correlation_id();

        match (&outcome, &correlation_id) {
            (Ok(result), Some(id)) => self.logger.log_result(id, destination, result),
            (Ok(_), None) => {}
            (Err(e), id) => self.logger.log_failure(id.as_deref(), destination, e),
        }
        outcome
    }

    /// Background ping writing to the configured output target
    pub fn ping_background(&self, destination: &str) -> Result<u32> {
        self.ping_background_to(destination, &self.config.background_output)
    }

    /// Background ping appending its output to `filename`
    pub fn ping_background_to(&self, destination: &str, filename: &str) -> Result<u32> {
        let dispatch = Dispatch::new(&self.executor, &self.logger, true);
        let outcome = ping_background(
            &dispatch,
            self.config.count,
            destination,
            filename,
            self.config.interval_secs,
            self.config.shell.as_deref(),
        );
        let correlation_id = dispatch.correlation_id();

        match (&outcome, &correlation_id) {
            (Ok(pid), Some(id)) => self.logger.log_pid(id, destination, *pid),
            (Ok(_), None) => {}
            (Err(e), id) => self.logger.log_failure(id.as_deref(), destination, e),
        }
        outcome
    }
}
