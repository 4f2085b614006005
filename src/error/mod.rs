//! Error handling for remote ping runs

use thiserror::Error;

/// Error taxonomy for command building, execution and output parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Malformed inputs to the command builder or runners
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output of a successful execution did not have the expected shape
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Failure reported by the execution capability
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (config files, local process spawn)
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type alias for ping operations
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new execution error
    pub fn execution<S: Into<String>>(message: S) -> Self {
        Self::Execution(message.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "ARGUMENT",
            Self::Parse(_) => "PARSE",
            Self::Execution(_) => "EXECUTION",
            Self::Config(_) => "CONFIG",
            Self::Io(_) => "IO",
        }
    }

    /// True for errors raised before any command was handed to an executor
    pub fn is_pre_execution(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::Config(_))
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Config(_) => 1,
            Self::Parse(_) => 2,
            Self::Execution(_) => 3,
            Self::Io(_) => 5,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::InvalidArgument(_) | Self::Config(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Parse(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Execution(_) | Self::Io(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::config(format!("JSON parse error: {}", error))
    }
}
