//! Remote Ping
//!
//! Issues ICMP echo requests through a pluggable command executor and parses
//! the textual output of `ping`/`ping6` into structured results. Background
//! pings are launched as shell jobs and reported by process id.

pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;
pub mod runner;

// Re-export commonly used types
pub use command::PingCommand;
pub use config::PingConfig;
pub use error::{AppError, Result};
pub use executor::{from_fn, CommandExecutor, LocalShellExecutor};
pub use models::{IpVersion, PingResult};
pub use output::{ColoredFormatter, JsonFormatter, OutputFormatter, PlainFormatter};
pub use parser::{parse_background_pid, parse_ping_output};
pub use runner::{ping, ping_background, Pinger};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    pub const DEFAULT_COUNT: u32 = 10;
    pub const DEFAULT_ENABLE_COLOR: bool = true;

    /// Discard target for background output
    #[cfg(not(windows))]
    pub const NULL_DEVICE: &str = "/dev/null";
    #[cfg(windows)]
    pub const NULL_DEVICE: &str = "nul";
}
