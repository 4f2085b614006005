//! Ping command construction
//!
//! Builds the token list for a `ping`/`ping6` invocation from a literal
//! destination address. The binary is chosen purely from the address family;
//! hostnames are rejected rather than resolved.
//!
//! Tokens are joined with single spaces and handed to a shell as-is. No
//! quoting or escaping is applied to the destination or to a background
//! output file, so callers must pass shell-safe values.

use crate::error::{AppError, Result};
use crate::models::IpVersion;
use std::fmt;
use std::net::IpAddr;

/// Marker appended to background invocations
const BACKGROUND_MARKER: &str = "&";

/// An ordered ping invocation: binary followed by its arguments
#[derive(Debug, Clone, PartialEq)]
pub struct PingCommand {
    version: IpVersion,
    tokens: Vec<String>,
}

impl PingCommand {
    /// Build a validated ping invocation
    ///
    /// Fails with [`AppError::InvalidArgument`] when `count` is 0, when
    /// `destination` is empty or not a literal IPv4/IPv6 address, or when
    /// `interval` is not a positive finite number of seconds.
    pub fn build(count: u32, destination: &str, interval: Option<f64>) -> Result<Self> {
        if count == 0 {
            return Err(AppError::invalid_argument("count must be greater than 0"));
        }
        if destination.is_empty() {
            return Err(AppError::invalid_argument("destination must not be empty"));
        }
        if let Some(secs) = interval {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(AppError::invalid_argument(format!(
                    "interval must be a positive number of seconds, got {}",
                    secs
                )));
            }
        }

        let addr: IpAddr = destination.parse().map_err(|_| {
            AppError::invalid_argument(format!(
                "'{}' is not a literal IPv4 or IPv6 address",
                destination
            ))
        })?;
        let version = IpVersion::from(addr);

        let mut tokens = vec![
            version.binary().to_string(),
            "-c".to_string(),
            count.to_string(),
            destination.to_string(),
        ];
        if let Some(secs) = interval {
            tokens.push("-i".to_string());
            tokens.push(secs.to_string());
        }

        Ok(Self { version, tokens })
    }

    /// Address family the command was built for
    pub fn version(&self) -> IpVersion {
        self.version
    }

    /// Binary name, `ping` or `ping6`
    pub fn binary(&self) -> &str {
        &self.tokens[0]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Single command line for a foreground run
    pub fn command_line(&self) -> String {
        self.tokens.join(" ")
    }

    /// Command line that appends stdout to `filename` and backgrounds the job
    pub fn background(&self, filename: &str) -> Result<String> {
        if filename.is_empty() {
            return Err(AppError::invalid_argument("output filename must not be empty"));
        }
        Ok(format!(
            "{} >> {} {}",
            self.command_line(),
            filename,
            BACKGROUND_MARKER
        ))
    }
}

impl fmt::Display for PingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}
