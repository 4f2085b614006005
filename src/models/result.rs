//! Parsed ping statistics and address family model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Counts and timing extracted from a ping statistics line
///
/// Values are produced fresh by every parse call; there is no partial form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PingResult {
    /// Packets sent
    pub transmitted: u32,
    /// Echo replies received
    pub received: u32,
    /// Error count reported by ping, 0 when the clause is absent
    #[serde(default)]
    pub errors: u32,
    /// Packet loss percentage
    pub loss_pc: u32,
    /// Total elapsed time in milliseconds
    pub time_ms: u64,
}

impl PingResult {
    /// Percentage of transmitted packets that were answered
    pub fn success_rate(&self) -> f64 {
        if self.transmitted == 0 {
            0.0
        } else {
            (self.received as f64 / self.transmitted as f64) * 100.0
        }
    }

    /// At least one reply came back
    pub fn is_reachable(&self) -> bool {
        self.received > 0
    }

    /// Every transmitted packet was answered without errors
    pub fn is_lossless(&self) -> bool {
        self.transmitted > 0 && self.loss_pc == 0 && self.errors == 0
    }

    /// Serialize to a JSON object keyed by field name
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "transmitted": self.transmitted,
            "received": self.received,
            "errors": self.errors,
            "loss_pc": self.loss_pc,
            "time_ms": self.time_ms,
        })
    }
}

impl fmt::Display for PingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} packets transmitted, {} received,", self.transmitted, self.received)?;
        if self.errors > 0 {
            write!(f, " +{} errors,", self.errors)?;
        }
        write!(f, " {}% packet loss, time {}ms", self.loss_pc, self.time_ms)
    }
}

/// Address family of a literal destination, which selects the ping binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Binary name used for this family
    pub fn binary(&self) -> &'static str {
        match self {
            IpVersion::V4 => "ping",
            IpVersion::V6 => "ping6",
        }
    }
}

impl From<IpAddr> for IpVersion {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => IpVersion::V4,
            IpAddr::V6(_) => IpVersion::V6,
        }
    }
}
