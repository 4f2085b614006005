//! Data models for ping runs

pub mod result;

pub use result::{IpVersion, PingResult};
