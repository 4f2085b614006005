//! Rendering of ping results and errors for terminals and log collectors

use crate::error::{AppError, Result};
use crate::models::PingResult;
use colored::*;

/// Renders ping outcomes
pub trait OutputFormatter {
    /// Format a parsed ping result for a destination
    fn format_result(&self, destination: &str, result: &PingResult) -> Result<String>;

    /// Format a background launch
    fn format_pid(&self, destination: &str, pid: u32) -> Result<String>;

    /// Format an error message
    fn format_error(&self, error: &AppError) -> Result<String>;
}

/// Loss classification used for color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossLevel {
    None,
    Partial,
    Total,
}

impl LossLevel {
    pub fn from_result(result: &PingResult) -> Self {
        if result.received == 0 || result.loss_pc >= 100 {
            Self::Total
        } else if result.loss_pc > 0 || result.errors > 0 {
            Self::Partial
        } else {
            Self::None
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::None => Color::Green,
            Self::Partial => Color::Yellow,
            Self::Total => Color::Red,
        }
    }
}

/// Uncolored single-line output
#[derive(Debug, Clone, Default)]
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_result(&self, destination: &str, result: &PingResult) -> Result<String> {
        Ok(format!("{}: {}", destination, result))
    }

    fn format_pid(&self, destination: &str, pid: u32) -> Result<String> {
        Ok(format!("{}: background ping pid {}", destination, pid))
    }

    fn format_error(&self, error: &AppError) -> Result<String> {
        Ok(error.format_for_console(false))
    }
}

/// ANSI-colored output keyed on packet loss
#[derive(Debug, Clone, Default)]
pub struct ColoredFormatter;

impl OutputFormatter for ColoredFormatter {
    fn format_result(&self, destination: &str, result: &PingResult) -> Result<String> {
        let level = LossLevel::from_result(result);
        let loss = format!("{}% loss", result.loss_pc).color(level.color()).bold();
        Ok(format!(
            "{}: {}/{} received, {}, {}ms",
            destination.bold(),
            result.received,
            result.transmitted,
            loss,
            result.time_ms
        ))
    }

    fn format_pid(&self, destination: &str, pid: u32) -> Result<String> {
        Ok(format!("{}: background ping pid {}", destination.bold(), pid.to_string().cyan()))
    }

    fn format_error(&self, error: &AppError) -> Result<String> {
        Ok(error.format_for_console(true))
    }
}

/// One JSON object per line
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, destination: &str, result: &PingResult) -> Result<String> {
        let mut value = result.to_json();
        value["destination"] = serde_json::Value::from(destination);
        Ok(serde_json::to_string(&value)?)
    }

    fn format_pid(&self, destination: &str, pid: u32) -> Result<String> {
        Ok(serde_json::json!({ "destination": destination, "pid": pid }).to_string())
    }

    fn format_error(&self, error: &AppError) -> Result<String> {
        Ok(serde_json::json!({
            "category": error.category(),
            "message": error.to_string(),
        })
        .to_string())
    }
}

/// Pick a formatter for the requested mode
pub fn formatter_for(enable_color: bool, json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else if enable_color {
        Box::new(ColoredFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(received: u32, loss_pc: u32) -> PingResult {
        PingResult { transmitted: 4, received, errors: 0, loss_pc, time_ms: 3003 }
    }

    #[test]
    fn test_loss_levels() {
        assert_eq!(LossLevel::from_result(&result(4, 0)), LossLevel::None);
        assert_eq!(LossLevel::from_result(&result(2, 50)), LossLevel::Partial);
        assert_eq!(LossLevel::from_result(&result(0, 100)), LossLevel::Total);
        assert_eq!(
            LossLevel::from_result(&PingResult { errors: 1, ..result(4, 0) }),
            LossLevel::Partial
        );
    }

    #[test]
    fn test_plain_output() {
        let out = PlainFormatter.format_result("10.0.0.1", &result(4, 0)).unwrap();
        assert_eq!(out, "10.0.0.1: 4 packets transmitted, 4 received, 0% packet loss, time 3003ms");
        assert_eq!(
            PlainFormatter.format_pid("10.0.0.1", 12).unwrap(),
            "10.0.0.1: background ping pid 12"
        );
    }

    #[test]
    fn test_colored_output_contains_values() {
        let out = ColoredFormatter.format_result("10.0.0.1", &result(2, 50)).unwrap();
        for part in ["10.0.0.1", ": 2/4 received, ", "50% loss", ", 3003ms"] {
            assert!(out.contains(part), "{:?} missing from {:?}", part, out);
        }
    }

    #[test]
    fn test_json_output() {
        let out = JsonFormatter.format_result("::1", &result(4, 0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["destination"], "::1");
        assert_eq!(value["received"], 4);

        let err = JsonFormatter
            .format_error(&AppError::invalid_argument("destination must not be empty"))
            .unwrap();
        assert!(err.contains("\"category\":\"ARGUMENT\""));
    }

    #[test]
    fn test_formatter_selection() {
        let out = formatter_for(false, false).format_pid("10.0.0.1", 5).unwrap();
        assert_eq!(out, "10.0.0.1: background ping pid 5");
        let out = formatter_for(true, true).format_pid("10.0.0.1", 5).unwrap();
        assert!(out.starts_with('{'));
    }
}
