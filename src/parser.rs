//! Parsers for ping output
//!
//! Two shapes are recognised:
//! - the statistics summary a finished ping prints, e.g.
//!   `10 packets transmitted, 10 received, 0% packet loss, time 9000ms`,
//!   optionally carrying a `+N errors,` clause after the received count;
//! - the job-control line a shell prints when a command is backgrounded,
//!   e.g. `[1] 12345`.

use crate::error::{AppError, Result};
use crate::models::PingResult;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::str::FromStr;

pub const PING_RESULT_ERROR: &str = "could not parse ping result";
pub const PING_PID_ERROR: &str = "could not parse ping pid";

static STATISTICS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<transmitted>\d+) packets transmitted, (?P<received>\d+) received,(?: \+(?P<errors>\d+) errors,)? (?P<loss_pc>\d+)% packet loss, time (?P<time_ms>\d+)ms$",
    )
    .expect("statistics pattern is valid")
});

static JOB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\w*\] (?P<pid>\d+)").expect("job-control pattern is valid"));

/// Parse the statistics summary out of a full ping capture
///
/// Lines are scanned in order and the first matching line wins. A missing
/// errors clause yields `errors == 0`. A bare `\r`, vertical tab, form feed
/// and the Unicode line separators also end a line.
pub fn parse_ping_output(raw: &str) -> Result<PingResult> {
    let caps = split_lines(raw).find_map(|line| STATISTICS_RE.captures(line))
        .ok_or_else(|| AppError::parse(PING_RESULT_ERROR))?;

    Ok(PingResult {
        transmitted: group(&caps, "transmitted")?,
        received: group(&caps, "received")?,
        errors: match caps.name("errors") {
            Some(_) => group(&caps, "errors")?,
            None => 0,
        },
        loss_pc: group(&caps, "loss_pc")?,
        time_ms: group(&caps, "time_ms")?,
    })
}

/// Parse the process id from a backgrounded job's launch output
pub fn parse_background_pid(raw: &str) -> Result<u32> {
    let caps = JOB_RE
        .captures(raw)
        .ok_or_else(|| AppError::parse(PING_PID_ERROR))?;
    caps["pid"]
        .parse()
        .map_err(|_| AppError::parse(PING_PID_ERROR))
}

fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| {
        matches!(
            c,
            '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}

fn group<T: FromStr>(caps: &Captures<'_>, name: &str) -> Result<T> {
    caps.name(name)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| AppError::parse(PING_RESULT_ERROR))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PING_RAW: &str = "\
PING localhost (127.0.0.1) 56(84) bytes of data.
64 bytes from localhost (127.0.0.1): icmp_seq=1 ttl=64 time=0.069 ms
64 bytes from localhost (127.0.0.1): icmp_seq=2 ttl=64 time=0.066 ms
64 bytes from localhost (127.0.0.1): icmp_seq=3 ttl=64 time=0.067 ms
64 bytes from localhost (127.0.0.1): icmp_seq=4 ttl=64 time=0.063 ms
64 bytes from localhost (127.0.0.1): icmp_seq=5 ttl=64 time=0.064 ms
64 bytes from localhost (127.0.0.1): icmp_seq=6 ttl=64 time=0.065 ms
64 bytes from localhost (127.0.0.1): icmp_seq=7 ttl=64 time=0.064 ms
64 bytes from localhost (127.0.0.1): icmp_seq=8 ttl=64 time=0.064 ms
64 bytes from localhost (127.0.0.1): icmp_seq=9 ttl=64 time=0.061 ms
64 bytes from localhost (127.0.0.1): icmp_seq=10 ttl=64 time=0.064 ms

--- localhost ping statistics ---
10 packets transmitted, 10 received, 0% packet loss, time 9000ms
rtt min/avg/max/mdev = 0.061/0.064/0.069/0.009 ms
";

    #[test]
    fn test_parse_full_capture() {
        let result = parse_ping_output(PING_RAW).unwrap();
        assert_eq!(
            result,
            PingResult { transmitted: 10, received: 10, errors: 0, loss_pc: 0, time_ms: 9000 }
        );
    }

    #[test]
    fn test_parse_errors_clause() {
        let raw = "--- 10.0.0.9 ping statistics ---\n\
                   5 packets transmitted, 0 received, +5 errors, 100% packet loss, time 4005ms\n";
        let result = parse_ping_output(raw).unwrap();
        assert_eq!(result.transmitted, 5);
        assert_eq!(result.received, 0);
        assert_eq!(result.errors, 5);
        assert_eq!(result.loss_pc, 100);
        assert_eq!(result.time_ms, 4005);
    }

    #[test]
    fn test_first_matching_line_wins() {
        let raw = "1 packets transmitted, 1 received, 0% packet loss, time 0ms\n\
                   2 packets transmitted, 1 received, 50% packet loss, time 1001ms\n";
        assert_eq!(parse_ping_output(raw).unwrap().transmitted, 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "PING 10.0.0.1\r\n3 packets transmitted, 3 received, 0% packet loss, time 2002ms\r\n";
        assert_eq!(parse_ping_output(raw).unwrap().time_ms, 2002);
    }

    #[test]
    fn test_bare_carriage_return_separates_lines() {
        let raw = "64 bytes from 10.0.0.1: icmp_seq=1\r3 packets transmitted, 3 received, 0% packet loss, time 2002ms";
        assert_eq!(parse_ping_output(raw).unwrap().transmitted, 3);

        let raw = "PING 10.0.0.1\u{2028}2 packets transmitted, 2 received, 0% packet loss, time 1001ms\x0c";
        assert_eq!(parse_ping_output(raw).unwrap().time_ms, 1001);
    }

    #[test]
    fn test_unmatched_output_is_parse_error() {
        for raw in [
            "",
            "connect: Network is unreachable",
            // BSD-style summary has a different shape
            "3 packets transmitted, 3 packets received, 0.0% packet loss",
            // line must match from start to end
            "  3 packets transmitted, 3 received, 0% packet loss, time 2002ms",
        ] {
            let err = parse_ping_output(raw).unwrap_err();
            assert_eq!(err, AppError::parse(PING_RESULT_ERROR));
        }
    }

    #[test]
    fn test_overflowing_count_is_parse_error() {
        let raw = "99999999999 packets transmitted, 1 received, 0% packet loss, time 1ms";
        assert!(matches!(parse_ping_output(raw), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_parse_pid() {
        assert_eq!(parse_background_pid("[1] 12345").unwrap(), 12345);
        assert_eq!(parse_background_pid("[] 77\n").unwrap(), 77);
        assert_eq!(parse_background_pid("[job2] 4242 trailing").unwrap(), 4242);
    }

    #[test]
    fn test_parse_pid_failures() {
        for raw in ["", "12345", "[1]", "[1] abc", "bash: ping: command not found", "[1-2] 55"] {
            let err = parse_background_pid(raw).unwrap_err();
            assert_eq!(err, AppError::parse(PING_PID_ERROR), "input {:?}", raw);
        }
    }
}
