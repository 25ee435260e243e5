use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Log verbosity accepted in the config file and the `SCD_NOTIFY_LOG`
/// environment variable.
///
/// Parsing is case-insensitive. `warning` is accepted as an alias for `warn`
/// and `critical` for `error`, so configs written for the older Python-style
/// level names keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" | "critical" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!(
                "invalid log_level: {other} (expected one of \"trace\", \"debug\", \"info\", \"warn\", \"error\")"
            )),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, String> {
        value.parse()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(s)
    }
}

/// A wait in seconds, remembering whether the config wrote it as an integer
/// (`1`) or a float (`1.0`) so `$wait_time` renders the way it was written.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WaitTime {
    Whole(i64),
    Fractional(f64),
}

impl WaitTime {
    pub fn as_secs_f64(self) -> f64 {
        match self {
            WaitTime::Whole(n) => n as f64,
            WaitTime::Fractional(x) => x,
        }
    }
}

impl From<i64> for WaitTime {
    fn from(n: i64) -> Self {
        WaitTime::Whole(n)
    }
}

impl From<f64> for WaitTime {
    fn from(x: f64) -> Self {
        WaitTime::Fractional(x)
    }
}

impl fmt::Display for WaitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitTime::Whole(n) => write!(f, "{n}"),
            // `{:?}` keeps the fractional part of whole floats: 1.0 → "1.0".
            WaitTime::Fractional(x) => write!(f, "{x:?}"),
        }
    }
}
