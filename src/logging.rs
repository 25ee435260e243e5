// src/logging.rs

//! Logging setup for `scd-notify` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `SCD_NOTIFY_LOG` environment variable (e.g. "info", "debug")
//! 2. `log_level` from the config file (if it loaded)
//! 3. default to `info`
//!
//! Stdout carries protocol traffic and stderr belongs to whoever launched us,
//! so logs are appended to a file (`SCD_NOTIFY_LOG_FILE`, or
//! `scd-notify.log` in the temp dir). If that file can't be opened we fall
//! back to stderr.

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::types::LogLevel;

pub const LOG_LEVEL_ENV: &str = "SCD_NOTIFY_LOG";
pub const LOG_FILE_ENV: &str = "SCD_NOTIFY_LOG_FILE";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(config_level: Option<LogLevel>) -> Result<()> {
    let level = resolve_level(
        std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
        config_level,
    );

    let writer = match open_log_file(&log_file_path()) {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    fmt()
        .with_max_level(level_from_log_level(level))
        .with_target(true)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(writer)
        .init();

    Ok(())
}

/// Path of the log file: `SCD_NOTIFY_LOG_FILE` or `<temp>/scd-notify.log`.
pub fn log_file_path() -> PathBuf {
    log_file_path_from(std::env::var_os(LOG_FILE_ENV))
}

/// Same as [`log_file_path`], with the env value passed in.
pub fn log_file_path_from(env_value: Option<OsString>) -> PathBuf {
    env_value
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("scd-notify.log"))
}

/// Pick the effective level. An unparsable env value is ignored.
pub fn resolve_level(env_value: Option<&str>, config_level: Option<LogLevel>) -> LogLevel {
    env_value
        .and_then(|s| s.parse::<LogLevel>().ok())
        .or(config_level)
        .unwrap_or_default()
}

fn open_log_file(path: &Path) -> Option<File> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("scd-notify: cannot open log file {}: {e}", path.display());
            None
        }
    }
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}
