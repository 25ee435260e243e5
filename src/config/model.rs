// src/config/model.rs

use serde::Deserialize;

use crate::engine::OperationKind;
use crate::types::{LogLevel, WaitTime};

/// Configuration exactly as read from the TOML file.
///
/// ```toml
/// scdaemon = "/usr/lib/gnupg/scdaemon"
/// notify_command = "notify-send -t 0 'YubiKey' 'Touch for $description'"
/// cancel_command = "pkill -f 'Touch for'"
/// auth_wait_time = 1
/// sign_wait_time = 1.5
/// decrypt_wait_time = 1
/// log_level = "info"
/// ```
///
/// Every field except `log_level` is required. Use [`ConfigFile::try_from`]
/// to get a validated config.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Path to the wrapped smartcard daemon.
    pub scdaemon: String,

    /// Shell command run to show a notification. Supports `$description`
    /// and `$wait_time`.
    pub notify_command: String,

    /// Shell command run to withdraw the notification.
    pub cancel_command: String,

    /// Seconds of silence after the pin-cache marker before notifying, per
    /// operation. Integers and floats are both accepted.
    pub auth_wait_time: WaitTime,
    pub sign_wait_time: WaitTime,
    pub decrypt_wait_time: WaitTime,

    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    scdaemon: String,
    notify_command: String,
    cancel_command: String,
    auth_wait_time: WaitTime,
    sign_wait_time: WaitTime,
    decrypt_wait_time: WaitTime,
    log_level: LogLevel,
}

impl ConfigFile {
    /// Build from parts that have already been validated.
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            scdaemon: raw.scdaemon,
            notify_command: raw.notify_command,
            cancel_command: raw.cancel_command,
            auth_wait_time: raw.auth_wait_time,
            sign_wait_time: raw.sign_wait_time,
            decrypt_wait_time: raw.decrypt_wait_time,
            log_level: raw.log_level.unwrap_or_default(),
        }
    }

    pub fn scdaemon(&self) -> &str {
        &self.scdaemon
    }

    pub fn notify_command(&self) -> &str {
        &self.notify_command
    }

    pub fn cancel_command(&self) -> &str {
        &self.cancel_command
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Configured debounce wait for an operation.
    pub fn wait_time(&self, kind: OperationKind) -> WaitTime {
        match kind {
            OperationKind::Auth => self.auth_wait_time,
            OperationKind::Sign => self.sign_wait_time,
            OperationKind::Decrypt => self.decrypt_wait_time,
        }
    }
}
