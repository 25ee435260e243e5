// src/engine/operations.rs

//! Protocol prefixes and the per-operation settings derived from config.

use std::time::Duration;

use crate::config::ConfigFile;
use crate::types::WaitTime;

/// Inbound command that starts an authentication.
pub const PKAUTH: &[u8] = b"PKAUTH";
/// Inbound command that starts a signature.
pub const PKSIGN: &[u8] = b"PKSIGN";
/// Inbound command that starts a decryption.
pub const PKDECRYPT: &[u8] = b"PKDECRYPT";
/// Inbound command that resets the daemon (and our idea of the operation).
pub const RESTART: &[u8] = b"RESTART";
/// Outbound status line emitted when the daemon caches the PIN, right before
/// it blocks waiting on the card.
pub const PIN_CACHE_PUT: &[u8] = b"S PINCACHE_PUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Auth,
    Sign,
    Decrypt,
}

impl OperationKind {
    /// Command prefix that starts this operation.
    pub fn prefix(self) -> &'static [u8] {
        match self {
            OperationKind::Auth => PKAUTH,
            OperationKind::Sign => PKSIGN,
            OperationKind::Decrypt => PKDECRYPT,
        }
    }

    /// Human-readable text handed to the notify template as `$description`.
    pub fn description(self) -> &'static str {
        match self {
            OperationKind::Auth => "authentication",
            OperationKind::Sign => "signing",
            OperationKind::Decrypt => "encryption",
        }
    }
}

/// A pending operation together with its debounce wait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationSpec {
    pub kind: OperationKind,
    /// Wait as configured (rendered into `$wait_time`).
    pub wait_time: WaitTime,
}

impl OperationSpec {
    pub fn new(kind: OperationKind, wait_time: impl Into<WaitTime>) -> Self {
        Self {
            kind,
            wait_time: wait_time.into(),
        }
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    pub fn wait(&self) -> Duration {
        Duration::from_secs_f64(self.wait_time.as_secs_f64())
    }
}

/// Prefix matcher for the three operations plus the reset and marker lines.
#[derive(Debug, Clone)]
pub struct OperationTable {
    specs: [OperationSpec; 3],
}

impl OperationTable {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self::with_wait_times(
            cfg.wait_time(OperationKind::Auth),
            cfg.wait_time(OperationKind::Sign),
            cfg.wait_time(OperationKind::Decrypt),
        )
    }

    pub fn with_wait_times(
        auth: impl Into<WaitTime>,
        sign: impl Into<WaitTime>,
        decrypt: impl Into<WaitTime>,
    ) -> Self {
        Self {
            specs: [
                OperationSpec::new(OperationKind::Auth, auth),
                OperationSpec::new(OperationKind::Sign, sign),
                OperationSpec::new(OperationKind::Decrypt, decrypt),
            ],
        }
    }

    /// The operation whose start command `line` begins with, if any.
    pub fn match_start(&self, line: &[u8]) -> Option<OperationSpec> {
        self.specs
            .iter()
            .find(|spec| line.starts_with(spec.kind.prefix()))
            .copied()
    }

    pub fn is_reset(line: &[u8]) -> bool {
        line.starts_with(RESTART)
    }

    pub fn is_pin_cache_marker(line: &[u8]) -> bool {
        line.starts_with(PIN_CACHE_PUT)
    }
}
