// src/notify/mod.rs

//! Notification actuator.
//!
//! - [`template`] renders `$name` / `${name}` placeholders permissively.
//! - [`backend`] defines the `NotificationBackend` trait the processor talks
//!   to, and `ShellActuator`, which runs the configured commands through
//!   `sh -c` without waiting for them.

pub mod backend;
pub mod template;

pub use backend::{NotificationBackend, ShellActuator};

use crate::engine::OperationSpec;
use crate::types::WaitTime;

/// Values available to the show command template.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyContext {
    /// `$description`, e.g. "signing".
    pub description: String,
    /// `$wait_time`, the debounce wait in seconds, as written in the config.
    pub wait_time: WaitTime,
}

impl NotifyContext {
    /// Placeholder name/value pairs for [`template::render`].
    pub fn placeholders(&self) -> [(&'static str, String); 2] {
        [
            ("description", self.description.clone()),
            ("wait_time", self.wait_time.to_string()),
        ]
    }
}

impl From<&OperationSpec> for NotifyContext {
    fn from(spec: &OperationSpec) -> Self {
        Self {
            description: spec.description().to_string(),
            wait_time: spec.wait_time,
        }
    }
}
