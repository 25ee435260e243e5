// src/notify/backend.rs

//! Pluggable notification backend.
//!
//! The event processor talks to a `NotificationBackend` rather than spawning
//! commands itself, so tests can swap in a backend that only records what it
//! was asked to do.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::config::ConfigFile;
use crate::errors::{Result, ScdNotifyError};
use crate::notify::template::render;
use crate::notify::NotifyContext;

/// Shows and withdraws the "touch your key" notification.
///
/// Implementations must not block on the notification itself; an `Err` only
/// means the action could not be started.
pub trait NotificationBackend: Send {
    fn show<'a>(
        &'a mut self,
        ctx: &'a NotifyContext,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    fn cancel(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Backend used in production: renders the configured templates and runs
/// them via `sh -c`, detached from our stdio.
#[derive(Debug, Clone)]
pub struct ShellActuator {
    notify_template: String,
    cancel_template: String,
}

impl ShellActuator {
    pub fn new(notify_template: impl Into<String>, cancel_template: impl Into<String>) -> Self {
        Self {
            notify_template: notify_template.into(),
            cancel_template: cancel_template.into(),
        }
    }

    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self::new(cfg.notify_command(), cfg.cancel_command())
    }

    /// The command line `show` would run for `ctx`.
    pub fn render_show(&self, ctx: &NotifyContext) -> String {
        render(&self.notify_template, &ctx.placeholders())
    }

    /// The command line `cancel` would run.
    pub fn render_cancel(&self) -> String {
        let none: [(&str, &str); 0] = [];
        render(&self.cancel_template, &none)
    }
}

impl NotificationBackend for ShellActuator {
    fn show<'a>(
        &'a mut self,
        ctx: &'a NotifyContext,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let command = self.render_show(ctx);
        Box::pin(async move {
            debug!(%command, "sending notification");
            launch_detached(&command)
        })
    }

    fn cancel(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let command = self.render_cancel();
        Box::pin(async move {
            debug!(%command, "cancelling notification");
            launch_detached(&command)
        })
    }
}

/// Start `command` under the shell with all stdio on the null device and
/// return without waiting. Tokio reaps the child in the background.
fn launch_detached(command: &str) -> Result<()> {
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let child = cmd.spawn().map_err(|source| ScdNotifyError::Spawn {
        program: command.to_string(),
        source,
    })?;

    debug!(pid = ?child.id(), "notification command launched");
    Ok(())
}
