// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod notify;
pub mod types;

use std::ffi::OsString;

use tokio::sync::mpsc;
use tracing::info;

use crate::config::ConfigFile;
use crate::engine::{EventProcessor, NotifierCore, OperationTable, ProxyEvent, Source};
use crate::errors::Result;
use crate::exec::{spawn_forwarder, spawn_wrapped, WrappedProcess};
use crate::notify::ShellActuator;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the wrapped daemon (stdin/stdout piped)
/// - two line forwarders: our stdin → daemon, daemon → our stdout
/// - the event processor and its shell-command actuator
///
/// Returns once either direction reaches end-of-stream.
pub async fn run(cfg: ConfigFile, args: Vec<OsString>) -> Result<()> {
    let WrappedProcess {
        child,
        stdin: child_stdin,
        stdout: child_stdout,
    } = spawn_wrapped(cfg.scdaemon(), &args)?;

    let (tx, rx) = mpsc::unbounded_channel::<ProxyEvent>();

    spawn_forwarder(tokio::io::stdin(), child_stdin, Source::Inbound, tx.clone());
    spawn_forwarder(child_stdout, tokio::io::stdout(), Source::Outbound, tx);

    let core = NotifierCore::new(OperationTable::from_config(&cfg));
    let actuator = ShellActuator::from_config(&cfg);

    EventProcessor::new(core, rx, actuator).run().await;

    info!(pid = ?child.id(), "session finished");
    Ok(())
}
