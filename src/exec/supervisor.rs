// src/exec/supervisor.rs

//! Launching the wrapped daemon.

use std::ffi::OsString;
use std::process::Stdio;

use anyhow::anyhow;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::{debug, info};

use crate::errors::{Result, ScdNotifyError};

/// A running wrapped daemon with its protocol pipes taken out.
#[derive(Debug)]
pub struct WrappedProcess {
    pub child: Child,
    pub stdin: ChildStdin,
    pub stdout: ChildStdout,
}

/// Start `program` with `args` passed through untouched.
///
/// stdin and stdout are piped and returned for the forwarders. stderr is also
/// piped but only drained in the background (logged at debug) so the daemon
/// never blocks on a full pipe.
pub fn spawn_wrapped(program: &str, args: &[OsString]) -> Result<WrappedProcess> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|source| ScdNotifyError::Spawn {
        program: program.to_string(),
        source,
    })?;

    info!(program, ?args, pid = ?child.id(), "wrapped executable started");

    let stdin = child
        .stdin
        .take()
        .ok_or_else(|| anyhow!("stdin of '{program}' was not captured"))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout of '{program}' was not captured"))?;

    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(async move {
            let mut reader = BufReader::new(stderr);
            let mut buf = Vec::new();
            while let Ok(n) = reader.read_until(b'\n', &mut buf).await {
                if n == 0 {
                    break;
                }
                debug!("wrapped stderr: {}", String::from_utf8_lossy(&buf).trim_end());
                buf.clear();
            }
        });
    }

    Ok(WrappedProcess {
        child,
        stdin,
        stdout,
    })
}
