// src/exec/forwarder.rs

//! Line forwarder.
//!
//! Each instance copies one stream to another a line at a time and publishes
//! what it copied. Lines are raw bytes: nothing is decoded, trimmed, or
//! re-terminated, so the wrapped protocol sees exactly what the caller sent.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::engine::{ProxyEvent, Source};

/// Copy `reader` to `writer` line by line, publishing each line on `tx`.
///
/// - Every line is written and flushed before it is published.
/// - A final fragment without a trailing newline is still forwarded.
/// - On end-of-stream, a read error, or a write error, exactly one
///   `ProxyEvent::Closed` is published and the function returns. A line whose
///   write failed is not published.
/// - A closed channel is ignored; forwarding carries on regardless.
pub async fn forward_lines<R, W>(
    reader: R,
    mut writer: W,
    source: Source,
    tx: mpsc::UnboundedSender<ProxyEvent>,
) where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => {
                debug!(%source, "source reached end of stream");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(%source, error = %e, "read failed; treating as end of stream");
                break;
            }
        }

        if let Err(e) = write_line(&mut writer, &buf).await {
            error!(%source, error = %e, "write failed; stopping forwarder");
            break;
        }

        let line = std::mem::take(&mut buf);
        let _ = tx.send(ProxyEvent::Line { source, line });
    }

    let _ = tx.send(ProxyEvent::Closed { source });
}

/// Run [`forward_lines`] as its own Tokio task.
pub fn spawn_forwarder<R, W>(
    reader: R,
    writer: W,
    source: Source,
    tx: mpsc::UnboundedSender<ProxyEvent>,
) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(forward_lines(reader, writer, source, tx))
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &[u8]) -> std::io::Result<()> {
    writer.write_all(line).await?;
    writer.flush().await
}
