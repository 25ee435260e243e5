// src/engine/processor.rs

use std::fmt;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::notify::NotificationBackend;

use super::core::{NotifierCore, Step};
use super::operations::OperationSpec;
use super::ProxyEvent;

/// Async shell around [`NotifierCore`].
///
/// Sole consumer of the merge channel. It owns the debounce timer and the
/// notification backend; every decision is delegated to the core.
pub struct EventProcessor<A: NotificationBackend> {
    core: NotifierCore,
    event_rx: mpsc::UnboundedReceiver<ProxyEvent>,
    actuator: A,
}

impl<A: NotificationBackend> fmt::Debug for EventProcessor<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventProcessor")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<A: NotificationBackend> EventProcessor<A> {
    pub fn new(
        core: NotifierCore,
        event_rx: mpsc::UnboundedReceiver<ProxyEvent>,
        actuator: A,
    ) -> Self {
        Self {
            core,
            event_rx,
            actuator,
        }
    }

    /// Main event loop.
    ///
    /// Returns when either source reports end-of-stream, or when every sender
    /// is gone. A notification that is still showing at that point is left
    /// alone.
    pub async fn run(mut self) {
        info!("event processor started");

        while let Some(event) = self.event_rx.recv().await {
            log_event(&event);

            let queue_empty = self.event_rx.is_empty();
            match self.core.observe(&event, queue_empty) {
                Step::Exit(source) => {
                    info!(%source, "stream closed; ending session");
                    return;
                }
                Step::Debounce(spec) => self.debounce(spec).await,
                Step::Continue => {}
            }

            if self.core.settle() {
                if let Err(e) = self.actuator.cancel().await {
                    warn!(error = %e, "failed to launch cancel command");
                }
            }
        }

        info!("event channel closed; exiting");
    }

    async fn debounce(&mut self, spec: OperationSpec) {
        debug!(
            operation = spec.description(),
            wait_secs = spec.wait_time.as_secs_f64(),
            "pin cached; waiting for silence"
        );

        sleep(spec.wait()).await;

        let quiet = self.event_rx.is_empty();
        let Some(ctx) = self.core.debounce_elapsed(&spec, quiet) else {
            debug!(
                operation = spec.description(),
                "traffic arrived during debounce; not notifying"
            );
            return;
        };

        info!(operation = %ctx.description, "touch appears to be pending; notifying");
        match self.actuator.show(&ctx).await {
            Ok(()) => self.core.mark_notified(),
            Err(e) => warn!(error = %e, "failed to launch notify command"),
        }
    }
}

fn log_event(event: &ProxyEvent) {
    match event {
        ProxyEvent::Line { source, line } => {
            let text = String::from_utf8_lossy(line);
            debug!(%source, line = %text.trim_end(), "line");
        }
        ProxyEvent::Closed { source } => {
            debug!(%source, "end of stream");
        }
    }
}
