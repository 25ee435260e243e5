// src/engine/core.rs

//! Pure notifier state machine.
//!
//! The core decides what should happen for each [`ProxyEvent`] but performs no
//! IO: it never sleeps, reads channels, or launches commands. The async shell
//! ([`EventProcessor`](super::EventProcessor)) feeds it events together with
//! the one piece of outside knowledge it needs (whether more events are
//! already queued) and carries out the resulting [`Step`].
//!
//! Sequence per event:
//! 1. [`NotifierCore::observe`]
//! 2. on [`Step::Debounce`], wait, then [`NotifierCore::debounce_elapsed`]
//!    and, if the show command launched, [`NotifierCore::mark_notified`]
//! 3. [`NotifierCore::settle`], issuing a cancel when it returns `true`

use crate::engine::operations::{OperationKind, OperationSpec, OperationTable};
use crate::engine::{ProxyEvent, Source};
use crate::notify::NotifyContext;

/// What the shell should do after the core has observed an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing beyond settling.
    Continue,
    /// The pin-cache marker arrived during an operation with nothing queued
    /// behind it: wait for the spec's duration and report back.
    Debounce(OperationSpec),
    /// A source closed; the session is over.
    Exit(Source),
}

#[derive(Debug, Clone)]
pub struct NotifierCore {
    table: OperationTable,
    current: Option<OperationSpec>,
    waiting: bool,
    notified: bool,
}

impl NotifierCore {
    pub fn new(table: OperationTable) -> Self {
        Self {
            table,
            current: None,
            waiting: false,
            notified: false,
        }
    }

    pub fn current_operation(&self) -> Option<OperationKind> {
        self.current.map(|spec| spec.kind)
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    pub fn is_notified(&self) -> bool {
        self.notified
    }

    /// Update state for one event.
    ///
    /// `queue_empty` must say whether the channel held no further events at
    /// the moment this one was taken off it.
    pub fn observe(&mut self, event: &ProxyEvent, queue_empty: bool) -> Step {
        match event {
            ProxyEvent::Closed { source } => Step::Exit(*source),
            ProxyEvent::Line {
                source: Source::Inbound,
                line,
            } => {
                self.on_inbound(line);
                Step::Continue
            }
            ProxyEvent::Line {
                source: Source::Outbound,
                line,
            } => self.on_outbound(line, queue_empty),
        }
    }

    fn on_inbound(&mut self, line: &[u8]) {
        self.waiting = false;

        if let Some(spec) = self.table.match_start(line) {
            self.current = Some(spec);
        }

        if OperationTable::is_reset(line) {
            self.current = None;
        }
    }

    fn on_outbound(&mut self, line: &[u8], queue_empty: bool) -> Step {
        if let Some(spec) = self.current {
            if queue_empty && OperationTable::is_pin_cache_marker(line) {
                return Step::Debounce(spec);
            }
        }

        self.waiting = false;
        Step::Continue
    }

    /// Called once the debounce wait for `spec` is over.
    ///
    /// `quiet` is whether the channel is still empty. Returns the context to
    /// show, or `None` when traffic arrived in the meantime (in which case
    /// `waiting` is left as it was).
    pub fn debounce_elapsed(&mut self, spec: &OperationSpec, quiet: bool) -> Option<NotifyContext> {
        if !quiet {
            return None;
        }

        self.waiting = true;
        Some(NotifyContext::from(spec))
    }

    /// Record that the show command was launched.
    pub fn mark_notified(&mut self) {
        self.notified = true;
    }

    /// End-of-event bookkeeping. Returns `true` exactly when a visible
    /// notification must be withdrawn now.
    pub fn settle(&mut self) -> bool {
        if self.notified && !self.waiting {
            self.notified = false;
            return true;
        }
        false
    }
}
