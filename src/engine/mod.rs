// src/engine/mod.rs

//! Touch-detection engine.
//!
//! Both line forwarders publish [`ProxyEvent`]s into one unbounded channel and
//! the engine is its only consumer. The pure state machine lives in
//! [`core`]; the async shell that owns the channel, the debounce timer and the
//! notification backend is in [`processor`].

use std::fmt;

/// Which direction a line travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Caller → wrapped daemon (our stdin).
    Inbound,
    /// Wrapped daemon → caller (our stdout).
    Outbound,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Inbound => f.write_str("inbound"),
            Source::Outbound => f.write_str("outbound"),
        }
    }
}

/// Events flowing from the forwarders into the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyEvent {
    /// One line, exactly as read (including its trailing newline, if any).
    Line { source: Source, line: Vec<u8> },
    /// The source reached end-of-stream (or failed). Sent once per source.
    Closed { source: Source },
}

impl ProxyEvent {
    pub fn line(source: Source, line: impl Into<Vec<u8>>) -> Self {
        ProxyEvent::Line {
            source,
            line: line.into(),
        }
    }

    pub fn closed(source: Source) -> Self {
        ProxyEvent::Closed { source }
    }
}

pub mod core;
pub mod operations;
pub mod processor;

pub use self::core::{NotifierCore, Step};
pub use operations::{OperationKind, OperationSpec, OperationTable};
pub use processor::EventProcessor;
