// src/exec/mod.rs

//! Process and stream plumbing.
//!
//! - [`supervisor`] launches the wrapped daemon with piped stdio.
//! - [`forwarder`] tees one direction of traffic line by line and publishes
//!   every line to the engine's merge channel.

pub mod forwarder;
pub mod supervisor;

pub use forwarder::{forward_lines, spawn_forwarder};
pub use supervisor::{spawn_wrapped, WrappedProcess};
