// src/cli.rs

//! Command-line handling.
//!
//! `scd-notify` stands in for the smartcard daemon, so it is invoked with the
//! daemon's own arguments (e.g. `--multi-server`). It defines no options of
//! its own; every argument is handed to the wrapped executable as-is, raw OS
//! strings included.

use std::ffi::OsString;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Arguments after the program name, in order.
    pub passthrough: Vec<OsString>,
}

/// Collect the process arguments.
pub fn parse() -> CliArgs {
    parse_from(std::env::args_os())
}

/// Like [`parse`], from an explicit argv (first item is the program name).
pub fn parse_from<I, T>(argv: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    CliArgs {
        passthrough: argv.into_iter().skip(1).map(Into::into).collect(),
    }
}
