//! Library side of the `cine` command-line tool.
//!
//! The binary parses arguments and prints tables; the work it dispatches to
//! lives here so it can be tested without a terminal.

pub mod commands;
pub mod logging;
pub mod types;
