//! Shared plumbing for the `generate-private-key` and `show-file` binaries.
//!
//! Each binary parses its own arguments, initializes logging, and hands off to
//! a function in [`commands`]. Failures come back as `anyhow::Error` and are
//! turned into an exit status by [`errors::exit_with_error`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod prompt;
