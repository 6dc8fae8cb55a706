//! Hand PEM input to an external program for display.

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::process::{Command, Stdio};

use crate::error::{CryptoToolsError, Result};
use crate::sniff::{classify, read_bounded, PemKind};

/// Program used when nothing else is configured.
pub const DEFAULT_OPENSSL: &str = "openssl";

/// Runs an external command with `stdin` piped in and its output inherited.
pub trait CommandRunner {
    fn run(&self, args: &[&str], stdin: &[u8]) -> Result<()>;
}

/// Runs a real `openssl`-compatible executable.
#[derive(Debug, Clone)]
pub struct OpensslCommand {
    program: OsString,
}

impl OpensslCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for OpensslCommand {
    fn default() -> Self {
        Self::new(DEFAULT_OPENSSL)
    }
}

impl CommandRunner for OpensslCommand {
    fn run(&self, args: &[&str], stdin: &[u8]) -> Result<()> {
        tracing::debug!(
            program = ?self.program,
            ?args,
            bytes = stdin.len(),
            "spawning display command"
        );

        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                CryptoToolsError::Command(format!(
                    "Failed to launch {}: {}",
                    self.program.to_string_lossy(),
                    e
                ))
            })?;

        if let Some(mut pipe) = child.stdin.take() {
            match pipe.write_all(stdin) {
                Ok(()) => {}
                // Child quit before reading everything; its own output says why.
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
                Err(err) => return Err(err.into()),
            }
        }

        // Exit status is not surfaced.
        let status = child.wait()?;
        tracing::debug!(%status, "display command finished");
        Ok(())
    }
}

/// Read bounded input, classify it, and hand the whole buffer to `runner`.
pub fn show_crypto_file<R: Read>(reader: R, runner: &dyn CommandRunner) -> Result<PemKind> {
    let data = read_bounded(reader)?;
    let kind = classify(&data)?;
    tracing::debug!(%kind, bytes = data.len(), "classified input");
    runner.run(kind.openssl_args(), &data)?;
    Ok(kind)
}
