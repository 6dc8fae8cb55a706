//! CLI error types for structured error handling.
//!
//! Core errors are mapped onto a small set of categories, each with an exit
//! code. Every category currently exits with status 1.

use std::fmt;

use crypto_tools_core::CryptoToolsError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Request violates the tool's policy (key too short)
    InvalidInput(String),

    /// Input the tool refuses to handle (too large, unrecognized)
    UnsupportedInput(String),

    /// Everything else: I/O, passphrase, library or process failures
    Failed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput(message)
            | CliError::UnsupportedInput(message)
            | CliError::Failed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<&CryptoToolsError> for CliError {
    fn from(err: &CryptoToolsError) -> Self {
        let message = err.to_string();
        match err {
            CryptoToolsError::KeyTooShort { .. } => CliError::InvalidInput(message),
            CryptoToolsError::InputTooLarge { .. } | CryptoToolsError::Unrecognized => {
                CliError::UnsupportedInput(message)
            }
            _ => CliError::Failed(message),
        }
    }
}

impl From<&anyhow::Error> for CliError {
    fn from(err: &anyhow::Error) -> Self {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            return cli_err.clone();
        }
        match err.downcast_ref::<CryptoToolsError>().map(CliError::from) {
            Some(CliError::Failed(_)) | None => CliError::Failed(format!("{:#}", err)),
            Some(mapped) => mapped,
        }
    }
}

impl CliError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput(_) | CliError::UnsupportedInput(_) | CliError::Failed(_) => {
                exit_codes::FAILURE
            }
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

/// Report a failed command and terminate the process.
pub fn exit_with_error(err: anyhow::Error) -> ! {
    tracing::debug!(error = ?err, "command failed");
    CliError::from(&err).exit()
}
