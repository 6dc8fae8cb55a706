//! Passphrase acquisition from the controlling terminal.

use std::io::IsTerminal;

use dialoguer::Password;
use secrecy::SecretString;

use crypto_tools_core::{CryptoToolsError, PassphraseSource};

use crate::config::non_empty_env;
use crate::constants::env_vars;

/// Reads the passphrase without echo, or from `CRYPTO_TOOLS_PASSPHRASE`.
///
/// The entry is used as typed: no confirmation, no strength check.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPassphrase {
    interactive: bool,
}

impl TerminalPassphrase {
    /// The prompt is drawn on stderr, so that is the stream that must be a TTY.
    pub fn new() -> Self {
        Self {
            interactive: std::io::stderr().is_terminal(),
        }
    }
}

impl Default for TerminalPassphrase {
    fn default() -> Self {
        Self::new()
    }
}

impl PassphraseSource for TerminalPassphrase {
    fn read_passphrase(&self) -> crypto_tools_core::Result<SecretString> {
        if let Some(value) = non_empty_env(env_vars::PASSPHRASE) {
            return Ok(SecretString::from(value));
        }
        if !self.interactive {
            return Err(CryptoToolsError::Passphrase(format!(
                "No passphrase provided and no TTY available. Set {} or pass --do-not-encrypt.",
                env_vars::PASSPHRASE
            )));
        }
        Password::new()
            .with_prompt("Password")
            .interact()
            .map(SecretString::from)
            .map_err(|e| CryptoToolsError::Passphrase(e.to_string()))
    }
}
