//! `generate-private-key`: validate, prompt, generate, print.

use std::io;

use anyhow::Context;
use crypto_tools_core::keygen::{generate_private_key, KeyRequest, DEFAULT_KEY_BITS};

use crate::cli::KeygenCli;
use crate::config::{load_config, ToolsConfig};
use crate::prompt::TerminalPassphrase;

pub fn run(cli: &KeygenCli) -> anyhow::Result<()> {
    let config = load_config()?;
    let request = KeyRequest {
        key_length: resolve_key_length(cli.key_length, &config),
        encrypt: cli.encrypt(),
    };
    tracing::debug!(
        key_length = request.key_length,
        encrypt = request.encrypt,
        "resolved key request"
    );

    let passphrases = TerminalPassphrase::new();
    let mut stdout = io::stdout().lock();
    generate_private_key(&request, &passphrases, &mut stdout)
        .context("Failed to generate private key")?;
    Ok(())
}

/// `--key-length`, else the config file, else 2048.
pub fn resolve_key_length(flag: Option<i64>, config: &ToolsConfig) -> i64 {
    flag.or(config.keygen.key_length).unwrap_or(DEFAULT_KEY_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeygenSection;

    fn config_with(key_length: Option<i64>) -> ToolsConfig {
        ToolsConfig {
            keygen: KeygenSection { key_length },
            ..Default::default()
        }
    }

    #[test]
    fn test_flag_wins_over_config() {
        assert_eq!(resolve_key_length(Some(3072), &config_with(Some(4096))), 3072);
    }

    #[test]
    fn test_config_used_without_flag() {
        assert_eq!(resolve_key_length(None, &config_with(Some(4096))), 4096);
    }

    #[test]
    fn test_negative_flag_is_passed_through() {
        assert_eq!(resolve_key_length(Some(-1), &config_with(Some(4096))), -1);
    }

    #[test]
    fn test_default_length() {
        assert_eq!(resolve_key_length(None, &config_with(None)), 2048);
    }
}
