//! `show-file`: sniff stdin and hand it to openssl for display.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use crypto_tools_core::display::DEFAULT_OPENSSL;
use crypto_tools_core::{show_crypto_file, OpensslCommand};

use crate::cli::{ShowCli, ShowCommands};
use crate::config::{load_config, non_empty_env, ToolsConfig};
use crate::constants::env_vars;

pub fn run(cli: &ShowCli) -> anyhow::Result<()> {
    match &cli.command {
        Some(ShowCommands::Completions { shell }) => {
            let mut cmd = ShowCli::command();
            generate(*shell, &mut cmd, "show-file", &mut io::stdout());
            Ok(())
        }
        None => show_stdin(),
    }
}

fn show_stdin() -> anyhow::Result<()> {
    let config = load_config()?;
    let program = resolve_openssl(non_empty_env(env_vars::OPENSSL), &config);
    let runner = OpensslCommand::new(program);
    show_crypto_file(io::stdin().lock(), &runner)?;
    Ok(())
}

/// `CRYPTO_TOOLS_OPENSSL`, else the config file, else `openssl` on PATH.
pub fn resolve_openssl(env_value: Option<String>, config: &ToolsConfig) -> String {
    env_value
        .or_else(|| config.show.openssl.clone())
        .unwrap_or_else(|| DEFAULT_OPENSSL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShowSection;

    fn config_with(openssl: Option<&str>) -> ToolsConfig {
        ToolsConfig {
            show: ShowSection {
                openssl: openssl.map(str::to_string),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_env_wins_over_config() {
        let program = resolve_openssl(
            Some("/env/openssl".to_string()),
            &config_with(Some("/cfg/openssl")),
        );
        assert_eq!(program, "/env/openssl");
    }

    #[test]
    fn test_config_then_default() {
        assert_eq!(
            resolve_openssl(None, &config_with(Some("/cfg/openssl"))),
            "/cfg/openssl"
        );
        assert_eq!(resolve_openssl(None, &config_with(None)), "openssl");
    }
}
