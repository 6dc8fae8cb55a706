//! Recognize a PEM certificate or private key on stdin and display it via openssl.

use clap::Parser;

use crypto_tools_cli::cli::ShowCli;
use crypto_tools_cli::commands::show;
use crypto_tools_cli::errors::exit_with_error;
use crypto_tools_cli::logging;

fn main() {
    let cli = ShowCli::parse();
    logging::init();

    if let Err(err) = show::run(&cli) {
        exit_with_error(err)
    }
}
