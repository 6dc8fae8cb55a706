//! Generate a new RSA private key and print it as PKCS8 PEM on stdout.

use clap::Parser;

use crypto_tools_cli::cli::KeygenCli;
use crypto_tools_cli::commands::generate;
use crypto_tools_cli::errors::exit_with_error;
use crypto_tools_cli::logging;

fn main() {
    let cli = KeygenCli::parse();
    logging::init();

    if let Err(err) = generate::run(&cli) {
        exit_with_error(err)
    }
}
