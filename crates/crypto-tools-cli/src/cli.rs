use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crypto_tools_core::VERSION;

/// Generate a new RSA private key. Output the resulting key in PEM form to stdout.
#[derive(Parser, Debug)]
#[command(name = "generate-private-key")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct KeygenCli {
    /// The length of the private key, in bits [default: 2048]
    #[arg(long, value_name = "BITS", allow_negative_numbers = true)]
    pub key_length: Option<i64>,

    /// Don't encrypt the resulting *PRIVATE* key material. The result is
    /// sensitive: if you leak the private key, it's all over.
    #[arg(long)]
    pub do_not_encrypt: bool,
}

impl KeygenCli {
    pub fn encrypt(&self) -> bool {
        !self.do_not_encrypt
    }
}

/// Pretty-print a PEM certificate or private key read from stdin (via openssl).
#[derive(Parser, Debug)]
#[command(name = "show-file")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct ShowCli {
    #[command(subcommand)]
    pub command: Option<ShowCommands>,
}

#[derive(Subcommand, Debug)]
pub enum ShowCommands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
