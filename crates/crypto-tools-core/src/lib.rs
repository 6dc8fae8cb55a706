//! # Crypto Tools Core
//!
//! Core library behind the `generate-private-key` and `show-file` tools.
//!
//! ## Architecture
//!
//! - **keygen**: key-size policy, RSA generation, PKCS8 PEM encoding
//! - **sniff**: bounded input read and PEM header classification
//! - **display**: dispatch of classified input to an external `openssl`
//!
//! Cryptographic work is delegated to the `rsa` and `pkcs8` crates; display
//! is delegated to an external program. Terminal interaction lives in the CLI
//! crate, behind [`keygen::PassphraseSource`].

pub mod display;
pub mod error;
pub mod keygen;
pub mod sniff;

pub use display::{show_crypto_file, CommandRunner, OpensslCommand};
pub use error::{CryptoToolsError, Result};
pub use keygen::{generate_private_key, KeyRequest, PassphraseSource};
pub use sniff::PemKind;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
