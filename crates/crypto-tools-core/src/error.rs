//! Error types for crypto-tools core operations.
//!
//! Messages are written for the operator: the CLI layer prints them as-is
//! and maps every variant to a non-zero exit status.

use thiserror::Error;

/// Result type alias for crypto-tools operations.
pub type Result<T> = std::result::Result<T, CryptoToolsError>;

/// Core error type for crypto-tools operations.
#[derive(Debug, Error)]
pub enum CryptoToolsError {
    /// Requested RSA modulus is below the policy floor
    #[error(
        "The specified key length {requested} is too small, and considered insecure by this tool. \
         Specify a key length of at least {minimum} bits."
    )]
    KeyTooShort { requested: i64, minimum: usize },

    /// Input filled the whole read buffer
    #[error("Input is uncomfortably large; aborting.")]
    InputTooLarge { limit: usize },

    /// First line matched none of the known PEM headers
    #[error(
        "Not sure what kind of input that is.\n\
         Note that I've not been trained to recognize CSRs yet, though.\n\
         Also note that I only recognize PEM (~base64) encoded things. \
         I cannot recognize the DER (binary) variants yet."
    )]
    Unrecognized,

    /// Passphrase could not be acquired
    #[error("Failed to read passphrase: {0}")]
    Passphrase(String),

    /// RSA key generation failed
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    /// PKCS8 or PEM encoding failed
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// External display program could not be run
    #[error("Command error: {0}")]
    Command(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rsa::Error> for CryptoToolsError {
    fn from(err: rsa::Error) -> Self {
        CryptoToolsError::KeyGeneration(err.to_string())
    }
}

impl From<pkcs8::Error> for CryptoToolsError {
    fn from(err: pkcs8::Error) -> Self {
        CryptoToolsError::Encoding(err.to_string())
    }
}

impl From<pkcs8::der::Error> for CryptoToolsError {
    fn from(err: pkcs8::der::Error) -> Self {
        CryptoToolsError::Encoding(err.to_string())
    }
}
