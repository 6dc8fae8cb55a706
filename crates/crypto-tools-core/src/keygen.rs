//! RSA private key generation with a minimum-size policy.
//!
//! Keys are always emitted as PKCS8 PEM. With a passphrase the key is wrapped
//! in PBES2 (PBKDF2-HMAC-SHA256 + AES-256-CBC), the same envelope OpenSSL
//! writes for `openssl pkcs8 -topk8 -v2 aes-256-cbc`, so the result can be
//! read back by stock tooling.

use std::io::Write;

use pkcs8::der::pem::PemLabel;
use pkcs8::pkcs5::pbes2;
use pkcs8::{EncodePrivateKey, EncryptedPrivateKeyInfo, LineEnding, PrivateKeyInfo};
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::{BigUint, RsaPrivateKey};
use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::error::{CryptoToolsError, Result};

/// Smallest modulus this tool will generate.
///
/// 512-bit moduli (once OpenSSL's default) have been factored publicly, and
/// the factoring records trend past 1024 bits. Not configurable downward.
pub const MINIMUM_KEY_BITS: usize = 2048;

/// Key length used when none is requested.
pub const DEFAULT_KEY_BITS: i64 = 2048;

/// Public exponent for every generated key (F4).
pub const PUBLIC_EXPONENT: u32 = 65537;

/// PBKDF2 rounds applied to the passphrase when encrypting.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

const SALT_LEN: usize = 16;
const AES_BLOCK_LEN: usize = 16;

/// Supplies the passphrase protecting a generated key.
///
/// The CLI reads it from the controlling terminal; tests substitute a stub.
pub trait PassphraseSource {
    fn read_passphrase(&self) -> Result<SecretString>;
}

/// What the operator asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRequest {
    /// Modulus length in bits, as requested (may be negative or too small)
    pub key_length: i64,
    /// Protect the PEM output with a passphrase
    pub encrypt: bool,
}

impl Default for KeyRequest {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_BITS,
            encrypt: true,
        }
    }
}

/// Reject key lengths below [`MINIMUM_KEY_BITS`], negative ones included.
///
/// Returns the accepted length as a bit count.
pub fn validate_key_length(key_length: i64) -> Result<usize> {
    match usize::try_from(key_length) {
        Ok(bits) if bits >= MINIMUM_KEY_BITS => Ok(bits),
        _ => Err(CryptoToolsError::KeyTooShort {
            requested: key_length,
            minimum: MINIMUM_KEY_BITS,
        }),
    }
}

/// Validate the request, acquire a passphrase if needed, then write the key.
///
/// Validation happens before the passphrase prompt and before any key
/// material exists, so a rejected request leaves `output` untouched.
pub fn generate_private_key<W: Write>(
    request: &KeyRequest,
    passphrases: &dyn PassphraseSource,
    output: &mut W,
) -> Result<()> {
    let length_in_bits = validate_key_length(request.key_length)?;

    let passphrase = if request.encrypt {
        Some(passphrases.read_passphrase()?)
    } else {
        None
    };

    write_rsa_key(output, length_in_bits, passphrase.as_ref())
}

/// Generate a key of `length_in_bits` and write it to `output` as PKCS8 PEM.
pub fn write_rsa_key<W: Write>(
    output: &mut W,
    length_in_bits: usize,
    passphrase: Option<&SecretString>,
) -> Result<()> {
    let private_key = generate_rsa_key(length_in_bits)?;
    let key_material = encode_private_key_pem(&private_key, passphrase)?;
    output.write_all(key_material.as_bytes())?;
    output.flush()?;
    Ok(())
}

/// Generate a fresh RSA key pair with the fixed public exponent.
pub fn generate_rsa_key(length_in_bits: usize) -> Result<RsaPrivateKey> {
    tracing::debug!(bits = length_in_bits, "generating RSA private key");
    let exponent = BigUint::from(PUBLIC_EXPONENT);
    let private_key = RsaPrivateKey::new_with_exp(&mut OsRng, length_in_bits, &exponent)?;
    Ok(private_key)
}

/// Serialize `private_key` as PKCS8 PEM, encrypted when a passphrase is given.
pub fn encode_private_key_pem(
    private_key: &RsaPrivateKey,
    passphrase: Option<&SecretString>,
) -> Result<Zeroizing<String>> {
    match passphrase {
        None => Ok(private_key.to_pkcs8_pem(LineEnding::LF)?),
        Some(passphrase) => encrypt_private_key_pem(private_key, passphrase),
    }
}

fn encrypt_private_key_pem(
    private_key: &RsaPrivateKey,
    passphrase: &SecretString,
) -> Result<Zeroizing<String>> {
    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; AES_BLOCK_LEN];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut iv);

    let params = pbes2::Parameters::pbkdf2_sha256_aes256cbc(PBKDF2_ITERATIONS, &salt, &iv)
        .map_err(|e| CryptoToolsError::Encoding(e.to_string()))?;

    let der = private_key.to_pkcs8_der()?;
    let info = PrivateKeyInfo::try_from(der.as_bytes())?;
    let encrypted =
        info.encrypt_with_params(params, passphrase.expose_secret().as_bytes())?;

    Ok(encrypted.to_pem(EncryptedPrivateKeyInfo::PEM_LABEL, LineEnding::LF)?)
}
