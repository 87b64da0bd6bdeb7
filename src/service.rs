// RSA Service
// Entry point for shells: takes loosely typed text input, returns plain data

use std::str::FromStr;

use rand::thread_rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, KeyGenConfig};
use crate::rsa::{
    decrypt_message, encrypt_message, generate_keys_with, CodecError, KeyGenerationError,
    RsaBigInt, RsaKeyPair, RsaSignedInt,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    KeyGeneration(#[from] KeyGenerationError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("{field} must be an integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Parameters the key pair was derived from, as decimal strings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DetailsReport {
    pub p: String,
    pub q: String,
    pub phi: String,
}

/// Key generation result in the shape shells serialize:
/// `{"details": {...}, "public_key": [e, n], "private_key": [d, n]}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub details: DetailsReport,
    pub public_key: (String, String),
    pub private_key: (String, String),
}

impl From<&RsaKeyPair> for KeyReport {
    fn from(keypair: &RsaKeyPair) -> Self {
        Self {
            details: DetailsReport {
                p: keypair.details.p.to_str_radix(10),
                q: keypair.details.q.to_str_radix(10),
                phi: keypair.details.phi.to_str_radix(10),
            },
            public_key: (
                keypair.public_key.e.to_str_radix(10),
                keypair.public_key.n.to_str_radix(10),
            ),
            private_key: (
                keypair.private_key.d.to_str_radix(10),
                keypair.private_key.n.to_str_radix(10),
            ),
        }
    }
}

/// Stateless service shared by every request
#[derive(Debug, Clone, Default)]
pub struct RsaService {
    config: KeyGenConfig,
}

impl RsaService {
    pub fn new(config: KeyGenConfig) -> Self {
        info!(prime_pool = ?config.prime_pool, "rsa service ready");
        Self { config }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(KeyGenConfig::from_env()?))
    }

    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /// Generate a key pair. Missing or blank `p`/`q` are drawn from the
    /// configured pool.
    ///
    /// Caller-supplied primes are checked by trial division up to their
    /// square root, so a large value (say a 61-bit Mersenne prime) takes
    /// around 1.5e9 iterations. Shells taking untrusted input should cap
    /// the size or bound the request time.
    pub fn generate_keys(&self, p: Option<&str>, q: Option<&str>) -> Result<KeyReport, ServiceError> {
        let p = parse_optional::<RsaSignedInt>("p", p)?;
        let q = parse_optional::<RsaSignedInt>("q", q)?;

        let keypair = generate_keys_with(p, q, &self.config, &mut thread_rng())?;
        debug!(
            n = %keypair.public_key.n,
            e = %keypair.public_key.e,
            "generated key pair"
        );

        Ok(KeyReport::from(&keypair))
    }

    /// Encrypt `message` with public key `(e, n)`, one token per character
    pub fn encrypt(&self, message: &str, e: &str, n: &str) -> Result<Vec<String>, ServiceError> {
        let e = parse_required::<RsaBigInt>("e", e)?;
        let n = parse_required::<RsaBigInt>("n", n)?;

        let tokens = encrypt_message(message, &e, &n)?;
        debug!(chars = tokens.len(), "encrypted message");
        Ok(tokens)
    }

    /// Decrypt `tokens` with private key `(d, n)`
    pub fn decrypt<S: AsRef<str>>(&self, tokens: &[S], d: &str, n: &str) -> Result<String, ServiceError> {
        let d = parse_required::<RsaBigInt>("d", d)?;
        let n = parse_required::<RsaBigInt>("n", n)?;

        let plaintext = decrypt_message(tokens, &d, &n).map_err(|err| {
            warn!(%err, "rejecting ciphertext");
            err
        })?;
        debug!(tokens = tokens.len(), "decrypted message");
        Ok(plaintext)
    }
}

fn parse_optional<T: FromStr>(field: &'static str, raw: Option<&str>) -> Result<Option<T>, ServiceError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_required(field, value).map(Some),
    }
}

fn parse_required<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ServiceError> {
    let value = raw.trim();
    value.parse::<T>().map_err(|_| {
        warn!(field, value, "rejecting non-integer input");
        ServiceError::InvalidNumber {
            field,
            value: value.to_string(),
        }
    })
}
