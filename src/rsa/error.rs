// RSA Error Types

use thiserror::Error;

use super::bigint::RsaBigInt;

/// Errors raised while deriving a key pair
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyGenerationError {
    #[error("P or Q must be prime")]
    InvalidPrime,
    #[error("No integer in [2, {phi}) is coprime with phi = {phi}")]
    NoCoprimeFound { phi: RsaBigInt },
    #[error("e = {e} has no inverse modulo phi = {phi}")]
    ModularInverse { e: RsaBigInt, phi: RsaBigInt },
    #[error("Prime pool is empty, P and Q must both be given")]
    EmptyPrimePool,
}

/// Errors raised by the character codec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed token {token:?}: {reason}")]
    MalformedToken { token: String, reason: String },
    #[error("Modulus n must be non-zero")]
    ZeroModulus,
}

impl CodecError {
    pub(crate) fn malformed(token: &str, reason: impl Into<String>) -> Self {
        CodecError::MalformedToken {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}
