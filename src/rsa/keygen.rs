// RSA Key Generation
// Combines two small primes into a public/private key pair

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use tracing::{debug, warn};

use super::bigint::{from_u64, mod_inverse, RsaBigInt, RsaSignedInt};
use super::error::KeyGenerationError;
use super::prime::{find_coprime, is_prime};
use crate::config::KeyGenConfig;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: RsaBigInt,  // Public exponent
    pub n: RsaBigInt,  // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub d: RsaBigInt,  // Private exponent
    pub n: RsaBigInt,  // Modulus (same as public)
}

/// Parameters the key pair was derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDetails {
    pub p: RsaBigInt,
    pub q: RsaBigInt,
    pub phi: RsaBigInt,  // (p-1)(q-1)
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub details: KeyDetails,
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    pub fn new(e: RsaBigInt, n: RsaBigInt) -> Self {
        Self { e, n }
    }

    /// Encrypt a message, one token per character
    pub fn encrypt(&self, message: &str) -> Result<Vec<String>, super::CodecError> {
        super::encrypt::encrypt_message(message, &self.e, &self.n)
    }
}

impl RsaPrivateKey {
    pub fn new(d: RsaBigInt, n: RsaBigInt) -> Self {
        Self { d, n }
    }

    /// Decrypt a token sequence back into text
    pub fn decrypt<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String, super::CodecError> {
        super::decrypt::decrypt_message(tokens, &self.d, &self.n)
    }
}

/// Generate a key pair from the default prime pool and the thread RNG.
///
/// `None` for `p` or `q` means "pick one from the pool".
pub fn generate_keys(
    p: Option<RsaSignedInt>,
    q: Option<RsaSignedInt>,
) -> Result<RsaKeyPair, KeyGenerationError> {
    generate_keys_with(p, q, &KeyGenConfig::default(), &mut thread_rng())
}

/// Generate a key pair with an explicit config and randomness source
pub fn generate_keys_with<R: Rng + ?Sized>(
    p: Option<RsaSignedInt>,
    q: Option<RsaSignedInt>,
    config: &KeyGenConfig,
    rng: &mut R,
) -> Result<RsaKeyPair, KeyGenerationError> {
    // Draw p before q so a seeded source gives a stable pair
    let p = match p {
        Some(p) => p,
        None => pick_prime(config, rng)?,
    };
    let q = match q {
        Some(q) => q,
        None => pick_prime(config, rng)?,
    };

    if !is_prime(&p) || !is_prime(&q) {
        warn!(%p, %q, "rejecting non-prime key parameters");
        return Err(KeyGenerationError::InvalidPrime);
    }

    // Both are > 1 here, so the magnitude is the value itself
    let p = p.magnitude().clone();
    let q = q.magnitude().clone();

    // Step 1: n = p * q
    let n = &p * &q;

    // Step 2: φ(n) = (p-1)(q-1)
    let phi = (&p - 1u8) * (&q - 1u8);

    // Step 3: smallest e coprime with φ(n)
    let e = find_coprime(&phi)?;

    // Step 4: d = e^(-1) mod φ(n)
    let d = mod_inverse(&e, &phi).ok_or_else(|| KeyGenerationError::ModularInverse {
        e: e.clone(),
        phi: phi.clone(),
    })?;

    debug!(%p, %q, %n, %phi, %e, "derived key pair");

    Ok(RsaKeyPair {
        details: KeyDetails { p, q, phi },
        public_key: RsaPublicKey::new(e, n.clone()),
        private_key: RsaPrivateKey::new(d, n),
    })
}

fn pick_prime<R: Rng + ?Sized>(
    config: &KeyGenConfig,
    rng: &mut R,
) -> Result<RsaSignedInt, KeyGenerationError> {
    config
        .prime_pool
        .choose(rng)
        .map(|&v| RsaSignedInt::from(from_u64(v)))
        .ok_or(KeyGenerationError::EmptyPrimePool)
}
