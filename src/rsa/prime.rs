// Primality checking and coprime search

use num_traits::{One, Signed, Zero};

use super::bigint::{gcd, from_u64, RsaBigInt, RsaSignedInt};
use super::error::KeyGenerationError;

/// Trial-division primality test.
///
/// Returns false for anything `<= 1`; otherwise true iff no `i` in
/// `[2, isqrt(value)]` divides `value`.
pub fn is_prime(value: &RsaSignedInt) -> bool {
    if !value.is_positive() || value.is_one() {
        return false;
    }

    let value = value.magnitude();
    let limit = value.sqrt();
    let mut i = from_u64(2);

    while i <= limit {
        if (value % &i).is_zero() {
            return false;
        }
        i += 1u8;
    }

    true
}

/// Smallest `e` in `[2, phi)` with `gcd(e, phi) == 1`.
pub fn find_coprime(phi: &RsaBigInt) -> Result<RsaBigInt, KeyGenerationError> {
    let mut e = from_u64(2);

    while &e < phi {
        if gcd(&e, phi).is_one() {
            return Ok(e);
        }
        e += 1u8;
    }

    Err(KeyGenerationError::NoCoprimeFound { phi: phi.clone() })
}
