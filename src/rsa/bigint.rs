// RSA Big Integer Operations
// Wrapper around num-bigint for the arithmetic the toy scheme needs

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Signed big integer, used where callers may hand in negative candidates
pub type RsaSignedInt = BigInt;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
///
/// The modulus must be non-zero; callers check this before reaching here.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }

    let a = BigInt::from_biguint(Sign::Plus, a.clone());
    let m = BigInt::from_biguint(Sign::Plus, m.clone());

    // Signed extended Euclid: a*x + m*y = gcd(a, m)
    let egcd = a.extended_gcd(&m);
    if !egcd.gcd.is_one() {
        return None;
    }

    // mod_floor keeps the result in [0, m) even when x is negative
    egcd.x.mod_floor(&m).to_biguint()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let base = from_u64(3);
        let exp = from_u64(5);
        let modulus = from_u64(7);
        let result = mod_pow(&base, &exp, &modulus);
        assert_eq!(result, from_u64(5));
    }

    #[test]
    fn test_mod_pow_edge_cases() {
        // Anything mod 1 is 0
        assert_eq!(mod_pow(&from_u64(5), &from_u64(3), &from_u64(1)), from_u64(0));
        // x^0 = 1
        assert_eq!(mod_pow(&from_u64(9), &from_u64(0), &from_u64(143)), from_u64(1));
        // 0^e = 0
        assert_eq!(mod_pow(&from_u64(0), &from_u64(7), &from_u64(143)), from_u64(0));
        // 7^7 mod 143 = 823543 mod 143 = 6
        assert_eq!(mod_pow(&from_u64(7), &from_u64(7), &from_u64(143)), from_u64(6));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&from_u64(2), &from_u64(120)), from_u64(2));
        assert_eq!(gcd(&from_u64(7), &from_u64(120)), from_u64(1));
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let a = from_u64(3);
        let m = from_u64(7);
        let inv = mod_inverse(&a, &m).unwrap();
        assert_eq!(inv, from_u64(5));

        // Verify: 3 * 5 = 15 ≡ 1 (mod 7)
        assert_eq!((a * inv) % m, from_u64(1));
    }

    #[test]
    fn test_mod_inverse_negative_coefficient() {
        // Extended Euclid yields x = -17 for (7, 120); result must wrap to 103
        let inv = mod_inverse(&from_u64(7), &from_u64(120)).unwrap();
        assert_eq!(inv, from_u64(103));
    }

    #[test]
    fn test_mod_inverse_missing() {
        assert!(mod_inverse(&from_u64(2), &from_u64(120)).is_none());
        assert!(mod_inverse(&from_u64(3), &from_u64(0)).is_none());
    }
}
