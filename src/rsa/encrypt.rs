// Character Encryption
// Splits each code point into tens and ones digits and encrypts each digit

use num_traits::Zero;

use super::bigint::{from_u64, mod_pow, RsaBigInt};
use super::error::CodecError;

/// Separator between the two encrypted digits of a token
pub const TOKEN_SEPARATOR: char = '.';

/// Encrypt one code point into a `"part1.part2"` token.
///
/// `part1 = (cp / 10)^e mod n` and `part2 = (cp % 10)^e mod n`. Code points
/// of 100 and above keep their full tens value in `part1`; such tokens are
/// rejected when decrypting.
pub fn encrypt_char(code_point: u32, e: &RsaBigInt, n: &RsaBigInt) -> Result<String, CodecError> {
    if n.is_zero() {
        return Err(CodecError::ZeroModulus);
    }

    let high = from_u64(u64::from(code_point / 10));
    let low = from_u64(u64::from(code_point % 10));

    let part1 = mod_pow(&high, e, n);
    let part2 = mod_pow(&low, e, n);

    Ok(format!("{}{}{}", part1, TOKEN_SEPARATOR, part2))
}

/// Encrypt a message, one token per character, in message order
pub fn encrypt_message(message: &str, e: &RsaBigInt, n: &RsaBigInt) -> Result<Vec<String>, CodecError> {
    message
        .chars()
        .map(|c| encrypt_char(u32::from(c), e, n))
        .collect()
}
