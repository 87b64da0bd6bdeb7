// Character Decryption
// Reverses the digit-split encryption one token at a time

use num_traits::{ToPrimitive, Zero};

use super::bigint::{mod_pow, RsaBigInt};
use super::encrypt::TOKEN_SEPARATOR;
use super::error::CodecError;

/// Decrypt one `"part1.part2"` token back into a character
pub fn decrypt_pair(token: &str, d: &RsaBigInt, n: &RsaBigInt) -> Result<char, CodecError> {
    if n.is_zero() {
        return Err(CodecError::ZeroModulus);
    }

    let (raw1, raw2) = token
        .split_once(TOKEN_SEPARATOR)
        .ok_or_else(|| CodecError::malformed(token, "missing '.' separator"))?;
    if raw2.contains(TOKEN_SEPARATOR) {
        return Err(CodecError::malformed(token, "more than one '.' separator"));
    }

    let part1 = parse_residue(token, raw1, n)?;
    let part2 = parse_residue(token, raw2, n)?;

    let plain1 = decrypt_digit(token, &part1, d, n)?;
    let plain2 = decrypt_digit(token, &part2, d, n)?;

    let code_point = plain1 * 10 + plain2;
    char::from_u32(code_point)
        .ok_or_else(|| CodecError::malformed(token, format!("{} is not a character", code_point)))
}

/// Decrypt a token sequence, concatenating the characters in order
pub fn decrypt_message<S: AsRef<str>>(tokens: &[S], d: &RsaBigInt, n: &RsaBigInt) -> Result<String, CodecError> {
    tokens
        .iter()
        .map(|token| decrypt_pair(token.as_ref(), d, n))
        .collect()
}

fn parse_residue(token: &str, raw: &str, n: &RsaBigInt) -> Result<RsaBigInt, CodecError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::malformed(token, format!("{:?} is not a non-negative integer", raw)));
    }

    let value: RsaBigInt = raw
        .parse()
        .map_err(|_| CodecError::malformed(token, format!("{:?} is not a non-negative integer", raw)))?;

    if &value >= n {
        return Err(CodecError::malformed(token, format!("{} is not below modulus {}", value, n)));
    }

    Ok(value)
}

fn decrypt_digit(token: &str, part: &RsaBigInt, d: &RsaBigInt, n: &RsaBigInt) -> Result<u32, CodecError> {
    let plain = mod_pow(part, d, n);
    match plain.to_u32() {
        Some(digit) if digit <= 9 => Ok(digit),
        _ => Err(CodecError::malformed(token, format!("decrypted digit {} is outside 0..=9", plain))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::{from_u64, RsaSignedInt};
    use crate::rsa::encrypt::{encrypt_char, encrypt_message};
    use crate::rsa::keygen::generate_keys;

    fn is_malformed(result: Result<char, CodecError>) -> bool {
        matches!(result, Err(CodecError::MalformedToken { .. }))
    }

    #[test]
    fn test_decrypt_known_token() {
        let c = decrypt_pair("6.128", &from_u64(103), &from_u64(143)).unwrap();
        assert_eq!(c, 'H');
    }

    #[test]
    fn test_roundtrip_all_two_digit_code_points() {
        let e = from_u64(7);
        let d = from_u64(103);
        let n = from_u64(143);

        for cp in 0u32..100 {
            let c = char::from_u32(cp).unwrap();
            let token = encrypt_char(cp, &e, &n).unwrap();
            assert_eq!(decrypt_pair(&token, &d, &n).unwrap(), c, "code point {}", cp);
        }
    }

    #[test]
    fn test_roundtrip_generated_keys() {
        let message = "HELLO, RSA! 0123456789 ?@[]^_";
        for &(p, q) in &[(11i64, 13i64), (17, 19), (19, 11), (101, 103)] {
            let keypair = generate_keys(Some(RsaSignedInt::from(p)), Some(RsaSignedInt::from(q))).unwrap();
            let tokens = keypair.public_key.encrypt(message).unwrap();
            assert_eq!(tokens.len(), message.chars().count());
            assert_eq!(keypair.private_key.decrypt(&tokens).unwrap(), message);
        }
    }

    #[test]
    fn test_decrypt_message_order() {
        let e = from_u64(7);
        let d = from_u64(103);
        let n = from_u64(143);
        let tokens = encrypt_message("abc", &e, &n).unwrap();
        assert_eq!(decrypt_message(&tokens, &d, &n).unwrap(), "abc");

        let reversed: Vec<&str> = tokens.iter().rev().map(String::as_str).collect();
        assert_eq!(decrypt_message(&reversed, &d, &n).unwrap(), "cba");
    }

    #[test]
    fn test_decrypt_empty_sequence() {
        let tokens: Vec<String> = Vec::new();
        assert_eq!(decrypt_message(&tokens, &from_u64(103), &from_u64(143)).unwrap(), "");
    }

    #[test]
    fn test_decrypt_malformed_tokens() {
        let d = from_u64(103);
        let n = from_u64(143);

        assert!(is_malformed(decrypt_pair("6128", &d, &n)));
        assert!(is_malformed(decrypt_pair("6.1.28", &d, &n)));
        assert!(is_malformed(decrypt_pair(".128", &d, &n)));
        assert!(is_malformed(decrypt_pair("6.", &d, &n)));
        assert!(is_malformed(decrypt_pair("a.b", &d, &n)));
        assert!(is_malformed(decrypt_pair("-6.128", &d, &n)));
        assert!(is_malformed(decrypt_pair("+6.128", &d, &n)));
        assert!(is_malformed(decrypt_pair(" 6.128", &d, &n)));
        assert!(is_malformed(decrypt_pair("", &d, &n)));
    }

    #[test]
    fn test_decrypt_residue_not_below_modulus() {
        assert!(is_malformed(decrypt_pair("143.0", &from_u64(103), &from_u64(143))));
        assert!(is_malformed(decrypt_pair("6.9999", &from_u64(103), &from_u64(143))));
    }

    #[test]
    fn test_decrypt_digit_out_of_range() {
        // With d = 1 the residue is the digit itself
        assert!(is_malformed(decrypt_pair("10.0", &from_u64(1), &from_u64(143))));
        assert_eq!(decrypt_pair("9.9", &from_u64(1), &from_u64(143)).unwrap(), 'c');
    }

    #[test]
    fn test_wide_code_point_rejected_on_decrypt() {
        let e = from_u64(7);
        let d = from_u64(103);
        let n = from_u64(143);
        let token = encrypt_char('é' as u32, &e, &n).unwrap();
        assert!(is_malformed(decrypt_pair(&token, &d, &n)));
    }

    #[test]
    fn test_decrypt_zero_modulus() {
        assert_eq!(
            decrypt_pair("6.128", &from_u64(103), &from_u64(0)),
            Err(CodecError::ZeroModulus)
        );
    }

    #[test]
    fn test_decrypt_message_stops_at_first_bad_token() {
        let tokens = ["6.128", "garbage"];
        let err = decrypt_message(&tokens, &from_u64(103), &from_u64(143)).unwrap_err();
        assert_eq!(
            err,
            CodecError::MalformedToken {
                token: "garbage".to_string(),
                reason: "missing '.' separator".to_string(),
            }
        );
    }
}
