// RSA Module - Main module file
// Exports the toy RSA arithmetic and the digit-split codec

pub mod bigint;
pub mod prime;
pub mod keygen;
pub mod encrypt;
pub mod decrypt;
pub mod error;

pub use bigint::{RsaBigInt, RsaSignedInt};
pub use prime::{find_coprime, is_prime};
pub use keygen::{generate_keys, generate_keys_with, KeyDetails, RsaKeyPair, RsaPublicKey, RsaPrivateKey};
pub use encrypt::{encrypt_char, encrypt_message};
pub use decrypt::{decrypt_pair, decrypt_message};
pub use error::{CodecError, KeyGenerationError};
