//! Toy RSA for teaching: small-prime key generation and a character cipher
//! that encrypts the tens and ones digits of each code point separately.
//!
//! Not for real use. Primes come from a tiny fixed pool and there is no
//! padding.

pub mod config;
pub mod rsa;
pub mod service;

#[cfg(feature = "gui")]
pub mod ui;

pub use config::KeyGenConfig;
pub use service::{KeyReport, RsaService, ServiceError};
