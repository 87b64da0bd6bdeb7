// Key generation configuration

use std::env;

use thiserror::Error;

/// Environment variable overriding the prime pool, e.g. `11,13,17,19`
pub const PRIME_POOL_ENV: &str = "TOY_RSA_PRIME_POOL";

/// Primes drawn from when the caller leaves P or Q unspecified
pub const DEFAULT_PRIME_POOL: [u64; 4] = [11, 13, 17, 19];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is empty")]
    EmptyPool { var: &'static str },
    #[error("{var} entry {entry:?} is not an unsigned integer")]
    InvalidEntry { var: &'static str, entry: String },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

/// Configuration for key generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    pub prime_pool: Vec<u64>,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            prime_pool: DEFAULT_PRIME_POOL.to_vec(),
        }
    }
}

impl KeyGenConfig {
    pub fn with_prime_pool(mut self, pool: impl Into<Vec<u64>>) -> Self {
        self.prime_pool = pool.into();
        self
    }

    /// Read the pool from `TOY_RSA_PRIME_POOL`, falling back to the default
    /// when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(PRIME_POOL_ENV) {
            Ok(raw) => Ok(Self::default().with_prime_pool(parse_prime_pool(&raw)?)),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var: PRIME_POOL_ENV }),
        }
    }
}

/// Parse a comma-separated list of integers
pub fn parse_prime_pool(raw: &str) -> Result<Vec<u64>, ConfigError> {
    let pool = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<u64>().map_err(|_| ConfigError::InvalidEntry {
                var: PRIME_POOL_ENV,
                entry: entry.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if pool.is_empty() {
        return Err(ConfigError::EmptyPool { var: PRIME_POOL_ENV });
    }

    Ok(pool)
}
