//! Error handling for the toyrsa core operations
//!
//! Every failure is terminal for the operation that raised it. Nothing in
//! the core retries, so the variants are specific enough for a caller to tell
//! a bad input pairing apart from a structurally impossible request.

pub mod validate;

use thiserror::Error as ThisError;

/// Primary error type for toyrsa operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// No exponent in `[2, phi)` is coprime to `phi`
    #[error("no public exponent candidate is coprime to phi {phi}")]
    NoCandidate {
        /// Totient that was searched
        phi: u64,
    },

    /// No `d` in `[2, phi)` satisfies `exponent * d = 1 (mod phi)`
    #[error("public exponent {exponent} has no modular inverse modulo phi {phi}")]
    NoModularInverse {
        /// Totient that was searched
        phi: u64,
        /// Public exponent whose inverse was requested
        exponent: u64,
    },

    /// Fewer than two primes exist at or below the key space
    #[error("key space {key_space} contains {found} prime(s), at least 2 are required")]
    InsufficientPrimes {
        /// Upper bound that was searched
        key_space: u64,
        /// Number of primes found
        found: usize,
    },

    /// A decrypted value is not a valid Unicode scalar value
    #[error("decrypted value {value} is not a valid character code point")]
    InvalidCodePoint {
        /// Offending decrypted value
        value: u64,
    },

    /// Trial division found no factor in `[2, isqrt(modulus)]`
    #[error("modulus {modulus} has no factor between 2 and its square root")]
    ModulusNotFactorable {
        /// Modulus that could not be factored
        modulus: u64,
    },

    /// Parameter outside the range the toy arithmetic supports
    #[error("{context}: {reason}")]
    InvalidParameter {
        /// Operation or parameter that was rejected
        context: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Result type for toyrsa operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an InvalidParameter error
    pub fn param(context: &'static str, reason: &'static str) -> Self {
        Error::InvalidParameter { context, reason }
    }
}
