//! # toyrsa
//!
//! The world's worst RSA: key generation, encryption, decryption and key
//! cracking over integers small enough to follow by hand.
//!
//! ## Usage
//!
//! ```
//! use rand::rngs::OsRng;
//! use toyrsa::prelude::*;
//!
//! let pair = loop {
//!     // the (2, 3) prime draw has no public exponent; draw again
//!     if let Ok(pair) = ToyRsa::keypair(&mut OsRng, toyrsa::params::KEY_SPACE) {
//!         break pair;
//!     }
//! };
//!
//! let ciphertext = ToyRsa::encrypt(&pair.public_key(), "\u{7}").unwrap();
//! let cracked = ToyRsa::crack(&pair.public_key()).unwrap();
//! assert_eq!(cracked.d, pair.d);
//! assert_eq!(ToyRsa::decrypt(&cracked.private_key(), &ciphertext).unwrap(), "\u{7}");
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`toyrsa-api`]: error and key types
//! - [`toyrsa-params`]: key space constants
//! - [`toyrsa-algorithms`]: primes, gcd, modular exponentiation, exponent derivation
//! - [`toyrsa-pke`]: key generation, encryption, decryption, cracking
//!
//! The [`shell`] module is the terminal front end used by the `toyrsa` binary.

#![forbid(unsafe_code)]

pub use toyrsa_algorithms as algorithms;
pub use toyrsa_api as api;
pub use toyrsa_params as params;
pub use toyrsa_pke as pke;

pub mod shell;

/// Common imports for toyrsa users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export key types
    pub use crate::api::{Ciphertext, CrackResult, KeyPair, PrivateKey, PublicKey};

    // Re-export the scheme
    pub use crate::pke::ToyRsa;
}
