//! Toy RSA public key encryption for the toyrsa library
//!
//! Three operations share the primitives from `toyrsa-algorithms`:
//!
//! - [`generate`] samples two distinct primes below a key space and derives
//!   `n`, `phi`, `e` and `d`
//! - [`encrypt`] / [`decrypt`] map each character code point through
//!   `mod_pow` under `(n, e)` or `(n, d)`
//! - [`crack`] factors `n` by trial division and recomputes `d`
//!
//! None of this is secure. Keys are tiny, there is no padding, and every
//! character is encrypted independently.

#![forbid(unsafe_code)]

pub mod toy_rsa;

// Re-export key items
pub use toy_rsa::{crack, decrypt, encrypt, factor, generate, generate_default, ToyRsa};
pub use toyrsa_api::{Ciphertext, CrackResult, Error, KeyPair, PrivateKey, PublicKey, Result};
