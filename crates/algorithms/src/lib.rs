//! Number-theoretic primitives for toy RSA
//!
//! This crate provides the arithmetic every toyrsa operation is built from:
//!
//! - [`prime`]: prime enumeration below a bound and trial-division primality
//! - [`math`]: gcd, modular exponentiation and the brute-force searches that
//!   derive the public and private exponents from a totient
//!
//! Values are `u64`. Products are widened to `u128` before reduction, so
//! nothing here overflows for any modulus that fits in a `u64`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod math;
pub mod prime;

pub use math::{derive_private_exponent, derive_public_exponent, gcd, mod_pow};
pub use prime::{is_prime, primes_up_to};
