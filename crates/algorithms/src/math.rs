//! Modular arithmetic and exponent derivation
//!
//! The exponent searches are linear scans over `[2, phi)`. That is only
//! affordable because phi is bounded by the square of the key space, and the
//! ascending first-match order of [`derive_private_exponent`] is what makes
//! its output reproducible for a fixed `(phi, e)`.

use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};
use toyrsa_api::{Error, Result};

/// Compute the greatest common divisor of two numbers
///
/// `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        return a;
    }

    gcd(b, a % b)
}

/// Perform modular exponentiation (base^exponent mod modulus)
///
/// Square-and-multiply over `u128` intermediates, so `base^exponent` is never
/// materialized. Returns 0 when `modulus == 1` and `1 % modulus` when
/// `exponent == 0`.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }

    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut base = base as u128 % m;
    let mut exp = exponent;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }

        exp >>= 1;
        base = base * base % m;
    }

    result as u64
}

/// Pick a public exponent uniformly at random from every `e` in `[2, phi)`
/// with `gcd(e, phi) == 1`
///
/// Fails with [`Error::NoCandidate`] when no such `e` exists. That happens
/// for `phi <= 2`, which includes the prime pair `(2, 3)`.
pub fn derive_public_exponent<R>(rng: &mut R, phi: u64) -> Result<u64>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let candidates: Vec<u64> = (2..phi).filter(|&e| gcd(e, phi) == 1).collect();

    candidates
        .choose(rng)
        .copied()
        .ok_or(Error::NoCandidate { phi })
}

/// Find the smallest `d` in `[2, phi)` with `(exponent * d) mod phi == 1`
///
/// Fails with [`Error::NoModularInverse`] when `exponent` is not coprime to
/// `phi`, which means the caller paired an exponent with the wrong totient.
pub fn derive_private_exponent(phi: u64, exponent: u64) -> Result<u64> {
    let e = exponent as u128;
    let m = phi as u128;

    (2..phi)
        .find(|&d| e * d as u128 % m == 1)
        .ok_or(Error::NoModularInverse { phi, exponent })
}
