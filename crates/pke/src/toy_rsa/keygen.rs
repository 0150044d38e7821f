//! Key pair generation

use rand::seq::index;
use rand::{CryptoRng, RngCore};
use toyrsa_algorithms::{derive_private_exponent, derive_public_exponent, primes_up_to};
use toyrsa_api::error::validate;
use toyrsa_api::{Error, KeyPair, Result};
use toyrsa_params::{KEY_SPACE, MAX_KEY_SPACE};

/// Generate a key pair from two distinct primes at or below `key_space`
///
/// The primes are drawn uniformly without replacement. Any failure aborts
/// generation; nothing is retried. In particular the pair `(2, 3)` gives
/// `phi = 2`, which has no public exponent candidate and surfaces as
/// [`Error::NoCandidate`].
pub fn generate<R>(rng: &mut R, key_space: u64) -> Result<KeyPair>
where
    R: RngCore + CryptoRng + ?Sized,
{
    validate::parameter(
        key_space <= MAX_KEY_SPACE,
        "key generation",
        "key space exceeds the supported maximum",
    )?;

    let primes: Vec<u64> = primes_up_to(key_space).collect();
    if primes.len() < 2 {
        return Err(Error::InsufficientPrimes {
            key_space,
            found: primes.len(),
        });
    }

    let picks = index::sample(rng, primes.len(), 2);
    let p = primes[picks.index(0)];
    let q = primes[picks.index(1)];

    let phi = (p - 1) * (q - 1);
    let n = p * q;
    let e = derive_public_exponent(rng, phi)?;
    let d = derive_private_exponent(phi, e)?;

    Ok(KeyPair { n, e, d, phi, p, q })
}

/// Generate a key pair over the default [`KEY_SPACE`]
pub fn generate_default<R>(rng: &mut R) -> Result<KeyPair>
where
    R: RngCore + CryptoRng + ?Sized,
{
    generate(rng, KEY_SPACE)
}
