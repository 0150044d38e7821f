//! Key recovery by trial-division factoring

use toyrsa_algorithms::derive_private_exponent;
use toyrsa_api::{CrackResult, Error, Result};

/// Split `modulus` at its smallest divisor `x` in `[2, isqrt(modulus)]`
///
/// The bound is inclusive, so a perfect square `p * p` factors as `(p, p)`.
/// Moduli below 4, primes and anything else without a divisor in range fail
/// with [`Error::ModulusNotFactorable`]. The smallest divisor found this way
/// is always prime.
pub fn factor(modulus: u64) -> Result<(u64, u64)> {
    let mut x = 2;
    while x <= modulus / x {
        if modulus % x == 0 {
            return Ok((x, modulus / x));
        }
        x += 1;
    }

    Err(Error::ModulusNotFactorable { modulus })
}

/// Recover `d`, `phi`, `p` and `q` from a public key `(modulus, exponent)`
///
/// Fails with [`Error::NoModularInverse`] when `exponent` is not coprime to
/// the recovered phi, meaning the pair was never a valid public key.
pub fn crack(modulus: u64, exponent: u64) -> Result<CrackResult> {
    let (p, q) = factor(modulus)?;
    debug_assert!(toyrsa_algorithms::is_prime(p));

    let phi = (p - 1) * (q - 1);
    let d = derive_private_exponent(phi, exponent)?;

    Ok(CrackResult { d, phi, p, q })
}
