//! Test helpers shared by the toyrsa property suites

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use toyrsa_algorithms::primes_up_to;
use toyrsa_api::{Error, KeyPair};
use toyrsa_params::KEY_SPACE;
use toyrsa_pke::ToyRsa;

/// Deterministic CSPRNG for reproducible test runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Generate a key pair over the default key space, redrawing only when the
/// `(2, 3)` pair comes up
pub fn keypair(rng: &mut ChaCha20Rng) -> KeyPair {
    loop {
        match ToyRsa::keypair(rng, KEY_SPACE) {
            Ok(pair) => return pair,
            Err(err) => assert_eq!(err, Error::NoCandidate { phi: 2 }),
        }
    }
}

/// Every unordered pair of distinct primes at or below `bound`, skipping
/// `(2, 3)`
pub fn prime_pairs(bound: u64) -> Vec<(u64, u64)> {
    let primes: Vec<u64> = primes_up_to(bound).collect();
    let mut pairs = Vec::new();
    for (i, &p) in primes.iter().enumerate() {
        for &q in &primes[i + 1..] {
            if (p, q) != (2, 3) {
                pairs.push((p, q));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_pairs() {
        assert_eq!(prime_pairs(5), vec![(2, 5), (3, 5)]);
        // C(25, 2) - 1
        assert_eq!(prime_pairs(KEY_SPACE).len(), 299);
    }
}
