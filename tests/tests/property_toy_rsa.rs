//! Property-based tests for toy RSA key derivation, round trips and cracking

use proptest::prelude::*;
use proptest::sample::select;
use toyrsa_algorithms::{derive_private_exponent, derive_public_exponent, gcd, mod_pow};
use toyrsa_params::KEY_SPACE;
use toyrsa_pke::{crack, decrypt, encrypt};
use toyrsa_tests::{keypair, prime_pairs, seeded_rng};

/// Any pair of distinct primes from the default key space, except (2, 3)
fn prime_pair() -> impl Strategy<Value = (u64, u64)> {
    select(prime_pairs(KEY_SPACE))
}

proptest! {
    #[test]
    fn derived_exponents_are_inverse((p, q) in prime_pair(), seed in any::<u64>()) {
        let phi = (p - 1) * (q - 1);
        let e = derive_public_exponent(&mut seeded_rng(seed), phi).unwrap();
        let d = derive_private_exponent(phi, e).unwrap();

        prop_assert_eq!(gcd(e, phi), 1);
        prop_assert_eq!(e * d % phi, 1);
        prop_assert!(1 < e && e < phi);
        prop_assert!(1 < d && d < phi);
    }

    #[test]
    fn round_trip_below_modulus(seed in any::<u64>(), codes in prop::collection::vec(0u32..10, 0..32)) {
        let pair = keypair(&mut seeded_rng(seed));
        // the smallest modulus is 2 * 5 = 10, so every code here is < n
        let message: String = codes.iter().filter_map(|&c| char::from_u32(c)).collect();

        let ciphertext = encrypt(pair.n, pair.e, &message).unwrap();
        prop_assert_eq!(ciphertext.len(), message.chars().count());
        prop_assert_eq!(decrypt(pair.n, pair.d, ciphertext.as_ref()).unwrap(), message);
    }

    #[test]
    fn round_trip_any_code_point_below_modulus(seed in any::<u64>(), raw in any::<u64>()) {
        let pair = keypair(&mut seeded_rng(seed));
        let code = raw % pair.n;
        prop_assume!(char::from_u32(code as u32).is_some());

        let c = mod_pow(code, pair.e, pair.n);
        prop_assert_eq!(mod_pow(c, pair.d, pair.n), code);
    }

    #[test]
    fn crack_recovers_private_exponent(seed in any::<u64>()) {
        let pair = keypair(&mut seeded_rng(seed));
        let cracked = crack(pair.n, pair.e).unwrap();

        prop_assert_eq!(cracked.d, pair.d);
        prop_assert_eq!(cracked.phi, pair.phi);
        prop_assert_eq!(cracked.p * cracked.q, pair.n);
        prop_assert!(cracked.p == pair.p.min(pair.q));
    }

    #[test]
    fn mod_pow_zero_exponent(base in any::<u64>(), modulus in 1u64..) {
        prop_assert_eq!(mod_pow(base, 0, modulus), 1 % modulus);
    }
}
