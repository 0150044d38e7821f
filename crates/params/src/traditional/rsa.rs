//! Constants for the toy RSA key space

/// Default upper bound for prime candidates during key generation
pub const KEY_SPACE: u64 = 100;

/// Smallest key space holding two distinct primes (2 and 3)
pub const MIN_KEY_SPACE: u64 = 3;

/// Largest key space accepted by key generation
///
/// Exponent derivation scans every integer below phi, and phi grows with the
/// square of the key space.
pub const MAX_KEY_SPACE: u64 = 1024;
