//! Toy RSA over `u64` integers
//!
//! The free functions take raw integers, matching how the values are typed
//! in at a terminal. [`ToyRsa`] wraps the same operations around the typed
//! keys from `toyrsa-api`.

mod cipher;
mod factoring;
mod keygen;

pub use cipher::{decrypt, encrypt};
pub use factoring::{crack, factor};
pub use keygen::{generate, generate_default};

use rand::{CryptoRng, RngCore};
use toyrsa_api::{Ciphertext, CrackResult, KeyPair, PrivateKey, PublicKey, Result};

/// Typed entry point for the toy RSA scheme
pub struct ToyRsa;

impl ToyRsa {
    /// Scheme name
    pub fn name() -> &'static str {
        "Toy-RSA-u64"
    }

    /// Generate a key pair from two primes at or below `key_space`
    pub fn keypair<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, key_space: u64) -> Result<KeyPair> {
        generate(rng, key_space)
    }

    /// Encrypt every character of `message` under `public_key`
    pub fn encrypt(public_key: &PublicKey, message: &str) -> Result<Ciphertext> {
        encrypt(public_key.modulus, public_key.exponent, message)
    }

    /// Decrypt `ciphertext` under `private_key`
    pub fn decrypt(private_key: &PrivateKey, ciphertext: &Ciphertext) -> Result<String> {
        decrypt(private_key.modulus, private_key.exponent, ciphertext.as_ref())
    }

    /// Recover the private side of `public_key` by factoring its modulus
    pub fn crack(public_key: &PublicKey) -> Result<CrackResult> {
        crack(public_key.modulus, public_key.exponent)
    }
}
