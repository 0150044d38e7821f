//! Per-character encryption and decryption

use toyrsa_algorithms::mod_pow;
use toyrsa_api::error::validate;
use toyrsa_api::{Ciphertext, Error, Result};

/// Encrypt `message` one code point at a time: `c -> c^exponent mod modulus`
///
/// Code points `>= modulus` are reduced like any other value, so they do
/// not survive a round trip. That boundary is left in place; no error is
/// raised for it.
pub fn encrypt(modulus: u64, exponent: u64, message: &str) -> Result<Ciphertext> {
    validate::modulus(modulus, "encrypt")?;

    Ok(message
        .chars()
        .map(|c| mod_pow(c as u64, exponent, modulus))
        .collect())
}

/// Decrypt each value with `t -> t^exponent mod modulus` and read the result
/// as a Unicode scalar value
///
/// Fails with [`Error::InvalidCodePoint`] on the first value that is not a
/// valid `char`.
pub fn decrypt(modulus: u64, exponent: u64, ciphertext: &[u64]) -> Result<String> {
    validate::modulus(modulus, "decrypt")?;

    ciphertext
        .iter()
        .map(|&token| {
            let value = mod_pow(token, exponent, modulus);
            u32::try_from(value)
                .ok()
                .and_then(char::from_u32)
                .ok_or(Error::InvalidCodePoint { value })
        })
        .collect()
}
