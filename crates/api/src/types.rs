//! Key, crack and ciphertext types shared across the toyrsa crates
//!
//! Types holding private-side values (`d`, `phi`, `p`, `q`) are wiped when
//! dropped. The values are tiny and get printed by the shell anyway, but the
//! types are built the way real secret key material would be.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Public half of a key pair: `(n, e)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicKey {
    /// Modulus `n = p * q`
    pub modulus: u64,
    /// Public exponent `e`
    pub exponent: u64,
}

/// Private half of a key pair: `(n, d)`
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrivateKey {
    /// Modulus `n = p * q`
    pub modulus: u64,
    /// Private exponent `d`
    pub exponent: u64,
}

/// A complete toy RSA key pair
///
/// Invariants when produced by key generation:
/// - `n = p * q` with `p != q` both prime
/// - `phi = (p - 1) * (q - 1)`
/// - `gcd(e, phi) = 1` and `e * d = 1 (mod phi)`
/// - `1 < e < phi` and `1 < d < phi`
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyPair {
    /// Modulus `n`
    pub n: u64,
    /// Public exponent `e`
    pub e: u64,
    /// Private exponent `d`
    pub d: u64,
    /// Totient `(p - 1) * (q - 1)`
    pub phi: u64,
    /// First prime factor
    pub p: u64,
    /// Second prime factor
    pub q: u64,
}

impl KeyPair {
    /// The `(n, e)` pair used for encryption
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            modulus: self.n,
            exponent: self.e,
        }
    }

    /// The `(n, d)` pair used for decryption
    pub fn private_key(&self) -> PrivateKey {
        PrivateKey {
            modulus: self.n,
            exponent: self.d,
        }
    }
}

/// Private-side values recovered from a public key by factoring its modulus
///
/// `p` and `q` may come back swapped relative to the pair that generated the
/// key; `d` and `phi` do not depend on the order.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrackResult {
    /// Recovered private exponent
    pub d: u64,
    /// Recovered totient
    pub phi: u64,
    /// Smaller factor of the modulus
    pub p: u64,
    /// Cofactor `n / p`
    pub q: u64,
}

impl CrackResult {
    /// The recovered `(n, d)` pair
    pub fn private_key(&self) -> PrivateKey {
        PrivateKey {
            modulus: self.p * self.q,
            exponent: self.d,
        }
    }
}

/// Encrypted message: one integer per character, in message order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ciphertext(pub Vec<u64>);

impl Ciphertext {
    /// Number of encrypted characters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ciphertext encrypts the empty message
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the encrypted values in order
    pub fn iter(&self) -> impl Iterator<Item = &u64> {
        self.0.iter()
    }
}

impl From<Vec<u64>> for Ciphertext {
    fn from(values: Vec<u64>) -> Self {
        Ciphertext(values)
    }
}

impl FromIterator<u64> for Ciphertext {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Ciphertext(iter.into_iter().collect())
    }
}

impl AsRef<[u64]> for Ciphertext {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

/// Space-separated decimal values, the shell's wire format
impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
            for value in values {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}
