//! Public API types for the toyrsa library
//!
//! This crate provides the shared surface of the toyrsa ecosystem: the error
//! type returned by every core operation and the small key and ciphertext
//! types that flow between key generation, encryption and cracking.

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;
