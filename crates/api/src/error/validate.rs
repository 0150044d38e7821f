//! Validation utilities for toyrsa operations

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate that a modulus can be reduced against
#[inline(always)]
pub fn modulus(modulus: u64, context: &'static str) -> Result<()> {
    parameter(modulus != 0, context, "modulus must be non-zero")
}
