//! Validation utilities for the arithmetic layers

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a range condition
#[inline(always)]
pub fn range(in_range: bool, context: &'static str) -> Result<()> {
    if !in_range {
        return Err(Error::Range { context });
    }
    Ok(())
}
