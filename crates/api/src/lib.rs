//! Public API traits and types for the sigil library
//!
//! This crate provides the public API surface shared by the sigil crates:
//! trait definitions and the error type used throughout the library.

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::{CurveGroup, Signature, SignatureDerive};
