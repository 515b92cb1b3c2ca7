//! Trait definitions for the sigil library

pub mod curve;
pub mod signature;

pub use curve::CurveGroup;
pub use signature::{Signature, SignatureDerive};
