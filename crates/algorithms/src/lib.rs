//! Arithmetic and curve-group primitives for the sigil library
//!
//! Layering, leaves first: `uint` (fixed 256-bit integers), `field`
//! (prime-field elements generic over the modulus), `ec` (the two curve
//! groups). Everything is a pure function of its inputs; no module holds
//! mutable shared state.

pub mod ec;
pub mod error;
pub mod field;
pub mod uint;

pub use error::{Error, Result};
pub use field::{FieldElement, PrimeField};
pub use uint::U256;
