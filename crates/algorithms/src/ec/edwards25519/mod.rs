//! Edwards25519 twisted Edwards curve primitives
//!
//! The curve -x² + y² = 1 + d·x²·y² over F_p with p = 2^255 - 19 and
//! d = -121665/121666. The base point B generates a subgroup of prime
//! order L; the cofactor-8 structure is handled by scalar clamping in the
//! signature engine.

mod constants;
mod point;
mod scalar;

pub use constants::{ED25519_POINT_SIZE, ED25519_SCALAR_SIZE};
pub use point::EdwardsPoint;
pub use scalar::Scalar;

use sigil_api::CurveGroup;

use crate::field::PrimeField;
use crate::uint::U256;

/// Modulus marker for the Edwards25519 field prime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519Field;

impl PrimeField for Ed25519Field {
    const MODULUS: U256 = constants::FIELD_MODULUS;
    const NAME: &'static str = "Ed25519 field element";
}

/// Modulus marker for the Edwards25519 group order L
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519Order;

impl PrimeField for Ed25519Order {
    const MODULUS: U256 = constants::GROUP_ORDER;
    const NAME: &'static str = "Ed25519 scalar";
}

/// A coordinate of an Edwards25519 point
pub type FieldElement = crate::field::FieldElement<Ed25519Field>;

/// Clamp raw scalar bytes into the cofactor-8-compatible form
///
/// Clears the low 3 bits and bit 255, and sets bit 254.
pub fn clamp_scalar_bytes(bytes: &mut [u8; 32]) {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
}

/// Curve marker implementing the group capability interface
#[derive(Clone, Copy, Debug)]
pub struct Edwards25519;

impl CurveGroup for Edwards25519 {
    type Point = EdwardsPoint;
    type Scalar = Scalar;

    fn identity() -> EdwardsPoint {
        EdwardsPoint::identity()
    }

    fn generator() -> EdwardsPoint {
        EdwardsPoint::base_point()
    }

    fn add(p: &EdwardsPoint, q: &EdwardsPoint) -> EdwardsPoint {
        p.add(q)
    }

    fn scalar_mul(k: &Scalar, p: &EdwardsPoint) -> EdwardsPoint {
        p.scalar_mul(&k.to_le_bytes())
    }
}

#[cfg(test)]
mod tests;
