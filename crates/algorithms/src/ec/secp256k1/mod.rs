//! secp256k1 elliptic curve primitives
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where
//! p = 2^256 - 2^32 - 977; the base point G generates a group of prime
//! order n. Arithmetic is affine and value-based: no operation mutates
//! shared state.

mod constants;
mod point;
mod scalar;

pub use constants::{K256_FIELD_ELEMENT_SIZE, K256_POINT_UNCOMPRESSED_SIZE, K256_SCALAR_SIZE};
pub use point::Point;
pub use scalar::Scalar;

use rand::{CryptoRng, RngCore};
use sigil_api::CurveGroup;

use crate::error::Result;
use crate::field::PrimeField;
use crate::uint::U256;

/// Modulus marker for the secp256k1 field prime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1Field;

impl PrimeField for Secp256k1Field {
    const MODULUS: U256 = constants::FIELD_MODULUS;
    const NAME: &'static str = "K256 field element";
}

/// Modulus marker for the secp256k1 group order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1Order;

impl PrimeField for Secp256k1Order {
    const MODULUS: U256 = constants::GROUP_ORDER;
    const NAME: &'static str = "K256 scalar";
}

/// A coordinate of a secp256k1 point
pub type FieldElement = crate::field::FieldElement<Secp256k1Field>;

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> Point {
    let x = FieldElement::new(constants::GENERATOR_X).expect("standard base point must be valid");
    let y = FieldElement::new(constants::GENERATOR_Y).expect("standard base point must be valid");
    Point::from_affine_unchecked(x, y)
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul(scalar)
}

/// Generate a keypair by rejection sampling
///
/// Draws 32-byte candidates until one falls in [1, n) and returns it with
/// the matching public point.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let mut scalar_bytes = [0u8; K256_SCALAR_SIZE];
    loop {
        rng.fill_bytes(&mut scalar_bytes);
        match Scalar::from_repr(&scalar_bytes) {
            Ok(private_key) if !private_key.is_zero() => {
                let public_key = scalar_mult_base_g(&private_key);
                return Ok((private_key, public_key));
            }
            _ => continue,
        }
    }
}

/// Curve marker implementing the group capability interface
#[derive(Clone, Copy, Debug)]
pub struct Secp256k1;

impl CurveGroup for Secp256k1 {
    type Point = Point;
    type Scalar = Scalar;

    fn identity() -> Point {
        Point::identity()
    }

    fn generator() -> Point {
        base_point_g()
    }

    fn add(p: &Point, q: &Point) -> Point {
        p.add(q)
    }

    fn scalar_mul(k: &Scalar, p: &Point) -> Point {
        p.mul(k)
    }
}
