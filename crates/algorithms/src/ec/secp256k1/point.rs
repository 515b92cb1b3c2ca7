//! secp256k1 elliptic curve point operations
//!
//! Points are kept in affine coordinates and the identity element is a
//! dedicated enum variant, so it can never collide with a legitimate
//! coordinate pair.

use crate::ec::secp256k1::constants::{
    CURVE_B, K256_FIELD_ELEMENT_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
};
use crate::ec::secp256k1::FieldElement;
use crate::error::{validate, Error, Result};

use super::Scalar;

/// A point on the secp256k1 curve y^2 = x^3 + 7, or the point at infinity
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The identity element (point at infinity)
    Identity,
    /// An affine point satisfying the curve equation
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl Point {
    /// The identity element.
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Create a point from affine coordinates.
    ///
    /// Returns an error if the coordinates don't satisfy the curve equation.
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self> {
        if !Self::is_on_curve(&x, &y) {
            return Err(Error::param(
                "K256 Point",
                "coordinates do not satisfy curve equation",
            ));
        }
        Ok(Point::Affine { x, y })
    }

    pub(crate) fn from_affine_unchecked(x: FieldElement, y: FieldElement) -> Self {
        Point::Affine { x, y }
    }

    /// Affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Lift an x-coordinate onto the curve, selecting the root of
    /// y^2 = x^3 + 7 whose parity matches `y_is_odd`.
    pub fn lift_x(x: FieldElement, y_is_odd: bool) -> Result<Self> {
        let rhs = x.square().mul(&x).add(&FieldElement::from_u64(CURVE_B));
        let y = rhs.sqrt().ok_or(Error::NoSquareRoot {
            context: "K256 Point lift_x",
        })?;
        let y = if y.is_odd() == y_is_odd { y } else { y.negate() };
        Ok(Point::Affine { x, y })
    }

    /// Add two points using the group law.
    pub fn add(&self, other: &Self) -> Self {
        let (x1, y1) = match self {
            Point::Identity => return other.clone(),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match other {
            Point::Identity => return self.clone(),
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double();
            }
            // x1 == x2 with y1 != y2 means other == -self
            return Point::Identity;
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = y2.sub(y1).mul(
            &x2.sub(x1)
                .invert()
                .expect("distinct x-coordinates have a nonzero difference"),
        );

        let x3 = lambda.square().sub(x1).sub(x2);
        let y3 = lambda.mul(&x1.sub(&x3)).sub(y1);
        Point::Affine { x: x3, y: y3 }
    }

    /// Double a point (add it to itself).
    pub fn double(&self) -> Self {
        let (x, y) = match self {
            Point::Identity => return Point::Identity,
            Point::Affine { x, y } => (x, y),
        };
        // A 2-torsion point (y = 0) doubles to the identity
        if y.is_zero() {
            return Point::Identity;
        }

        // λ = (3·x²) / (2·y)
        let x_sq = x.square();
        let three_x_sq = x_sq.add(&x_sq).add(&x_sq);
        let lambda = three_x_sq.mul(
            &y.double()
                .invert()
                .expect("2y is nonzero for a non-torsion point"),
        );

        let x3 = lambda.square().sub(&x.double());
        let y3 = lambda.mul(&x.sub(&x3)).sub(y);
        Point::Affine { x: x3, y: y3 }
    }

    /// Additive inverse.
    pub fn negate(&self) -> Self {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: *x,
                y: y.negate(),
            },
        }
    }

    /// Scalar multiplication: compute scalar * self.
    ///
    /// Double-and-add from the most significant bit of the scalar down.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let k = scalar.to_u256();
        let mut result = Point::Identity;
        for i in (0..k.bit_len()).rev() {
            result = result.double();
            if k.bit(i) {
                result = result.add(self);
            }
        }
        result
    }

    /// Serialize this point in uncompressed format: 0x04 || x || y.
    ///
    /// The identity serializes as all zeros.
    pub fn serialize_uncompressed(&self) -> [u8; K256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_UNCOMPRESSED_SIZE];
        let (x, y) = match self.coordinates() {
            Some(c) => c,
            None => return out,
        };
        out[0] = 0x04;
        out[1..33].copy_from_slice(&x.to_be_bytes());
        out[33..].copy_from_slice(&y.to_be_bytes());
        out
    }

    /// Deserialize a point from uncompressed format.
    ///
    /// Returns an error if the bytes don't represent a valid point.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "K256 Uncompressed Point",
            bytes.len(),
            K256_POINT_UNCOMPRESSED_SIZE,
        )?;

        if bytes.iter().all(|&b| b == 0) {
            return Ok(Point::Identity);
        }

        if bytes[0] != 0x04 {
            return Err(Error::param(
                "K256 Point",
                "invalid uncompressed point prefix (expected 0x04)",
            ));
        }

        let mut x_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        let mut y_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..33]);
        y_bytes.copy_from_slice(&bytes[33..65]);

        let x = FieldElement::from_be_bytes(&x_bytes)?;
        let y = FieldElement::from_be_bytes(&y_bytes)?;
        Self::from_affine(x, y)
    }

    fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        let rhs = x.square().mul(x).add(&FieldElement::from_u64(CURVE_B));
        y.square() == rhs
    }
}
