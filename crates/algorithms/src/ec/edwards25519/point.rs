//! Edwards curve point operations for Edwards25519
//!
//! Point arithmetic on the twisted Edwards curve -x² + y² = 1 + d·x²·y²
//! with d = -121665/121666, in affine coordinates. The addition formula is
//! unified: it covers doubling and the identity without case splits.

use crate::ec::edwards25519::constants::{BASE_X, BASE_Y, CURVE_D, ED25519_POINT_SIZE};
use crate::ec::edwards25519::FieldElement;
use crate::error::{Error, Result};

/// A point on the Edwards25519 curve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdwardsPoint {
    x: FieldElement,
    y: FieldElement,
}

/// The curve constant d as a field element
fn d() -> FieldElement {
    FieldElement::from_u256_reduced(CURVE_D)
}

impl EdwardsPoint {
    /// The identity element (0, 1).
    pub fn identity() -> Self {
        EdwardsPoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
        }
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == FieldElement::one()
    }

    /// The base point B.
    pub fn base_point() -> Self {
        EdwardsPoint {
            x: FieldElement::from_u256_reduced(BASE_X),
            y: FieldElement::from_u256_reduced(BASE_Y),
        }
    }

    /// Create a point from affine coordinates.
    ///
    /// Returns an error if the coordinates don't satisfy the curve equation.
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = EdwardsPoint { x, y };
        if !point.is_on_curve() {
            return Err(Error::param(
                "Ed25519 Point",
                "coordinates do not satisfy curve equation",
            ));
        }
        Ok(point)
    }

    /// Affine coordinates.
    pub fn coordinates(&self) -> (&FieldElement, &FieldElement) {
        (&self.x, &self.y)
    }

    /// Check the curve equation -x² + y² = 1 + d·x²·y².
    pub fn is_on_curve(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = yy.sub(&xx);
        let rhs = FieldElement::one().add(&d().mul(&xx).mul(&yy));
        lhs == rhs
    }

    /// Add two points with the unified twisted Edwards formula.
    ///
    /// x3 = (x1·y2 + y1·x2) / (1 + d·x1·x2·y1·y2)
    /// y3 = (y1·y2 + x1·x2) / (1 - d·x1·x2·y1·y2)
    ///
    /// Both denominators are nonzero for points on the curve because d is a
    /// non-square, so the formula needs no special cases.
    pub fn add(&self, other: &Self) -> Self {
        let x1y2 = self.x.mul(&other.y);
        let y1x2 = self.y.mul(&other.x);
        let y1y2 = self.y.mul(&other.y);
        let x1x2 = self.x.mul(&other.x);
        let dt = d().mul(&x1x2).mul(&y1y2);

        let one = FieldElement::one();
        let x3 = x1y2.add(&y1x2).mul(
            &one.add(&dt)
                .invert()
                .expect("unified addition denominator is nonzero on the curve"),
        );
        let y3 = y1y2.add(&x1x2).mul(
            &one.sub(&dt)
                .invert()
                .expect("unified addition denominator is nonzero on the curve"),
        );
        EdwardsPoint { x: x3, y: y3 }
    }

    /// Double a point.
    ///
    /// The unified addition formula is complete, so doubling is plain
    /// self-addition.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Additive inverse: -(x, y) = (-x, y).
    pub fn negate(&self) -> Self {
        EdwardsPoint {
            x: self.x.negate(),
            y: self.y,
        }
    }

    /// Scalar multiplication over a 32-byte little-endian scalar.
    ///
    /// Double-and-add walking the scalar bits from the least significant
    /// byte and bit upward.
    pub fn scalar_mul(&self, scalar_bytes: &[u8; 32]) -> Self {
        let mut result = EdwardsPoint::identity();
        let mut temp = self.clone();
        for i in 0..256 {
            if (scalar_bytes[i / 8] >> (i % 8)) & 1 == 1 {
                result = result.add(&temp);
            }
            temp = temp.double();
        }
        result
    }

    /// Encode as 32 bytes: little-endian x with the parity of y in the
    /// top bit.
    pub fn encode(&self) -> [u8; ED25519_POINT_SIZE] {
        let mut bytes = self.x.to_le_bytes();
        if self.y.is_odd() {
            bytes[31] |= 0x80;
        }
        bytes
    }

    /// Decode a 32-byte point encoding.
    ///
    /// Rejects an x value that does not fit the field after the sign bit is
    /// stripped, and recomputes y from the curve equation, selecting the
    /// root whose parity matches the sign bit.
    pub fn decode(bytes: &[u8; ED25519_POINT_SIZE]) -> Result<Self> {
        let y_is_odd = bytes[31] >> 7 == 1;
        let mut x_bytes = *bytes;
        x_bytes[31] &= 0x7f;

        let x = FieldElement::from_le_bytes(&x_bytes).map_err(|_| Error::Range {
            context: "Ed25519 point decode",
        })?;

        // y² = (1 + x²) / (1 - d·x²)
        let xx = x.square();
        let u = FieldElement::one().add(&xx);
        let v = FieldElement::one().sub(&d().mul(&xx));
        let y_sq = u.mul(&v.invert()?);

        let y = y_sq.sqrt().ok_or(Error::NoSquareRoot {
            context: "Ed25519 point decode",
        })?;
        if y.is_zero() && y_is_odd {
            return Err(Error::param(
                "Ed25519 Point",
                "sign bit set for zero coordinate",
            ));
        }
        let y = if y.is_odd() == y_is_odd {
            y
        } else {
            y.negate()
        };

        Ok(EdwardsPoint { x, y })
    }
}
