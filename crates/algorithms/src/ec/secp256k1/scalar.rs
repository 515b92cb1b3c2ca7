//! secp256k1 scalar arithmetic modulo the group order n

use zeroize::Zeroize;

use crate::ec::secp256k1::Secp256k1Order;
use crate::error::Result;
use crate::field::FieldElement;
use crate::uint::U256;

/// An integer modulo the secp256k1 group order
///
/// Zero is representable; the call sites that require a scalar in (0, n) -
/// secret keys and signature components - enforce that separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar(FieldElement<Secp256k1Order>);

impl Scalar {
    /// The scalar 0
    pub fn zero() -> Self {
        Scalar(FieldElement::zero())
    }

    /// Create a scalar from 32 big-endian bytes.
    ///
    /// Returns a `Range` error for values not below the group order.
    pub fn from_repr(bytes: &[u8; 32]) -> Result<Self> {
        FieldElement::from_be_bytes(bytes).map(Scalar)
    }

    /// Create a scalar from 32 big-endian bytes, reducing modulo n.
    ///
    /// Used for message hashes and x-coordinates folded into the scalar
    /// field.
    pub fn reduce_from_be_bytes(bytes: &[u8; 32]) -> Self {
        Scalar(FieldElement::from_be_bytes_reduced(bytes))
    }

    /// Create a scalar from an integer, reducing modulo n.
    pub fn reduce_from_u256(value: U256) -> Self {
        Scalar(FieldElement::from_u256_reduced(value))
    }

    /// Serialize this scalar as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// The underlying integer.
    pub fn to_u256(&self) -> U256 {
        self.0.to_u256()
    }

    /// Check if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Addition modulo n.
    pub fn add(&self, rhs: &Self) -> Self {
        Scalar(self.0.add(&rhs.0))
    }

    /// Multiplication modulo n.
    pub fn mul(&self, rhs: &Self) -> Self {
        Scalar(self.0.mul(&rhs.0))
    }

    /// Additive inverse modulo n.
    pub fn negate(&self) -> Self {
        Scalar(self.0.negate())
    }

    /// Multiplicative inverse modulo n.
    pub fn invert(&self) -> Result<Self> {
        self.0.invert().map(Scalar)
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
