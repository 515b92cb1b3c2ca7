//! Scalar arithmetic modulo the Edwards25519 group order L

use zeroize::Zeroize;

use crate::ec::edwards25519::Ed25519Order;
use crate::error::Result;
use crate::field::FieldElement;

/// An integer modulo L = 2^252 + 27742317777372353535851937790883648493
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar(FieldElement<Ed25519Order>);

impl Scalar {
    /// Create a scalar from 32 little-endian bytes.
    ///
    /// Returns a `Range` error for values not below L; used for the S
    /// component of a signature, which must be canonical.
    pub fn from_le_bytes(bytes: &[u8; 32]) -> Result<Self> {
        FieldElement::from_le_bytes(bytes).map(Scalar)
    }

    /// Create a scalar from 32 little-endian bytes, reducing modulo L.
    pub fn reduce_from_le_bytes(bytes: &[u8; 32]) -> Self {
        Scalar(FieldElement::from_le_bytes_reduced(bytes))
    }

    /// Reduce a 512-bit little-endian value (a wide hash output) modulo L.
    pub fn from_wide_le_bytes(bytes: &[u8; 64]) -> Self {
        Scalar(FieldElement::from_wide_le_bytes(bytes))
    }

    /// Serialize this scalar as 32 little-endian bytes.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        self.0.to_le_bytes()
    }

    /// Check if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Addition modulo L.
    pub fn add(&self, rhs: &Self) -> Self {
        Scalar(self.0.add(&rhs.0))
    }

    /// Multiplication modulo L.
    pub fn mul(&self, rhs: &Self) -> Self {
        Scalar(self.0.mul(&rhs.0))
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
