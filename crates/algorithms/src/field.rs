//! Prime-field arithmetic generic over the modulus
//!
//! A field element is an integer in [0, p), tagged at the type level with a
//! zero-sized marker naming its prime. The two curve families instantiate
//! four markers (field prime and group order each); mixing elements of
//! different primes is a compile error.
//!
//! Every operation takes reduced elements and returns a reduced element.

use core::marker::PhantomData;

use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::uint::{reduce_wide, U256};

/// Marker trait tying a field element to its prime modulus
pub trait PrimeField: Copy + Clone + core::fmt::Debug + PartialEq + Eq + 'static {
    /// The prime modulus
    const MODULUS: U256;
    /// Name used in error contexts
    const NAME: &'static str;
}

/// An integer in [0, p) for the prime p of the marker `P`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement<P: PrimeField> {
    value: U256,
    _prime: PhantomData<P>,
}

impl<P: PrimeField> FieldElement<P> {
    fn wrap(value: U256) -> Self {
        FieldElement {
            value,
            _prime: PhantomData,
        }
    }

    /// The additive identity
    pub fn zero() -> Self {
        Self::wrap(U256::ZERO)
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        Self::wrap(U256::ONE)
    }

    /// Construct from a small integer
    pub fn from_u64(value: u64) -> Self {
        Self::wrap(U256::from_u64(value).rem(&P::MODULUS))
    }

    /// Construct from an integer already known to be in range
    ///
    /// Returns a `Range` error when the value is not reduced.
    pub fn new(value: U256) -> Result<Self> {
        if value >= P::MODULUS {
            return Err(Error::Range { context: P::NAME });
        }
        Ok(Self::wrap(value))
    }

    /// Construct from an arbitrary integer, reducing modulo p
    pub fn from_u256_reduced(value: U256) -> Self {
        Self::wrap(value.rem(&P::MODULUS))
    }

    /// Construct from 32 big-endian bytes; rejects unreduced values
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self> {
        Self::new(U256::from_be_bytes(bytes))
    }

    /// Construct from 32 big-endian bytes, reducing modulo p
    pub fn from_be_bytes_reduced(bytes: &[u8; 32]) -> Self {
        Self::from_u256_reduced(U256::from_be_bytes(bytes))
    }

    /// Construct from 32 little-endian bytes; rejects unreduced values
    pub fn from_le_bytes(bytes: &[u8; 32]) -> Result<Self> {
        Self::new(U256::from_le_bytes(bytes))
    }

    /// Construct from 32 little-endian bytes, reducing modulo p
    pub fn from_le_bytes_reduced(bytes: &[u8; 32]) -> Self {
        Self::from_u256_reduced(U256::from_le_bytes(bytes))
    }

    /// Construct from a 512-bit little-endian value, reducing modulo p
    pub fn from_wide_le_bytes(bytes: &[u8; 64]) -> Self {
        let mut lo = [0u8; 32];
        let mut hi = [0u8; 32];
        lo.copy_from_slice(&bytes[..32]);
        hi.copy_from_slice(&bytes[32..]);
        Self::wrap(reduce_wide(
            &U256::from_le_bytes(&lo),
            &U256::from_le_bytes(&hi),
            &P::MODULUS,
        ))
    }

    /// Serialize as 32 big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.value.to_be_bytes()
    }

    /// Serialize as 32 little-endian bytes
    pub fn to_le_bytes(&self) -> [u8; 32] {
        self.value.to_le_bytes()
    }

    /// The underlying integer
    pub fn to_u256(&self) -> U256 {
        self.value
    }

    /// Whether the element is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Whether the element is odd
    pub fn is_odd(&self) -> bool {
        self.value.is_odd()
    }

    /// Modular addition
    pub fn add(&self, rhs: &Self) -> Self {
        Self::wrap(self.value.add_mod(&rhs.value, &P::MODULUS))
    }

    /// Modular subtraction
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::wrap(self.value.sub_mod(&rhs.value, &P::MODULUS))
    }

    /// Modular multiplication
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::wrap(self.value.mul_mod(&rhs.value, &P::MODULUS))
    }

    /// Squaring
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Doubling
    pub fn double(&self) -> Self {
        Self::wrap(self.value.double_mod(&P::MODULUS))
    }

    /// Additive inverse
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self::wrap(P::MODULUS.wrapping_sub(&self.value))
        }
    }

    /// Multiplicative inverse
    ///
    /// Fails only for zero, which must never occur on live curve arithmetic
    /// inputs; callers there treat it as a precondition violation.
    pub fn invert(&self) -> Result<Self> {
        self.value
            .inv_mod(&P::MODULUS)
            .map(Self::wrap)
            .ok_or(Error::NoInverse { context: P::NAME })
    }

    /// Modular exponentiation
    pub fn pow(&self, exp: &U256) -> Self {
        Self::wrap(self.value.pow_mod(exp, &P::MODULUS))
    }

    /// Modular square root, when one exists
    ///
    /// Handles p = 3 (mod 4) with the (p+1)/4 exponent and p = 5 (mod 8)
    /// with the (p+3)/8 exponent plus the sqrt(-1) correction. The secp256k1
    /// prime is of the first shape, the Edwards25519 prime of the second.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }
        let m = P::MODULUS;
        if m.bit(0) && m.bit(1) {
            // p = 4k + 3: candidate = a^(k+1), and (m >> 2) + 1 == (p+1)/4
            let exp = m.shr(2).wrapping_add(&U256::ONE);
            let candidate = self.pow(&exp);
            if candidate.square() == *self {
                return Some(candidate);
            }
            None
        } else if m.bit(0) && !m.bit(1) && m.bit(2) {
            // p = 8k + 5: candidate = a^(k+1), and (m >> 3) + 1 == (p+3)/8
            let exp = m.shr(3).wrapping_add(&U256::ONE);
            let candidate = self.pow(&exp);
            if candidate.square() == *self {
                return Some(candidate);
            }
            // candidate^2 == -a: multiply by sqrt(-1) = 2^((p-1)/4),
            // where (m >> 2) == (p-1)/4 for this prime shape
            let sqrt_m1 = Self::from_u64(2).pow(&m.shr(2));
            let candidate = candidate.mul(&sqrt_m1);
            if candidate.square() == *self {
                return Some(candidate);
            }
            None
        } else {
            None
        }
    }
}

impl<P: PrimeField> Zeroize for FieldElement<P> {
    fn zeroize(&mut self) {
        self.value.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// The secp256k1 field prime, p = 3 (mod 4)
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct P256k1;

    impl PrimeField for P256k1 {
        const MODULUS: U256 = U256::from_be_hex(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        );
        const NAME: &'static str = "test field p256k1";
    }

    /// The Edwards25519 field prime, p = 5 (mod 8)
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct P25519;

    impl PrimeField for P25519 {
        const MODULUS: U256 = U256::from_be_hex(
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
        );
        const NAME: &'static str = "test field p25519";
    }

    type FeK = FieldElement<P256k1>;
    type FeEd = FieldElement<P25519>;

    #[test]
    fn new_rejects_unreduced() {
        assert!(FeK::new(P256k1::MODULUS).is_err());
        let below = P256k1::MODULUS.wrapping_sub(&U256::ONE);
        assert!(FeK::new(below).is_ok());
    }

    #[test]
    fn negate_and_add_cancel() {
        let a = FeK::from_u64(12345);
        assert!(a.add(&a.negate()).is_zero());
        assert!(FeK::zero().negate().is_zero());
    }

    #[test]
    fn inverse_round_trip() {
        let a = FeK::from_u64(0xdead_beef);
        let inv = a.invert().unwrap();
        assert_eq!(a.mul(&inv), FeK::one());
        assert!(FeK::zero().invert().is_err());

        let b = FeEd::from_u64(7);
        assert_eq!(b.mul(&b.invert().unwrap()), FeEd::one());
    }

    #[test]
    fn sqrt_of_square_mod_3_4_prime() {
        let t = FeK::from_u64(3);
        let root = t.square().sqrt().expect("square must have a root");
        assert!(root == t || root == t.negate());
    }

    #[test]
    fn sqrt_of_square_mod_5_8_prime() {
        // Exercise both the direct candidate and the sqrt(-1) correction.
        for value in [2u64, 3, 5, 6, 7, 11] {
            let t = FeEd::from_u64(value);
            let root = t.square().sqrt().expect("square must have a root");
            assert!(root == t || root == t.negate(), "value {}", value);
        }
    }

    #[test]
    fn sqrt_rejects_non_residues() {
        // -1 is a non-residue for p = 3 (mod 4)
        assert!(FeK::one().negate().sqrt().is_none());
        // 2 is a non-residue for p = 5 (mod 8)
        assert!(FeEd::from_u64(2).sqrt().is_none());
    }

    #[test]
    fn wide_reduction_matches_product() {
        let a = FeEd::from_u64(u64::MAX);
        let product = a.mul(&a);
        let mut wide = [0u8; 64];
        let (lo, hi) = a.to_u256().mul_wide(&a.to_u256());
        wide[..32].copy_from_slice(&lo.to_le_bytes());
        wide[32..].copy_from_slice(&hi.to_le_bytes());
        assert_eq!(FeEd::from_wide_le_bytes(&wide), product);
    }

    proptest! {
        #[test]
        fn addition_commutes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let x = FeK::from_be_bytes_reduced(&a);
            let y = FeK::from_be_bytes_reduced(&b);
            prop_assert_eq!(x.add(&y), y.add(&x));
        }

        #[test]
        fn multiplication_commutes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let x = FeK::from_be_bytes_reduced(&a);
            let y = FeK::from_be_bytes_reduced(&b);
            prop_assert_eq!(x.mul(&y), y.mul(&x));
        }

        #[test]
        fn subtraction_inverts_addition(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let x = FeEd::from_be_bytes_reduced(&a);
            let y = FeEd::from_be_bytes_reduced(&b);
            prop_assert_eq!(x.add(&y).sub(&y), x);
        }

        #[test]
        fn nonzero_elements_invert(a in any::<[u8; 32]>()) {
            let x = FeK::from_be_bytes_reduced(&a);
            prop_assume!(!x.is_zero());
            prop_assert_eq!(x.mul(&x.invert().unwrap()), FeK::one());
        }
    }
}
