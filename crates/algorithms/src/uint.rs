//! 256-bit unsigned integer arithmetic
//!
//! All four moduli used by the library (the two curve field primes and the
//! two group orders) fit in 256 bits, so this fixed-width type is the whole
//! arbitrary-precision substrate. Every modular helper is written as a plain
//! bit-serial algorithm over the limbs so the arithmetic can be audited
//! without reference material.

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// A 256-bit unsigned integer as four little-endian 64-bit limbs
#[derive(Clone, Copy, Debug, Default)]
pub struct U256(pub(crate) [u64; 4]);

impl U256 {
    /// The value 0
    pub const ZERO: Self = U256([0, 0, 0, 0]);

    /// The value 1
    pub const ONE: Self = U256([1, 0, 0, 0]);

    /// Construct from little-endian 64-bit limbs
    pub const fn from_words(words: [u64; 4]) -> Self {
        U256(words)
    }

    /// Construct from a 64-character big-endian hex string
    ///
    /// Used for curve constants; panics at compile time on malformed input.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(bytes.len() == 64, "expected exactly 64 hex characters");
        let mut limbs = [0u64; 4];
        let mut i = 0;
        while i < 64 {
            let c = bytes[i];
            let digit = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => panic!("invalid hex character"),
            } as u64;
            let bit = (63 - i) * 4;
            limbs[bit / 64] |= digit << (bit % 64);
            i += 1;
        }
        U256(limbs)
    }

    /// Construct from 32 big-endian bytes
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let offset = 32 - 8 * (i + 1);
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[offset..offset + 8]);
            *limb = u64::from_be_bytes(chunk);
        }
        U256(limbs)
    }

    /// Serialize as 32 big-endian bytes
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, limb) in self.0.iter().enumerate() {
            let offset = 32 - 8 * (i + 1);
            out[offset..offset + 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Construct from 32 little-endian bytes
    pub fn from_le_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[8 * i..8 * i + 8]);
            *limb = u64::from_le_bytes(chunk);
        }
        U256(limbs)
    }

    /// Serialize as 32 little-endian bytes
    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, limb) in self.0.iter().enumerate() {
            out[8 * i..8 * i + 8].copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Construct from a small integer
    pub const fn from_u64(value: u64) -> Self {
        U256([value, 0, 0, 0])
    }

    /// Whether the value is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Whether the lowest bit is set
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Test bit `index` (0 = least significant)
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < 256);
        (self.0[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Number of significant bits
    pub fn bit_len(&self) -> usize {
        for (i, &limb) in self.0.iter().enumerate().rev() {
            if limb != 0 {
                return 64 * i + (64 - limb.leading_zeros() as usize);
            }
        }
        0
    }

    /// Addition with carry-out
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0u128;
        for i in 0..4 {
            let sum = self.0[i] as u128 + rhs.0[i] as u128 + carry;
            out[i] = sum as u64;
            carry = sum >> 64;
        }
        (U256(out), carry != 0)
    }

    /// Subtraction with borrow-out
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut borrow = 0u64;
        for i in 0..4 {
            let diff = (self.0[i] as u128)
                .wrapping_sub(rhs.0[i] as u128)
                .wrapping_sub(borrow as u128);
            out[i] = diff as u64;
            borrow = ((diff >> 127) & 1) as u64;
        }
        (U256(out), borrow != 0)
    }

    /// Addition modulo 2^256
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Subtraction modulo 2^256
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Left shift by one bit with carry-out
    fn shl1(&self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0u64;
        for i in 0..4 {
            out[i] = (self.0[i] << 1) | carry;
            carry = self.0[i] >> 63;
        }
        (U256(out), carry != 0)
    }

    /// Right shift by one bit with an optional incoming top bit
    fn shr1(&self, carry_in: bool) -> Self {
        let mut out = [0u64; 4];
        for i in 0..4 {
            out[i] = self.0[i] >> 1;
            if i < 3 {
                out[i] |= self.0[i + 1] << 63;
            }
        }
        if carry_in {
            out[3] |= 1 << 63;
        }
        U256(out)
    }

    /// Right shift by `n` bits (n < 64)
    pub fn shr(&self, n: u32) -> Self {
        debug_assert!(n < 64);
        if n == 0 {
            return *self;
        }
        let mut out = [0u64; 4];
        for i in 0..4 {
            out[i] = self.0[i] >> n;
            if i < 3 {
                out[i] |= self.0[i + 1] << (64 - n);
            }
        }
        U256(out)
    }

    /// Widening multiplication: 512-bit product as (low, high) halves
    pub fn mul_wide(&self, rhs: &Self) -> (Self, Self) {
        let mut w = [0u64; 8];
        for i in 0..4 {
            let mut carry = 0u128;
            for j in 0..4 {
                let t = w[i + j] as u128 + self.0[i] as u128 * rhs.0[j] as u128 + carry;
                w[i + j] = t as u64;
                carry = t >> 64;
            }
            w[i + 4] = carry as u64;
        }
        (
            U256([w[0], w[1], w[2], w[3]]),
            U256([w[4], w[5], w[6], w[7]]),
        )
    }

    /// Remainder modulo `m`
    ///
    /// Bit-serial reduction; works for any nonzero modulus.
    pub fn rem(&self, m: &Self) -> Self {
        debug_assert!(!m.is_zero());
        let mut r = U256::ZERO;
        for i in (0..256).rev() {
            r = r.double_mod(m);
            if self.bit(i) {
                r = r.add_mod(&U256::ONE, m);
            }
        }
        r
    }

    /// Modular addition; both operands must already be reduced
    pub fn add_mod(&self, rhs: &Self, m: &Self) -> Self {
        let (sum, carry) = self.overflowing_add(rhs);
        if carry || sum >= *m {
            sum.wrapping_sub(m)
        } else {
            sum
        }
    }

    /// Modular subtraction; both operands must already be reduced
    pub fn sub_mod(&self, rhs: &Self, m: &Self) -> Self {
        let (diff, borrow) = self.overflowing_sub(rhs);
        if borrow {
            diff.wrapping_add(m)
        } else {
            diff
        }
    }

    /// Modular doubling; the operand must already be reduced
    pub fn double_mod(&self, m: &Self) -> Self {
        let (shifted, carry) = self.shl1();
        if carry || shifted >= *m {
            shifted.wrapping_sub(m)
        } else {
            shifted
        }
    }

    /// Modular halving; the operand must be reduced and `m` odd
    fn half_mod(&self, m: &Self) -> Self {
        if self.is_odd() {
            let (sum, carry) = self.overflowing_add(m);
            sum.shr1(carry)
        } else {
            self.shr1(false)
        }
    }

    /// Modular multiplication; both operands must already be reduced
    pub fn mul_mod(&self, rhs: &Self, m: &Self) -> Self {
        let (lo, hi) = self.mul_wide(rhs);
        reduce_wide(&lo, &hi, m)
    }

    /// Modular exponentiation; the base must already be reduced
    pub fn pow_mod(&self, exp: &Self, m: &Self) -> Self {
        let mut result = U256::ONE.rem(m);
        for i in (0..exp.bit_len()).rev() {
            result = result.mul_mod(&result, m);
            if exp.bit(i) {
                result = result.mul_mod(self, m);
            }
        }
        result
    }

    /// Modular inverse via the binary extended Euclidean algorithm
    ///
    /// Requires `m` odd. Returns `None` when the value is zero.
    pub fn inv_mod(&self, m: &Self) -> Option<Self> {
        debug_assert!(m.is_odd());
        if self.is_zero() {
            return None;
        }
        let mut u = *self;
        let mut v = *m;
        let mut x1 = U256::ONE;
        let mut x2 = U256::ZERO;
        while u != U256::ONE && v != U256::ONE {
            while !u.is_odd() {
                u = u.shr1(false);
                x1 = x1.half_mod(m);
            }
            while !v.is_odd() {
                v = v.shr1(false);
                x2 = x2.half_mod(m);
            }
            if u >= v {
                u = u.wrapping_sub(&v);
                x1 = x1.sub_mod(&x2, m);
            } else {
                v = v.wrapping_sub(&u);
                x2 = x2.sub_mod(&x1, m);
            }
        }
        if u == U256::ONE {
            Some(x1)
        } else {
            Some(x2)
        }
    }
}

/// Reduce a 512-bit value `hi * 2^256 + lo` modulo `m`
///
/// Bit-serial over the full width; used for products and for folding
/// 512-bit hash outputs into a group order.
pub fn reduce_wide(lo: &U256, hi: &U256, m: &U256) -> U256 {
    let mut r = U256::ZERO;
    for half in [hi, lo] {
        for i in (0..256).rev() {
            r = r.double_mod(m);
            if half.bit(i) {
                r = r.add_mod(&U256::ONE, m);
            }
        }
    }
    r
}

impl ConstantTimeEq for U256 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl PartialEq for U256 {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for U256 {}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        for i in (0..4).rev() {
            match self.0[i].cmp(&other.0[i]) {
                core::cmp::Ordering::Equal => continue,
                ord => return ord,
            }
        }
        core::cmp::Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Zeroize for U256 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
