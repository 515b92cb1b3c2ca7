//! Shared constants for secp256k1 operations

use crate::uint::U256;

/// Size of a secp256k1 scalar in bytes
pub const K256_SCALAR_SIZE: usize = 32;

/// Size of a secp256k1 field element in bytes
pub const K256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed secp256k1 point: format byte (0x04) + x + y
pub const K256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * K256_FIELD_ELEMENT_SIZE;

/// The field prime p = 2^256 - 2^32 - 977
pub(crate) const FIELD_MODULUS: U256 =
    U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

/// The group order n
pub(crate) const GROUP_ORDER: U256 =
    U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// x-coordinate of the base point G
pub(crate) const GENERATOR_X: U256 =
    U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");

/// y-coordinate of the base point G
pub(crate) const GENERATOR_Y: U256 =
    U256::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

/// The curve constant b in y^2 = x^3 + b
pub(crate) const CURVE_B: u64 = 7;
