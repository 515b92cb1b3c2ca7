//! Shared constants for Edwards25519 operations

use crate::uint::U256;

/// Size of an encoded Edwards25519 point in bytes
pub const ED25519_POINT_SIZE: usize = 32;

/// Size of an Edwards25519 scalar in bytes
pub const ED25519_SCALAR_SIZE: usize = 32;

/// The field prime p = 2^255 - 19
pub(crate) const FIELD_MODULUS: U256 =
    U256::from_be_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");

/// The prime group order L = 2^252 + 27742317777372353535851937790883648493
pub(crate) const GROUP_ORDER: U256 =
    U256::from_be_hex("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed");

/// The curve constant d = -121665/121666
pub(crate) const CURVE_D: U256 =
    U256::from_be_hex("52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3");

/// x-coordinate of the base point B
pub(crate) const BASE_X: U256 =
    U256::from_be_hex("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a");

/// y-coordinate of the base point B
pub(crate) const BASE_Y: U256 =
    U256::from_be_hex("6666666666666666666666666666666666666666666666666666666666666658");
