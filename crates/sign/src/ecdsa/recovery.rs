//! Public-key recovery and address derivation
//!
//! A recoverable signature carries (r, s) plus a recovery id v in {27, 28}
//! encoding which y-parity the ephemeral point R had, which is enough to
//! reconstruct the signer's public key from the signature alone. Addresses
//! are the trailing 20 bytes of the Keccak-256 hash of the public key's
//! coordinate pair.

use core::fmt;

use sha3::{Digest, Keccak256};
use sigil_algorithms::ec::secp256k1 as ec;
use sigil_algorithms::ec::secp256k1::Secp256k1;
use sigil_api::{CurveGroup, Error as ApiError, Result as ApiResult};

use super::{message_digest, EcdsaK256, EcdsaK256PublicKey, EcdsaK256Signature};

/// Recovery id in legacy form: 27 for an even R.y, 28 for odd
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Validate a recovery id byte.
    pub fn new(value: u8) -> ApiResult<Self> {
        if value == 27 || value == 28 {
            Ok(RecoveryId(value))
        } else {
            Err(ApiError::InvalidRecoveryId { value })
        }
    }

    /// Build from the parity of R.y.
    pub fn from_y_parity(y_is_odd: bool) -> Self {
        RecoveryId(27 + y_is_odd as u8)
    }

    /// Whether the encoded R.y was odd.
    pub fn is_y_odd(&self) -> bool {
        self.0 == 28
    }

    /// The raw id byte.
    pub fn to_byte(self) -> u8 {
        self.0
    }
}

/// An ECDSA signature with its recovery id: (r, s, v)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    signature: EcdsaK256Signature,
    recovery_id: RecoveryId,
}

impl RecoverableSignature {
    pub(crate) fn new(signature: EcdsaK256Signature, recovery_id: RecoveryId) -> Self {
        RecoverableSignature {
            signature,
            recovery_id,
        }
    }

    /// The (r, s) components.
    pub fn signature(&self) -> &EcdsaK256Signature {
        &self.signature
    }

    /// The recovery id.
    pub fn recovery_id(&self) -> RecoveryId {
        self.recovery_id
    }

    pub(crate) fn into_signature(self) -> EcdsaK256Signature {
        self.signature
    }

    /// Serialize as r || s || v (65 bytes).
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&self.signature.to_bytes());
        out[64] = self.recovery_id.to_byte();
        out
    }

    /// Parse from r || s || v.
    ///
    /// All range checks happen here, before any curve arithmetic.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != 65 {
            return Err(ApiError::InvalidLength {
                context: "ECDSA-K256 recoverable signature",
                expected: 65,
                actual: bytes.len(),
            });
        }
        let signature = EcdsaK256Signature::from_bytes(&bytes[..64])?;
        let recovery_id = RecoveryId::new(bytes[64])?;
        Ok(RecoverableSignature {
            signature,
            recovery_id,
        })
    }
}

impl EcdsaK256 {
    /// Recover the signer's public key from a message and a recoverable
    /// signature.
    pub fn recover(
        message: &[u8],
        signature: &RecoverableSignature,
    ) -> ApiResult<EcdsaK256PublicKey> {
        Self::recover_prehashed(&message_digest(message), signature)
    }

    /// Recovery over a precomputed 32-byte digest.
    ///
    /// Reconstructs R from r and the y-parity in v, then computes
    /// Q = r⁻¹(s*R - z*G) as the linear combination
    /// (-z*r⁻¹)*G + (s*r⁻¹)*R.
    pub fn recover_prehashed(
        digest: &[u8; 32],
        signature: &RecoverableSignature,
    ) -> ApiResult<EcdsaK256PublicKey> {
        let r = signature.signature().r();
        let s = signature.signature().s();

        // r < n < p, so r is always a valid x-coordinate candidate
        let x = ec::FieldElement::new(r.to_u256()).map_err(ApiError::from)?;
        let r_point =
            ec::Point::lift_x(x, signature.recovery_id().is_y_odd()).map_err(ApiError::from)?;

        let z = ec::Scalar::reduce_from_be_bytes(digest);
        let r_inv = r.invert().map_err(ApiError::from)?;
        let u1 = z.mul(&r_inv).negate();
        let u2 = s.mul(&r_inv);

        let q = Secp256k1::linear_combination(&[(u1, ec::base_point_g()), (u2, r_point)]);
        EcdsaK256PublicKey::from_point(q)
    }
}

/// A 20-byte address derived from a public key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Address([u8; 20]);

impl Address {
    /// The raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase hex rendering without a prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl EcdsaK256PublicKey {
    /// Derive the address: Keccak-256 over the 64-byte x || y pair, last
    /// 20 bytes.
    pub fn address(&self) -> Address {
        let hash = Keccak256::digest(self.coordinate_bytes());
        let mut out = [0u8; 20];
        out.copy_from_slice(&hash[12..]);
        Address(out)
    }
}
