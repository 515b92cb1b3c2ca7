//! ECDSA over the secp256k1 curve
//!
//! Signing hashes the message with SHA-256 and follows the standard
//! (r, s) construction. Two nonce modes are provided: deterministic
//! RFC 6979 derivation (the default, used by the `Signature` trait impl)
//! and a uniformly random nonce drawn from a caller RNG. Both run inside a
//! bounded retry loop that discards a nonce when it would produce r = 0 or
//! s = 0.
//!
//! Public-key recovery and address derivation live in the `recovery`
//! submodule.

use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use sigil_algorithms::ec::secp256k1 as ec;
use sigil_algorithms::ec::secp256k1::Secp256k1;
use sigil_api::{
    CurveGroup, Error as ApiError, Result as ApiResult, Signature as SignatureTrait,
};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

mod recovery;
mod rfc6979;

pub use recovery::{Address, RecoverableSignature, RecoveryId};

use rfc6979::NonceGenerator;

/// ECDSA signature scheme using the secp256k1 curve
pub struct EcdsaK256;

/// Retry cap for the nonce loop; hitting it means the nonce source is
/// broken, not that the caller was unlucky.
const MAX_SIGNING_ATTEMPTS: usize = 128;

/// secp256k1 public key: a non-identity curve point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaK256PublicKey(ec::Point);

/// secp256k1 secret key: a scalar d with 1 <= d < n
///
/// Keeps both the scalar and its byte form; both are wiped on drop.
#[derive(Clone)]
pub struct EcdsaK256SecretKey {
    scalar: ec::Scalar,
    bytes: [u8; ec::K256_SCALAR_SIZE],
}

/// ECDSA signature components (r, s), both in (0, n)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaK256Signature {
    r: ec::Scalar,
    s: ec::Scalar,
}

impl EcdsaK256PublicKey {
    /// Wrap a curve point, rejecting the identity.
    pub fn from_point(point: ec::Point) -> ApiResult<Self> {
        if point.is_identity() {
            return Err(ApiError::InvalidKey {
                context: "ECDSA-K256 public key",
                reason: "the identity point is not a valid public key",
            });
        }
        Ok(EcdsaK256PublicKey(point))
    }

    /// The underlying curve point.
    pub fn point(&self) -> &ec::Point {
        &self.0
    }

    /// Serialize in uncompressed format: 0x04 || x || y.
    pub fn serialize_uncompressed(&self) -> [u8; ec::K256_POINT_UNCOMPRESSED_SIZE] {
        self.0.serialize_uncompressed()
    }

    /// Deserialize from uncompressed format.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> ApiResult<Self> {
        let point = ec::Point::deserialize_uncompressed(bytes).map_err(ApiError::from)?;
        Self::from_point(point)
    }

    /// The raw big-endian coordinate pair x || y (64 bytes).
    pub fn coordinate_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        let (x, y) = self
            .0
            .coordinates()
            .expect("a public key is never the identity");
        out[..32].copy_from_slice(&x.to_be_bytes());
        out[32..].copy_from_slice(&y.to_be_bytes());
        out
    }
}

impl EcdsaK256SecretKey {
    /// Create a secret key from 32 big-endian bytes.
    ///
    /// The value must lie in [1, n).
    pub fn from_bytes(bytes: &[u8; ec::K256_SCALAR_SIZE]) -> ApiResult<Self> {
        let scalar = ec::Scalar::from_repr(bytes).map_err(|_| ApiError::InvalidKey {
            context: "ECDSA-K256 secret key",
            reason: "scalar not below the group order",
        })?;
        if scalar.is_zero() {
            return Err(ApiError::InvalidKey {
                context: "ECDSA-K256 secret key",
                reason: "scalar is zero",
            });
        }
        Ok(EcdsaK256SecretKey {
            scalar,
            bytes: *bytes,
        })
    }

    fn from_scalar(scalar: ec::Scalar) -> Self {
        EcdsaK256SecretKey {
            bytes: scalar.to_bytes(),
            scalar,
        }
    }

    /// The secret scalar.
    pub(crate) fn scalar(&self) -> &ec::Scalar {
        &self.scalar
    }

    /// Serialize as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; ec::K256_SCALAR_SIZE] {
        self.bytes
    }

    /// The matching public key d*G.
    pub fn public_key(&self) -> EcdsaK256PublicKey {
        EcdsaK256PublicKey(ec::scalar_mult_base_g(&self.scalar))
    }
}

impl Zeroize for EcdsaK256SecretKey {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.scalar.zeroize();
    }
}

impl Drop for EcdsaK256SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl EcdsaK256Signature {
    fn from_components(r: ec::Scalar, s: ec::Scalar) -> Self {
        EcdsaK256Signature { r, s }
    }

    /// The r component.
    pub fn r(&self) -> &ec::Scalar {
        &self.r
    }

    /// The s component.
    pub fn s(&self) -> &ec::Scalar {
        &self.s
    }

    /// Serialize as r || s, each 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r.to_bytes());
        out[32..].copy_from_slice(&self.s.to_bytes());
        out
    }

    /// Parse from r || s.
    ///
    /// Rejects components outside (0, n) before any curve arithmetic.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != 64 {
            return Err(ApiError::InvalidLength {
                context: "ECDSA-K256 signature",
                expected: 64,
                actual: bytes.len(),
            });
        }
        let mut r_bytes = [0u8; 32];
        let mut s_bytes = [0u8; 32];
        r_bytes.copy_from_slice(&bytes[..32]);
        s_bytes.copy_from_slice(&bytes[32..]);

        let r = ec::Scalar::from_repr(&r_bytes).map_err(ApiError::from)?;
        let s = ec::Scalar::from_repr(&s_bytes).map_err(ApiError::from)?;
        if r.is_zero() || s.is_zero() {
            return Err(ApiError::InvalidRange {
                context: "ECDSA-K256 signature",
            });
        }
        Ok(EcdsaK256Signature { r, s })
    }
}

impl SignatureTrait for EcdsaK256 {
    type PublicKey = EcdsaK256PublicKey;
    type SecretKey = EcdsaK256SecretKey;
    type SignatureData = EcdsaK256Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDSA-K256"
    }

    /// Generate a key pair: d by rejection sampling in [1, n), Q = d*G.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (sk_scalar, pk_point) = ec::generate_keypair(rng).map_err(ApiError::from)?;
        let secret_key = EcdsaK256SecretKey::from_scalar(sk_scalar);
        let public_key = EcdsaK256PublicKey::from_point(pk_point)?;
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Sign with the deterministic RFC 6979 nonce.
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        Self::sign_prehashed(&message_digest(message), secret_key)
    }

    /// Verify a signature.
    ///
    /// Algorithm: reject r, s outside (0, n) - enforced when the signature
    /// value was constructed - then check u1*G + u2*Q against r, where
    /// w = s⁻¹, u1 = z*w, u2 = r*w.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        Self::verify_prehashed(&message_digest(message), signature, public_key)
    }
}

impl EcdsaK256 {
    /// Sign a precomputed 32-byte message digest deterministically.
    pub fn sign_prehashed(
        digest: &[u8; 32],
        secret_key: &EcdsaK256SecretKey,
    ) -> ApiResult<EcdsaK256Signature> {
        Self::sign_recoverable_prehashed(digest, secret_key)
            .map(|recoverable| recoverable.into_signature())
    }

    /// Sign, also returning the recovery id derived from R's y-parity.
    pub fn sign_recoverable(
        message: &[u8],
        secret_key: &EcdsaK256SecretKey,
    ) -> ApiResult<RecoverableSignature> {
        Self::sign_recoverable_prehashed(&message_digest(message), secret_key)
    }

    /// Recoverable signing over a precomputed digest.
    pub fn sign_recoverable_prehashed(
        digest: &[u8; 32],
        secret_key: &EcdsaK256SecretKey,
    ) -> ApiResult<RecoverableSignature> {
        let z = ec::Scalar::reduce_from_be_bytes(digest);
        let mut generator = NonceGenerator::new(&secret_key.bytes, digest);
        let (r, s, recovery_id) = sign_loop(&z, secret_key, || {
            candidate_to_scalar(generator.next_candidate())
        })?;
        Ok(RecoverableSignature::new(
            EcdsaK256Signature::from_components(r, s),
            recovery_id,
        ))
    }

    /// Sign with a uniformly random nonce from the caller's RNG.
    pub fn sign_with_rng<R: CryptoRng + RngCore>(
        rng: &mut R,
        message: &[u8],
        secret_key: &EcdsaK256SecretKey,
    ) -> ApiResult<EcdsaK256Signature> {
        let digest = message_digest(message);
        let z = ec::Scalar::reduce_from_be_bytes(&digest);
        let (r, s, _) = sign_loop(&z, secret_key, || {
            let mut candidate = [0u8; 32];
            rng.fill_bytes(&mut candidate);
            candidate_to_scalar(candidate)
        })?;
        Ok(EcdsaK256Signature::from_components(r, s))
    }

    /// Verify against a precomputed 32-byte message digest.
    pub fn verify_prehashed(
        digest: &[u8; 32],
        signature: &EcdsaK256Signature,
        public_key: &EcdsaK256PublicKey,
    ) -> ApiResult<()> {
        let z = ec::Scalar::reduce_from_be_bytes(digest);
        let w = signature.s.invert().map_err(ApiError::from)?;
        let u1 = z.mul(&w);
        let u2 = signature.r.mul(&w);

        let point = Secp256k1::linear_combination(&[
            (u1, ec::base_point_g()),
            (u2, public_key.0.clone()),
        ]);
        let (x, _) = point.coordinates().ok_or(ApiError::SignatureMismatch {
            context: "ECDSA-K256 verify",
        })?;

        let candidate = ec::Scalar::reduce_from_u256(x.to_u256());
        if bool::from(candidate.to_bytes().ct_eq(&signature.r.to_bytes())) {
            Ok(())
        } else {
            Err(ApiError::SignatureMismatch {
                context: "ECDSA-K256 verify",
            })
        }
    }
}

/// SHA-256 message digest
pub(crate) fn message_digest(message: &[u8]) -> [u8; 32] {
    Sha256::digest(message).into()
}

fn candidate_to_scalar(candidate: [u8; 32]) -> Option<ec::Scalar> {
    match ec::Scalar::from_repr(&candidate) {
        Ok(k) if !k.is_zero() => Some(k),
        _ => None,
    }
}

/// Shared signing loop over a nonce source.
///
/// Steps per attempt: R = k*G; r = R.x mod n, retry on 0;
/// s = k⁻¹(z + r*d) mod n, retry on 0. The recovery id records the
/// parity of R.y.
fn sign_loop(
    z: &ec::Scalar,
    secret_key: &EcdsaK256SecretKey,
    mut next_nonce: impl FnMut() -> Option<ec::Scalar>,
) -> ApiResult<(ec::Scalar, ec::Scalar, RecoveryId)> {
    for _ in 0..MAX_SIGNING_ATTEMPTS {
        let k = match next_nonce() {
            Some(k) => k,
            None => continue,
        };

        let r_point = ec::scalar_mult_base_g(&k);
        let (x, y) = match r_point.coordinates() {
            Some((x, y)) => (*x, *y),
            None => continue,
        };

        let r = ec::Scalar::reduce_from_u256(x.to_u256());
        if r.is_zero() {
            continue;
        }
        let recovery_id = RecoveryId::from_y_parity(y.is_odd());

        let k_inv = k.invert().map_err(ApiError::from)?;
        let s = k_inv.mul(&z.add(&r.mul(secret_key.scalar())));
        if s.is_zero() {
            continue;
        }

        return Ok((r, s, recovery_id));
    }
    Err(ApiError::NonceExhausted {
        context: "ECDSA-K256 sign",
    })
}

#[cfg(test)]
mod tests;
