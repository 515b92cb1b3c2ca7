//! EdDSA over Edwards25519
//!
//! Deterministic signatures: the key pair is derived from a 32-byte seed
//! through a single SHA-512 expansion, and every signing step is a pure
//! function of (seed, message), so there is no retry loop anywhere.

use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use sigil_algorithms::ec::edwards25519 as curve;
use sigil_algorithms::ec::edwards25519::Edwards25519;
use sigil_api::{
    CurveGroup, Error as ApiError, Result as ApiResult, Signature as SignatureTrait,
    SignatureDerive,
};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Size of an encoded public key in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of a secret seed in bytes
pub const ED25519_SECRET_KEY_SIZE: usize = 32;

/// Size of a signature (R || S) in bytes
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Ed25519 signature scheme
pub struct Ed25519;

/// Ed25519 public key: a compressed curve point (32 bytes)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ed25519PublicKey(pub [u8; ED25519_PUBLIC_KEY_SIZE]);

/// Ed25519 expanded secret key
#[derive(Clone)]
pub struct Ed25519SecretKey {
    /// The original 32-byte seed
    seed: [u8; ED25519_SECRET_KEY_SIZE],
    /// The SHA-512 expansion: clamped scalar half plus nonce prefix half
    expanded: [u8; 64],
}

/// Ed25519 signature: encode(R) || S (64 bytes)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ed25519Signature(pub [u8; ED25519_SIGNATURE_SIZE]);

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Ed25519SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.seed
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Zeroize for Ed25519SecretKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.expanded.zeroize();
    }
}

impl Drop for Ed25519SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Ed25519PublicKey {
    /// Parse a public key from bytes, checking the length only.
    ///
    /// Point validity is checked at verification time, where a decode
    /// failure rejects the signature.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != ED25519_PUBLIC_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "Ed25519 public key",
                expected: ED25519_PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; ED25519_PUBLIC_KEY_SIZE];
        out.copy_from_slice(bytes);
        Ok(Ed25519PublicKey(out))
    }
}

impl Ed25519Signature {
    /// Parse a signature from bytes; must be exactly 64 bytes.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != ED25519_SIGNATURE_SIZE {
            return Err(ApiError::InvalidLength {
                context: "Ed25519 signature",
                expected: ED25519_SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; ED25519_SIGNATURE_SIZE];
        out.copy_from_slice(bytes);
        Ok(Ed25519Signature(out))
    }
}

impl SignatureTrait for Ed25519 {
    type PublicKey = Ed25519PublicKey;
    type SecretKey = Ed25519SecretKey;
    type SignatureData = Ed25519Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "Ed25519"
    }

    /// Generate a key pair from a random 32-byte seed.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut seed = [0u8; ED25519_SECRET_KEY_SIZE];
        rng.fill_bytes(&mut seed);
        Self::derive_keypair(&seed)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Sign a message.
    ///
    /// r = H(prefix || M) mod L; R = r*B;
    /// k = H(encode(R) || A || M) mod L; S = (r + k*a) mod L.
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        let a = secret_scalar(&secret_key.expanded);
        let prefix = &secret_key.expanded[32..64];

        let r = curve::Scalar::from_wide_le_bytes(&wide_digest(&[prefix, message]));
        let r_encoded = Edwards25519::scalar_mul_base(&r).encode();

        let public_key = derive_public_key_bytes(&secret_key.expanded);
        let k =
            curve::Scalar::from_wide_le_bytes(&wide_digest(&[&r_encoded, &public_key, message]));
        let s = r.add(&k.mul(&a));

        let mut signature = [0u8; ED25519_SIGNATURE_SIZE];
        signature[..32].copy_from_slice(&r_encoded);
        signature[32..].copy_from_slice(&s.to_le_bytes());
        Ok(Ed25519Signature(signature))
    }

    /// Verify a signature by checking S*B = R + k*A with
    /// k = H(R || A || M) mod L.
    ///
    /// Rejections, in order and all before any curve arithmetic on the
    /// offending value: non-canonical S (not below L), undecodable R,
    /// undecodable public key.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        let r_bytes: [u8; 32] = signature.0[..32]
            .try_into()
            .expect("signature layout is fixed");
        let s_bytes: [u8; 32] = signature.0[32..]
            .try_into()
            .expect("signature layout is fixed");

        let s = curve::Scalar::from_le_bytes(&s_bytes).map_err(|_| ApiError::InvalidRange {
            context: "Ed25519 signature S component",
        })?;
        let r_point =
            curve::EdwardsPoint::decode(&r_bytes).map_err(|_| ApiError::MalformedEncoding {
                context: "Ed25519 verify",
                reason: "signature R is not a valid point encoding",
            })?;
        let a_point =
            curve::EdwardsPoint::decode(&public_key.0).map_err(|_| ApiError::MalformedEncoding {
                context: "Ed25519 verify",
                reason: "public key is not a valid point encoding",
            })?;

        let k = curve::Scalar::from_wide_le_bytes(&wide_digest(&[
            &r_bytes,
            &public_key.0,
            message,
        ]));

        let lhs = Edwards25519::scalar_mul_base(&s);
        let rhs = Edwards25519::add(&r_point, &Edwards25519::scalar_mul(&k, &a_point));

        if bool::from(lhs.encode().ct_eq(&rhs.encode())) {
            Ok(())
        } else {
            Err(ApiError::SignatureMismatch {
                context: "Ed25519 verify",
            })
        }
    }
}

impl SignatureDerive for Ed25519 {
    const SEED_SIZE: usize = ED25519_SECRET_KEY_SIZE;

    /// Derive a key pair from a 32-byte seed.
    ///
    /// seed -> SHA-512 -> (a_raw, prefix); a_raw is clamped into the
    /// cofactor-compatible scalar a, and A = encode(a*B).
    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        if seed.len() != Self::SEED_SIZE {
            return Err(ApiError::InvalidLength {
                context: "Ed25519 seed",
                expected: Self::SEED_SIZE,
                actual: seed.len(),
            });
        }
        let mut seed_bytes = [0u8; ED25519_SECRET_KEY_SIZE];
        seed_bytes.copy_from_slice(seed);

        let expanded = expand_seed(&seed_bytes);
        let public_key = derive_public_key_bytes(&expanded);
        Ok((
            Ed25519PublicKey(public_key),
            Ed25519SecretKey {
                seed: seed_bytes,
                expanded,
            },
        ))
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        Ok(Ed25519PublicKey(derive_public_key_bytes(
            &secret_key.expanded,
        )))
    }
}

/// Expand a seed with SHA-512 and clamp the scalar half.
fn expand_seed(seed: &[u8; ED25519_SECRET_KEY_SIZE]) -> [u8; 64] {
    let mut expanded = [0u8; 64];
    expanded.copy_from_slice(&Sha512::digest(seed));
    let mut scalar_half = [0u8; 32];
    scalar_half.copy_from_slice(&expanded[..32]);
    curve::clamp_scalar_bytes(&mut scalar_half);
    expanded[..32].copy_from_slice(&scalar_half);
    expanded
}

/// The clamped secret scalar a from the expanded key.
fn secret_scalar(expanded: &[u8; 64]) -> curve::Scalar {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&expanded[..32]);
    curve::Scalar::reduce_from_le_bytes(&bytes)
}

/// A = encode(a*B) from the expanded key.
fn derive_public_key_bytes(expanded: &[u8; 64]) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
    Edwards25519::scalar_mul_base(&secret_scalar(expanded)).encode()
}

/// SHA-512 over concatenated parts.
fn wide_digest(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());
    out
}

#[cfg(test)]
mod tests;
