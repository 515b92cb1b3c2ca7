//! # sigil
//!
//! A transparent, auditable implementation of two elliptic-curve signature
//! schemes: ECDSA over secp256k1 (including public-key recovery and address
//! derivation) and EdDSA over Edwards25519 (deterministic signatures).
//!
//! The arithmetic is written from scratch on purpose - field elements,
//! curve points and scalar multiplication are all plain, readable Rust -
//! so the library is a reference for the signature math rather than a
//! hardened production dependency. The hash functions and the random source
//! are external collaborators.
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from the member
//! crates:
//!
//! - [`sigil-api`]: trait definitions and the error type
//! - [`sigil-algorithms`]: field arithmetic and the two curve groups
//! - [`sigil-sign`]: the ECDSA and EdDSA engines
//!
//! ## Example
//!
//! ```
//! use sigil::prelude::*;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> sigil::api::Result<()> {
//! let mut rng = OsRng;
//! let (public_key, secret_key) = EcdsaK256::keypair(&mut rng)?;
//!
//! let message = b"attest to this";
//! let signature = EcdsaK256::sign(message, &secret_key)?;
//! EcdsaK256::verify(message, &signature, &public_key)?;
//! # Ok(())
//! # }
//! ```

pub use sigil_algorithms as algorithms;
pub use sigil_api as api;
pub use sigil_sign as sign;

/// Common imports for sigil users
pub mod prelude {
    pub use crate::api::{CurveGroup, Error, Result, Signature, SignatureDerive};
    pub use crate::sign::{
        Address, EcdsaK256, EcdsaK256PublicKey, EcdsaK256SecretKey, EcdsaK256Signature,
        Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature, RecoverableSignature,
        RecoveryId,
    };
}
