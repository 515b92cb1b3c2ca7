//! Signature engines for the sigil library
//!
//! Two independent schemes over two curve families: ECDSA on secp256k1
//! (with public-key recovery and address derivation) and EdDSA on
//! Edwards25519 (deterministic signatures from a seed).

pub mod ecdsa;
pub mod eddsa;

pub use ecdsa::{
    Address, EcdsaK256, EcdsaK256PublicKey, EcdsaK256SecretKey, EcdsaK256Signature,
    RecoverableSignature, RecoveryId,
};
pub use eddsa::{Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};
