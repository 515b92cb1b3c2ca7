use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sigil_api::{Error as ApiError, Signature as SignatureTrait, SignatureDerive};

use super::*;

fn derived_keypair(seed_byte: u8) -> (Ed25519PublicKey, Ed25519SecretKey) {
    Ed25519::derive_keypair(&[seed_byte; 32]).unwrap()
}

#[test]
fn keypair_generation_applies_clamping() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let (public_key, secret_key) = Ed25519::keypair(&mut rng).unwrap();
    assert_eq!(public_key.0.len(), ED25519_PUBLIC_KEY_SIZE);
    assert_eq!(secret_key.expanded[0] & 7, 0, "low 3 bits must be cleared");
    assert_eq!(secret_key.expanded[31] & 128, 0, "bit 255 must be cleared");
    assert_eq!(secret_key.expanded[31] & 64, 64, "bit 254 must be set");
}

#[test]
fn derivation_is_deterministic() {
    let (pk_a, _) = derived_keypair(5);
    let (pk_b, _) = derived_keypair(5);
    assert_eq!(pk_a, pk_b);

    let (pk_c, _) = derived_keypair(6);
    assert_ne!(pk_a, pk_c);
}

#[test]
fn derive_keypair_rejects_wrong_seed_length() {
    assert!(matches!(
        Ed25519::derive_keypair(&[0u8; 31]),
        Err(ApiError::InvalidLength { .. })
    ));
}

#[test]
fn derived_public_key_matches_keypair() {
    let (public_key, secret_key) = derived_keypair(7);
    assert_eq!(Ed25519::derive_public_key(&secret_key).unwrap(), public_key);
}

#[test]
fn sign_verify_round_trip() {
    let (public_key, secret_key) = derived_keypair(8);
    let message = b"Hello, Ed25519!";
    let signature = Ed25519::sign(message, &secret_key).unwrap();
    assert!(Ed25519::verify(message, &signature, &public_key).is_ok());
}

#[test]
fn signatures_are_deterministic() {
    let (_, secret_key) = derived_keypair(9);
    let message = b"deterministic";
    let first = Ed25519::sign(message, &secret_key).unwrap();
    let second = Ed25519::sign(message, &secret_key).unwrap();
    assert_eq!(first.0, second.0);
}

#[test]
fn empty_message_signs_and_verifies() {
    let (public_key, secret_key) = derived_keypair(10);
    let signature = Ed25519::sign(b"", &secret_key).unwrap();
    assert!(Ed25519::verify(b"", &signature, &public_key).is_ok());
}

#[test]
fn tampered_message_fails_verification() {
    let (public_key, secret_key) = derived_keypair(11);
    let signature = Ed25519::sign(b"abc", &secret_key).unwrap();
    assert!(matches!(
        Ed25519::verify(b"abd", &signature, &public_key),
        Err(ApiError::SignatureMismatch { .. })
    ));
}

#[test]
fn tampered_signature_fails_verification() {
    let (public_key, secret_key) = derived_keypair(12);
    let message = b"malleability check";
    let signature = Ed25519::sign(message, &secret_key).unwrap();

    let mut bent_s = signature.clone();
    bent_s.0[32] ^= 0x01;
    assert!(Ed25519::verify(message, &bent_s, &public_key).is_err());

    let mut bent_r = signature;
    bent_r.0[0] ^= 0x01;
    assert!(Ed25519::verify(message, &bent_r, &public_key).is_err());
}

#[test]
fn wrong_public_key_fails_verification() {
    let (_, secret_key) = derived_keypair(13);
    let (other_public_key, _) = derived_keypair(14);
    let message = b"wrong key";
    let signature = Ed25519::sign(message, &secret_key).unwrap();
    assert!(Ed25519::verify(message, &signature, &other_public_key).is_err());
}

#[test]
fn non_canonical_s_is_rejected() {
    let (public_key, secret_key) = derived_keypair(15);
    let message = b"canonical only";
    let mut signature = Ed25519::sign(message, &secret_key).unwrap();
    // Force S far above L
    signature.0[63] = 0xff;
    assert!(matches!(
        Ed25519::verify(message, &signature, &public_key),
        Err(ApiError::InvalidRange { .. })
    ));
}

#[test]
fn signature_parsing_enforces_length() {
    assert!(Ed25519Signature::from_bytes(&[0u8; 64]).is_ok());
    assert!(matches!(
        Ed25519Signature::from_bytes(&[0u8; 65]),
        Err(ApiError::InvalidLength { .. })
    ));
}

#[test]
fn garbage_signature_fails_without_panicking() {
    let (public_key, _) = derived_keypair(16);
    let garbage = Ed25519Signature([0xa5u8; 64]);
    assert!(Ed25519::verify(b"anything", &garbage, &public_key).is_err());
}
