//! End-to-end EdDSA scenarios through the facade crate

use sigil::prelude::*;

#[test]
fn zero_seed_signs_abc() {
    let (public_key, secret_key) = Ed25519::derive_keypair(&[0u8; 32]).unwrap();

    let signature = Ed25519::sign(b"abc", &secret_key).unwrap();
    assert!(Ed25519::verify(b"abc", &signature, &public_key).is_ok());
    assert!(Ed25519::verify(b"abd", &signature, &public_key).is_err());
}

#[test]
fn zero_seed_signature_is_reproducible() {
    let (_, secret_key_a) = Ed25519::derive_keypair(&[0u8; 32]).unwrap();
    let (_, secret_key_b) = Ed25519::derive_keypair(&[0u8; 32]).unwrap();

    let first = Ed25519::sign(b"abc", &secret_key_a).unwrap();
    let second = Ed25519::sign(b"abc", &secret_key_b).unwrap();
    assert_eq!(first.0, second.0);
}

#[test]
fn signature_survives_byte_round_trip() {
    let (public_key, secret_key) = Ed25519::derive_keypair(&[9u8; 32]).unwrap();
    let message = b"round trip";

    let signature = Ed25519::sign(message, &secret_key).unwrap();
    let parsed = Ed25519Signature::from_bytes(signature.as_ref()).unwrap();
    assert!(Ed25519::verify(message, &parsed, &public_key).is_ok());

    let parsed_key = Ed25519PublicKey::from_bytes(public_key.as_ref()).unwrap();
    assert!(Ed25519::verify(message, &signature, &parsed_key).is_ok());
}

#[test]
fn single_bit_tampering_is_rejected() {
    let (public_key, secret_key) = Ed25519::derive_keypair(&[10u8; 32]).unwrap();
    let message = b"tamper target";
    let signature = Ed25519::sign(message, &secret_key).unwrap();

    let mut tampered = signature.clone();
    tampered.0[33] ^= 0x01;
    assert!(Ed25519::verify(message, &tampered, &public_key).is_err());

    let mut tampered_key = public_key.clone();
    tampered_key.0[7] ^= 0x01;
    assert!(Ed25519::verify(message, &signature, &tampered_key).is_err());
}
