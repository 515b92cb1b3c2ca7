use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sigil_api::{Error as ApiError, Signature as SignatureTrait};

use super::*;

fn test_keypair(seed: u64) -> (EcdsaK256PublicKey, EcdsaK256SecretKey) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    EcdsaK256::keypair(&mut rng).unwrap()
}

#[test]
fn sign_verify_round_trip() {
    let (public_key, secret_key) = test_keypair(1);
    let message = b"arbitrary message bytes";
    let signature = EcdsaK256::sign(message, &secret_key).unwrap();
    assert!(EcdsaK256::verify(message, &signature, &public_key).is_ok());
}

#[test]
fn random_nonce_mode_round_trip() {
    let (public_key, secret_key) = test_keypair(2);
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let message = b"random nonce mode";
    let signature = EcdsaK256::sign_with_rng(&mut rng, message, &secret_key).unwrap();
    assert!(EcdsaK256::verify(message, &signature, &public_key).is_ok());
}

#[test]
fn deterministic_signatures_repeat() {
    let (_, secret_key) = test_keypair(3);
    let message = b"same input, same output";
    let first = EcdsaK256::sign_recoverable(message, &secret_key).unwrap();
    let second = EcdsaK256::sign_recoverable(message, &secret_key).unwrap();
    assert_eq!(first.to_bytes(), second.to_bytes());
}

#[test]
fn different_messages_produce_different_signatures() {
    let (_, secret_key) = test_keypair(4);
    let a = EcdsaK256::sign(b"first", &secret_key).unwrap();
    let b = EcdsaK256::sign(b"second", &secret_key).unwrap();
    assert_ne!(a.to_bytes(), b.to_bytes());
}

#[test]
fn tampered_message_fails_verification() {
    let (public_key, secret_key) = test_keypair(5);
    let signature = EcdsaK256::sign(b"payload", &secret_key).unwrap();
    assert!(matches!(
        EcdsaK256::verify(b"paylosd", &signature, &public_key),
        Err(ApiError::SignatureMismatch { .. })
    ));
}

#[test]
fn tampered_signature_fails_verification() {
    let (public_key, secret_key) = test_keypair(6);
    let message = b"payload";
    let signature = EcdsaK256::sign(message, &secret_key).unwrap();
    let mut bytes = signature.to_bytes();
    bytes[10] ^= 0x01;
    match EcdsaK256Signature::from_bytes(&bytes) {
        // still a well-formed (r, s) pair, must fail the equation instead
        Ok(tampered) => {
            assert!(EcdsaK256::verify(message, &tampered, &public_key).is_err());
        }
        Err(_) => {}
    }
}

#[test]
fn wrong_public_key_fails_verification() {
    let (_, secret_key) = test_keypair(7);
    let (other_public_key, _) = test_keypair(8);
    let message = b"payload";
    let signature = EcdsaK256::sign(message, &secret_key).unwrap();
    assert!(EcdsaK256::verify(message, &signature, &other_public_key).is_err());
}

#[test]
fn signature_parsing_rejects_out_of_range_components() {
    // r = 0
    let mut zero_r = [0u8; 64];
    zero_r[32..].copy_from_slice(&[0x01; 32]);
    assert!(matches!(
        EcdsaK256Signature::from_bytes(&zero_r),
        Err(ApiError::InvalidRange { .. })
    ));

    // s = n (the group order itself is out of range)
    let order_be =
        hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141").unwrap();
    let mut s_is_order = [0u8; 64];
    s_is_order[..32].copy_from_slice(&[0x01; 32]);
    s_is_order[32..].copy_from_slice(&order_be);
    assert!(matches!(
        EcdsaK256Signature::from_bytes(&s_is_order),
        Err(ApiError::InvalidRange { .. })
    ));

    // wrong length
    assert!(matches!(
        EcdsaK256Signature::from_bytes(&[0u8; 63]),
        Err(ApiError::InvalidLength { .. })
    ));
}

#[test]
fn recoverable_parsing_rejects_bad_recovery_id() {
    let (_, secret_key) = test_keypair(9);
    let mut bytes = EcdsaK256::sign_recoverable(b"payload", &secret_key)
        .unwrap()
        .to_bytes();
    bytes[64] = 29;
    assert!(matches!(
        RecoverableSignature::from_bytes(&bytes),
        Err(ApiError::InvalidRecoveryId { value: 29 })
    ));
}

#[test]
fn recovery_returns_the_signing_key() {
    let (public_key, secret_key) = test_keypair(10);
    let message = b"recover me";
    let recoverable = EcdsaK256::sign_recoverable(message, &secret_key).unwrap();
    let recovered = EcdsaK256::recover(message, &recoverable).unwrap();
    assert_eq!(recovered, public_key);
}

#[test]
fn recovery_survives_serialization() {
    let (public_key, secret_key) = test_keypair(11);
    let message = b"recover me too";
    let bytes = EcdsaK256::sign_recoverable(message, &secret_key)
        .unwrap()
        .to_bytes();
    let parsed = RecoverableSignature::from_bytes(&bytes).unwrap();
    assert_eq!(EcdsaK256::recover(message, &parsed).unwrap(), public_key);
}

#[test]
fn public_key_round_trips_uncompressed() {
    let (public_key, _) = test_keypair(12);
    let encoded = public_key.serialize_uncompressed();
    assert_eq!(
        EcdsaK256PublicKey::deserialize_uncompressed(&encoded).unwrap(),
        public_key
    );
}

#[test]
fn secret_key_round_trips_bytes() {
    let (_, secret_key) = test_keypair(13);
    let restored = EcdsaK256SecretKey::from_bytes(&secret_key.to_bytes()).unwrap();
    assert_eq!(restored.to_bytes(), secret_key.to_bytes());
    assert_eq!(restored.public_key(), secret_key.public_key());
}

#[test]
fn secret_key_rejects_zero_bytes() {
    assert!(EcdsaK256SecretKey::from_bytes(&[0u8; 32]).is_err());
}

#[test]
fn unit_key_address_matches_known_vector() {
    // The public key of d = 1 is the generator itself; its address is a
    // widely published value.
    let mut one = [0u8; 32];
    one[31] = 1;
    let secret_key = EcdsaK256SecretKey::from_bytes(&one).unwrap();
    assert_eq!(
        secret_key.public_key().address().to_hex(),
        "7e5f4552091a69125d5dfcb7b8c2659029395bdf"
    );
}
