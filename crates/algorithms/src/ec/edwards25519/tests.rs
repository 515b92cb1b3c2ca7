use super::constants::GROUP_ORDER;
use super::*;
use crate::uint::U256;

fn scalar_bytes(k: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&k.to_le_bytes());
    bytes
}

#[test]
fn base_point_satisfies_curve_equation() {
    assert!(EdwardsPoint::base_point().is_on_curve());
}

#[test]
fn identity_is_neutral() {
    let b = EdwardsPoint::base_point();
    assert_eq!(b.add(&EdwardsPoint::identity()), b);
    assert_eq!(EdwardsPoint::identity().add(&b), b);
    assert!(EdwardsPoint::identity().is_identity());
}

#[test]
fn adding_negation_gives_identity() {
    let b = EdwardsPoint::base_point();
    assert!(b.add(&b.negate()).is_identity());
}

#[test]
fn doubling_stays_on_curve() {
    let b2 = EdwardsPoint::base_point().double();
    assert!(b2.is_on_curve());
    assert_ne!(b2, EdwardsPoint::base_point());
}

#[test]
fn scalar_one_is_the_point_itself() {
    let b = EdwardsPoint::base_point();
    assert_eq!(b.scalar_mul(&scalar_bytes(1)), b);
}

#[test]
fn scalar_two_matches_doubling() {
    let b = EdwardsPoint::base_point();
    assert_eq!(b.scalar_mul(&scalar_bytes(2)), b.double());
}

#[test]
fn scalar_multiplication_distributes() {
    let b = EdwardsPoint::base_point();
    let lhs = b.scalar_mul(&scalar_bytes(11)).add(&b.scalar_mul(&scalar_bytes(6)));
    assert_eq!(lhs, b.scalar_mul(&scalar_bytes(17)));
}

#[test]
fn group_order_annihilates_the_base_point() {
    let b = EdwardsPoint::base_point();
    assert!(b.scalar_mul(&GROUP_ORDER.to_le_bytes()).is_identity());
}

#[test]
fn order_minus_one_negates_the_base_point() {
    let b = EdwardsPoint::base_point();
    let l_minus_1 = GROUP_ORDER.wrapping_sub(&U256::ONE);
    assert_eq!(b.scalar_mul(&l_minus_1.to_le_bytes()), b.negate());
}

#[test]
fn encode_decode_round_trip() {
    let b = EdwardsPoint::base_point();
    for point in [
        EdwardsPoint::identity(),
        b.clone(),
        b.scalar_mul(&scalar_bytes(5)),
        b.negate(),
    ] {
        let encoded = point.encode();
        assert_eq!(EdwardsPoint::decode(&encoded).unwrap(), point);
    }
}

#[test]
fn decode_rejects_out_of_field_values() {
    // p itself, with the sign bit clear, is not a reduced coordinate
    let encoding = super::constants::FIELD_MODULUS.to_le_bytes();
    assert!(EdwardsPoint::decode(&encoding).is_err());
}

#[test]
fn decode_rejects_non_points() {
    // roughly half of all x values have no matching y; scan a few
    let mut rejected = 0;
    for x in 2u64..20 {
        if EdwardsPoint::decode(&scalar_bytes(x)).is_err() {
            rejected += 1;
        }
    }
    assert!(rejected > 0, "expected at least one non-decodable x value");
}

#[test]
fn clamping_fixes_the_required_bits() {
    let mut bytes = [0xffu8; 32];
    clamp_scalar_bytes(&mut bytes);
    assert_eq!(bytes[0] & 7, 0);
    assert_eq!(bytes[31] & 128, 0);
    assert_eq!(bytes[31] & 64, 64);
}
