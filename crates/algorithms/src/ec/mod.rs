//! Elliptic curve implementations
//!
//! Two curve families back the two signature schemes: the short-Weierstrass
//! curve secp256k1 and the twisted Edwards curve Edwards25519. Both expose
//! the `sigil_api::CurveGroup` capability interface through a zero-sized
//! curve marker.

pub mod edwards25519;
pub mod secp256k1;
