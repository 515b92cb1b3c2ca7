//! Curve group capability trait
//!
//! Both curve families expose the same small group interface; the signature
//! engines depend on this trait rather than on a concrete curve wherever the
//! operation is pure group arithmetic.

/// Abelian group operations of an elliptic curve
///
/// Implementors are zero-sized curve markers; points and scalars are the
/// concrete types of the curve module.
pub trait CurveGroup {
    /// Point type, including the identity element
    type Point: Clone + PartialEq;

    /// Scalar type, reduced modulo the group order
    type Scalar: Clone;

    /// The identity element of the group
    fn identity() -> Self::Point;

    /// The standard base point of the curve
    fn generator() -> Self::Point;

    /// Group addition
    fn add(p: &Self::Point, q: &Self::Point) -> Self::Point;

    /// Scalar multiplication: `k * p`
    fn scalar_mul(k: &Self::Scalar, p: &Self::Point) -> Self::Point;

    /// Scalar multiplication with the base point: `k * G`
    fn scalar_mul_base(k: &Self::Scalar) -> Self::Point {
        Self::scalar_mul(k, &Self::generator())
    }

    /// Sum of scalar multiples: `k1 * P1 + k2 * P2 + ...`
    ///
    /// Verification equations in both signature schemes are instances of
    /// this shape.
    fn linear_combination(terms: &[(Self::Scalar, Self::Point)]) -> Self::Point {
        terms.iter().fold(Self::identity(), |acc, (k, p)| {
            Self::add(&acc, &Self::scalar_mul(k, p))
        })
    }
}
