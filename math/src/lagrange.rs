//! Lagrange interpolation evaluated at `x = 0` over the rationals.
//!
//! For points `(x_0, y_0) .. (x_{m-1}, y_{m-1})` with distinct abscissae the
//! constant term of the unique polynomial of degree `< m` through them is
//!
//! ```text
//! f(0) = Σ_i y_i · Π_{j≠i} (-x_j) / (x_i - x_j)
//! ```
//!
//! Every product is computed exactly, so the cost is `O(m²)` big-integer
//! multiplications.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::{debug, trace};

use crate::error::LagrangeError;
use crate::fraction::Fraction;
use crate::point::Point;

/// Numerator and denominator of the `i`-th basis weight at zero, with the
/// sign normalised onto the numerator.
fn basis_parts(
    points: &[Point],
    i: usize,
) -> Result<(BigInt, BigInt), LagrangeError> {
    let xi = &points
        .get(i)
        .ok_or(LagrangeError::InvalidIndex {
            index: i,
            len: points.len(),
        })?
        .x;

    let mut numer = BigInt::one();
    let mut denom = BigInt::one();
    for (j, other) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        numer *= -&other.x;
        denom *= xi - &other.x;
    }

    if denom.is_zero() {
        return Err(LagrangeError::DuplicateAbscissa(xi.clone()));
    }
    if denom.is_negative() {
        numer = -numer;
        denom = -denom;
    }

    Ok((numer, denom))
}

/// The reduced Lagrange weight `L_i(0)` of the `i`-th point.
pub fn basis_at_zero(
    points: &[Point],
    i: usize,
) -> Result<Fraction, LagrangeError> {
    let (numer, denom) = basis_parts(points, i)?;
    Ok(Fraction::unreduced(numer, denom).reduced())
}

/// Exact value at zero of the minimal-degree polynomial through `points`.
///
/// Fails with [`LagrangeError::DuplicateAbscissa`] if two points share an
/// x-coordinate and with [`LagrangeError::EmptyPointSet`] if there are none.
pub fn evaluate_at_zero(points: &[Point]) -> Result<Fraction, LagrangeError> {
    if points.is_empty() {
        return Err(LagrangeError::EmptyPointSet);
    }
    debug!(points = points.len(), "interpolating constant term");

    let mut total = Fraction::zero();
    for (i, point) in points.iter().enumerate() {
        let (numer, denom) = basis_parts(points, i)?;
        let term = Fraction::unreduced(&point.y * numer, denom);
        // Reduce after every step to keep the accumulator small.
        total = total + &term;
        trace!(index = i, x = %point.x, partial = %total, "added basis term");
    }

    Ok(total.reduced())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn integer(n: i64) -> Fraction {
        Fraction::from_integer(n.into())
    }

    #[test]
    fn recovers_constant_of_quadratic() {
        // y = x² + x + 1
        let pts = points(&[(1, 3), (2, 6), (3, 11)]);
        assert_eq!(evaluate_at_zero(&pts).unwrap(), integer(1));
    }

    #[test]
    fn recovers_constant_of_line() {
        // y = 4x + 1
        let pts = points(&[(1, 5), (2, 9)]);
        assert_eq!(evaluate_at_zero(&pts).unwrap(), integer(1));
    }

    #[test]
    fn non_integer_constant_term_stays_exact() {
        // y = x/2 + 1/2
        let pts = points(&[(1, 1), (3, 2)]);
        let value = evaluate_at_zero(&pts).unwrap();
        assert_eq!(value.numer(), &BigInt::from(1));
        assert_eq!(value.denom(), &BigInt::from(2));
    }

    #[test]
    fn single_point_is_a_constant_polynomial() {
        let pts = points(&[(42, -17)]);
        assert_eq!(evaluate_at_zero(&pts).unwrap(), integer(-17));
    }

    #[test]
    fn handles_negative_and_zero_abscissae() {
        // y = 2x³ - x + 7
        let f = |x: i64| 2 * x * x * x - x + 7;
        let pts = points(&[(-2, f(-2)), (0, f(0)), (5, f(5)), (-7, f(-7))]);
        assert_eq!(evaluate_at_zero(&pts).unwrap(), integer(7));
    }

    #[test]
    fn duplicate_abscissa_is_degenerate() {
        let pts = points(&[(1, 3), (2, 6), (2, 6)]);
        assert_eq!(
            evaluate_at_zero(&pts),
            Err(LagrangeError::DuplicateAbscissa(BigInt::from(2)))
        );
    }

    #[test]
    fn empty_point_set_is_rejected() {
        assert_eq!(evaluate_at_zero(&[]), Err(LagrangeError::EmptyPointSet));
    }

    #[test]
    fn basis_index_out_of_range() {
        let pts = points(&[(1, 1)]);
        assert_eq!(
            basis_at_zero(&pts, 3),
            Err(LagrangeError::InvalidIndex { index: 3, len: 1 })
        );
    }

    #[test]
    fn basis_weights_for_one_two_three() {
        let pts = points(&[(1, 0), (2, 0), (3, 0)]);
        let weights: Vec<String> = (0..3)
            .map(|i| basis_at_zero(&pts, i).unwrap().to_string())
            .collect();
        assert_eq!(weights, ["3", "-3", "1"]);
    }

    #[test]
    fn values_beyond_machine_words() {
        // y = c + 3x with c and x far outside u64.
        let c: BigInt =
            "123456789012345678901234567890123456789".parse().unwrap();
        let x0: BigInt = BigInt::from(u64::MAX) * 1000;
        let x1: BigInt = &x0 + BigInt::from(u128::MAX);
        let pts = vec![
            Point::new(x0.clone(), &c + &x0 * 3),
            Point::new(x1.clone(), &c + &x1 * 3),
        ];
        assert_eq!(evaluate_at_zero(&pts).unwrap(), Fraction::from_integer(c));
    }
}
