//! Exact rational numbers over [`BigInt`].

use std::fmt;
use std::ops::Add;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::FractionError;

/// Greatest common divisor of `|a|` and `|b|` by Euclid's algorithm.
///
/// `gcd(0, 0)` is `0` and `gcd(a, 0)` is `|a|`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// A fully reduced fraction `numer / denom`.
///
/// The denominator is always positive and `gcd(|numer|, denom) == 1`, so the
/// sign lives in the numerator and equal values have equal representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn from_integer(n: BigInt) -> Self {
        Fraction {
            numer: n,
            denom: BigInt::one(),
        }
    }

    /// Build the reduced form of `numer / denom`.
    ///
    /// `0 / 0` is treated as zero. Any other zero denominator is an error.
    pub fn reduce(numer: BigInt, denom: BigInt) -> Result<Self, FractionError> {
        if denom.is_zero() && !numer.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self::normalize(numer, denom))
    }

    /// Wrap `numer / denom` without reducing. The denominator must be
    /// positive, and the value must pass through `+` or [`Fraction::reduced`]
    /// before leaving the crate.
    pub(crate) fn unreduced(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(denom.is_positive());
        Fraction { numer, denom }
    }

    /// Caller guarantees `denom != 0` unless `numer` is also zero.
    fn normalize(numer: BigInt, denom: BigInt) -> Self {
        let g = gcd(&numer, &denom);
        if g.is_zero() {
            return Self::zero();
        }

        let mut numer = numer / &g;
        let mut denom = denom / &g;
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Fraction { numer, denom }
    }

    /// Reduce again. Always a no-op for values built through this type, kept
    /// so accumulators can finish with an explicit canonicalisation step.
    pub fn reduced(self) -> Self {
        Self::normalize(self.numer, self.denom)
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    /// Cross-multiply and reduce. Both denominators are positive, so the
    /// product never vanishes.
    fn add(self, rhs: &Fraction) -> Fraction {
        let numer = &self.numer * &rhs.denom + &rhs.numer * &self.denom;
        let denom = &self.denom * &rhs.denom;
        Fraction::normalize(numer, denom)
    }
}

impl Add<&Fraction> for Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        &self + rhs
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::reduce(n.into(), d.into()).unwrap()
    }

    #[test]
    fn gcd_conventions() {
        assert_eq!(gcd(&0.into(), &0.into()), BigInt::zero());
        assert_eq!(gcd(&(-12).into(), &0.into()), BigInt::from(12));
        assert_eq!(gcd(&0.into(), &7.into()), BigInt::from(7));
        assert_eq!(gcd(&84.into(), &(-36).into()), BigInt::from(12));
        assert_eq!(gcd(&17.into(), &5.into()), BigInt::one());
    }

    #[test]
    fn reduce_moves_sign_to_numerator() {
        let f = frac(6, -4);
        assert_eq!(f.numer(), &BigInt::from(-3));
        assert_eq!(f.denom(), &BigInt::from(2));

        let g = frac(-6, -4);
        assert_eq!(g.numer(), &BigInt::from(3));
        assert_eq!(g.denom(), &BigInt::from(2));
    }

    #[test]
    fn zero_numerator_reduces_to_canonical_zero() {
        assert_eq!(frac(0, -9), Fraction::zero());
        assert_eq!(frac(0, 0), Fraction::zero());
        assert!(frac(0, 5).is_integer());
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(
            Fraction::reduce(BigInt::from(3), BigInt::zero()),
            Err(FractionError::ZeroDenominator)
        );
    }

    #[test]
    fn addition_reduces_result() {
        assert_eq!(frac(1, 2) + frac(1, 3), frac(5, 6));
        assert_eq!(frac(1, 2) + frac(1, 2), Fraction::from_integer(1.into()));
        assert_eq!(&frac(3, 4) + &frac(-3, 4), Fraction::zero());
        assert_eq!(frac(-1, 6) + &frac(1, 3), frac(1, 6));
    }

    #[test]
    fn addition_accepts_unreduced_operands() {
        let unreduced = Fraction {
            numer: BigInt::from(4),
            denom: BigInt::from(8),
        };
        let sum = &unreduced + &Fraction::zero();
        assert_eq!(sum.numer(), &BigInt::one());
        assert_eq!(sum.denom(), &BigInt::from(2));
    }

    #[test]
    fn reduced_is_idempotent() {
        let f = frac(10, 4);
        assert_eq!(f.clone().reduced(), f);
    }

    #[test]
    fn display_forms() {
        assert_eq!(frac(8, 4).to_string(), "2");
        assert_eq!(frac(-1, 2).to_string(), "-1/2");
        assert_eq!(Fraction::zero().to_string(), "0");
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;

    #[proptest]
    fn reduce_yields_canonical_equal_value(
        numer: i64,
        #[filter(#denom != 0)] denom: i64,
    ) {
        let f = Fraction::reduce(numer.into(), denom.into()).unwrap();
        prop_assert!(f.denom().is_positive());
        prop_assert!(gcd(f.numer(), f.denom()).is_one() || f.is_zero());
        prop_assert_eq!(
            f.numer() * BigInt::from(denom),
            BigInt::from(numer) * f.denom()
        );
    }

    #[proptest]
    fn addition_matches_cross_multiplication(
        a: i32,
        #[filter(#b != 0)] b: i32,
        c: i32,
        #[filter(#d != 0)] d: i32,
    ) {
        let lhs = Fraction::reduce(a.into(), b.into()).unwrap();
        let rhs = Fraction::reduce(c.into(), d.into()).unwrap();
        let sum = &lhs + &rhs;

        let (a, b) = (BigInt::from(a), BigInt::from(b));
        let (c, d) = (BigInt::from(c), BigInt::from(d));
        let expected_numer = &a * &d + &c * &b;
        let expected_denom = &b * &d;
        prop_assert_eq!(
            sum.numer() * &expected_denom,
            expected_numer * sum.denom()
        );
        prop_assert_eq!(&sum, &(&rhs + &lhs));
    }
}
