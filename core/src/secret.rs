use std::fmt;

use math::Fraction;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// The recovered constant term.
///
/// A consistent set of points on an integer polynomial always yields
/// [`Secret::Integer`]. [`Secret::Fraction`] is a successful but suspicious
/// outcome: the points do not lie on an integer-coefficient polynomial of
/// the expected degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Secret {
    Integer(BigInt),
    Fraction(Fraction),
}

impl Secret {
    pub fn from_fraction(value: Fraction) -> Self {
        match whole_part(value.numer(), value.denom()) {
            Some(n) => Secret::Integer(n),
            None => Secret::Fraction(value),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Secret::Integer(_))
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Secret::Integer(n) => Some(n),
            Secret::Fraction(_) => None,
        }
    }
}

/// The integer `numer / denom` if the division is exact. The `div_rem`
/// check only matters for unreduced input.
fn whole_part(numer: &BigInt, denom: &BigInt) -> Option<BigInt> {
    if denom.is_one() {
        return Some(numer.clone());
    }
    let (quotient, remainder) = numer.div_rem(denom);
    remainder.is_zero().then_some(quotient)
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secret::Integer(n) => write!(f, "{n}"),
            Secret::Fraction(q) => write!(f, "{}/{}", q.numer(), q.denom()),
        }
    }
}
