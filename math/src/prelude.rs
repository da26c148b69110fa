pub use crate::{
    error::{FractionError, LagrangeError, MathError, RadixError},
    fraction::{gcd, Fraction},
    lagrange::{basis_at_zero, evaluate_at_zero},
    point::Point,
    radix::{decode, encode, MAX_RADIX, MIN_RADIX},
};
