use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("radix {0} is outside the supported range 2..=36")]
        UnsupportedRadix(u32),
        #[error("invalid digit {digit:?} for radix {radix}")]
        InvalidDigit { digit: char, radix: u32 },
    }
}

pub mod fraction {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum Error {
        #[error("fraction has a zero denominator")]
        ZeroDenominator,
    }
}

pub mod lagrange {
    use num_bigint::BigInt;
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("cannot interpolate an empty point set")]
        EmptyPointSet,
        #[error("duplicate x-coordinate {0} yields a zero basis denominator")]
        DuplicateAbscissa(BigInt),
        #[error("basis index {index} out of range for {len} points")]
        InvalidIndex { index: usize, len: usize },
    }
}

pub use fraction::Error as FractionError;
pub use lagrange::Error as LagrangeError;
pub use radix::Error as RadixError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error(transparent)]
    Fraction(#[from] FractionError),
    #[error(transparent)]
    Lagrange(#[from] LagrangeError),
}

pub type Error = MathError;
