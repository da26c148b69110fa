use math::error::{LagrangeError, RadixError};
use num_bigint::BigInt;
use thiserror::Error;

/// Result type specialized for secret recovery.
pub type SolveResult<T> = std::result::Result<T, SolveError>;

/// Errors that abort the recovery of a constant term.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("Invalid digit {digit:?} for base {radix} in entry {key:?}")]
    InvalidDigit {
        key: String,
        digit: char,
        radix: u32,
    },
    #[error("Degenerate input: x-coordinate {0} appears more than once")]
    DegenerateInput(BigInt),
    #[error("Insufficient points: need {required}, got {provided}")]
    InsufficientPoints { required: usize, provided: usize },
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

impl SolveError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        SolveError::MalformedDocument(msg.into())
    }

    /// Attach the entry key to a decoding failure.
    pub(crate) fn from_radix(key: &str, err: RadixError) -> Self {
        match err {
            RadixError::InvalidDigit { digit, radix } => {
                SolveError::InvalidDigit {
                    key: key.to_owned(),
                    digit,
                    radix,
                }
            }
            other => SolveError::malformed(format!("entry {key:?}: {other}")),
        }
    }
}

impl From<LagrangeError> for SolveError {
    fn from(value: LagrangeError) -> Self {
        match value {
            LagrangeError::DuplicateAbscissa(x) => {
                SolveError::DegenerateInput(x)
            }
            other => SolveError::malformed(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for SolveError {
    fn from(value: serde_json::Error) -> Self {
        SolveError::MalformedDocument(value.to_string())
    }
}
