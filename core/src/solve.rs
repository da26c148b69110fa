//! Recovery of a polynomial's constant term from an input document.

use std::io::Read;

use math::lagrange::evaluate_at_zero;
use tracing::{debug, warn};

use crate::document::Document;
use crate::error::SolveResult;
use crate::points::PointSet;
use crate::secret::Secret;

/// Decode the document, select the first `k` points by x and interpolate the
/// constant term. The first error aborts the whole computation.
pub fn solve(document: &Document) -> SolveResult<Secret> {
    let k = document.keys.threshold()?;
    let points = document.points()?;

    if let Some(n) = document.keys.declared_count()? {
        if n != points.len() as u64 {
            warn!(
                declared = n,
                found = points.len(),
                "keys.n does not match the number of entries"
            );
        }
    }

    let selected = PointSet::select(points, k)?;
    debug!(k, "selected points for interpolation");

    let value = evaluate_at_zero(selected.as_slice())?;
    let secret = Secret::from_fraction(value);
    if !secret.is_integer() {
        warn!(%secret, "interpolation did not yield an integer constant term");
    }

    Ok(secret)
}

/// [`solve`] for a JSON string.
pub fn solve_str(json: &str) -> SolveResult<Secret> {
    let document: Document = serde_json::from_str(json)?;
    solve(&document)
}

/// [`solve`] for a JSON stream.
pub fn solve_reader<R: Read>(reader: R) -> SolveResult<Secret> {
    let document: Document = serde_json::from_reader(reader)?;
    solve(&document)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::error::SolveError;

    #[test]
    fn solves_small_document() {
        let doc = Document::new(3)
            .with_entry(1, 10, "3")
            .with_entry(2, 10, "6")
            .with_entry(3, 2, "1011");
        assert_eq!(solve(&doc).unwrap(), Secret::Integer(BigInt::from(1)));
    }

    #[test]
    fn reader_and_string_agree() {
        let json = r#"{
            "keys": { "k": 2 },
            "1": { "base": 10, "value": "5" },
            "2": { "base": 16, "value": "9" }
        }"#;
        let from_reader = solve_reader(json.as_bytes()).unwrap();
        assert_eq!(solve_str(json).unwrap(), from_reader);
        assert_eq!(solve_str(json).unwrap().to_string(), "1");
    }

    #[test]
    fn mismatched_declared_count_is_not_fatal() {
        let json = r#"{
            "keys": { "n": 9, "k": 2 },
            "1": { "base": 10, "value": "5" },
            "2": { "base": 10, "value": "9" }
        }"#;
        assert_eq!(solve_str(json).unwrap().to_string(), "1");
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            solve_str("not json"),
            Err(SolveError::MalformedDocument(_))
        ));
    }
}
