use math::Point;
use tracing::debug;

use crate::error::{SolveError, SolveResult};

/// The `k` points with the smallest x-coordinates, in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Sort `points` by x and keep the first `k`.
    ///
    /// Points beyond the first `k` are dropped without being checked against
    /// the selected ones.
    pub fn select(mut points: Vec<Point>, k: usize) -> SolveResult<Self> {
        if k == 0 {
            return Err(SolveError::malformed("at least one point is required"));
        }
        if points.len() < k {
            return Err(SolveError::InsufficientPoints {
                required: k,
                provided: points.len(),
            });
        }

        points.sort_by(|a, b| a.x.cmp(&b.x));
        if points.len() > k {
            debug!(
                available = points.len(),
                required = k,
                "ignoring points beyond the required count"
            );
            points.truncate(k);
        }

        Ok(PointSet { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }
}

impl AsRef<[Point]> for PointSet {
    fn as_ref(&self) -> &[Point] {
        self.as_slice()
    }
}
