//! Piecewise-linear interpolation over a scattered 2-D sample cloud.

use crate::delaunay::triangulate;
use crate::error::{PtcError, PtcResult};

/// Result of a scattered interpolation query.
///
/// Out-of-hull queries are an explicit variant rather than a NaN sentinel so
/// the boundary fallback can be written as a plain decision table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Interior(f64),
    OutOfHull,
}

/// Delaunay-triangulated sample cloud over which any number of value columns
/// can be interpolated.
#[derive(Debug, Clone)]
pub struct ScatteredInterpolator {
    points: Vec<[f64; 2]>,
    triangles: Vec<[usize; 3]>,
}

impl ScatteredInterpolator {
    pub fn new(points: Vec<[f64; 2]>) -> PtcResult<Self> {
        if points.len() < 3 {
            return Err(PtcError::TooFewSamples {
                count: points.len(),
            });
        }
        let triangles = triangulate(&points).ok_or(PtcError::DegenerateSamples)?;
        tracing::debug!(
            samples = points.len(),
            triangles = triangles.len(),
            "triangulated load curve samples"
        );
        Ok(Self { points, triangles })
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Interpolate `values` (one per sample point) at `(x, y)`.
    ///
    /// Inside the convex hull the result is the barycentric combination over
    /// the containing triangle; outside, `Sample::OutOfHull`.
    pub fn eval(&self, values: &[f64], x: f64, y: f64) -> Sample {
        debug_assert_eq!(values.len(), self.points.len());
        const EPS: f64 = 1e-9;

        for tri in &self.triangles {
            let a = self.points[tri[0]];
            let b = self.points[tri[1]];
            let c = self.points[tri[2]];

            let det = (b[1] - c[1]) * (a[0] - c[0]) + (c[0] - b[0]) * (a[1] - c[1]);
            if det.abs() < 1e-300 {
                continue;
            }
            let l1 = ((b[1] - c[1]) * (x - c[0]) + (c[0] - b[0]) * (y - c[1])) / det;
            let l2 = ((c[1] - a[1]) * (x - c[0]) + (a[0] - c[0]) * (y - c[1])) / det;
            let l3 = 1.0 - l1 - l2;

            if l1 >= -EPS && l2 >= -EPS && l3 >= -EPS {
                return Sample::Interior(
                    l1 * values[tri[0]] + l2 * values[tri[1]] + l3 * values[tri[2]],
                );
            }
        }
        Sample::OutOfHull
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> (ScatteredInterpolator, Vec<f64>) {
        let pts = vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];
        // Linear field f(x, y) = 3x + 5y + 1
        let vals = pts.iter().map(|p| 3.0 * p[0] + 5.0 * p[1] + 1.0).collect();
        (ScatteredInterpolator::new(pts).unwrap(), vals)
    }

    #[test]
    fn reproduces_linear_field_exactly() {
        let (interp, vals) = square();
        for (x, y) in [(0.5, 0.5), (1.0, 1.0), (1.9, 0.1), (0.0, 2.0)] {
            match interp.eval(&vals, x, y) {
                Sample::Interior(v) => {
                    let expected = 3.0 * x + 5.0 * y + 1.0;
                    assert!((v - expected).abs() < 1e-9, "at ({x}, {y}): {v}");
                }
                Sample::OutOfHull => panic!("({x}, {y}) should be interior"),
            }
        }
    }

    #[test]
    fn outside_hull_is_flagged() {
        let (interp, vals) = square();
        assert_eq!(interp.eval(&vals, -1.0, 1.0), Sample::OutOfHull);
        assert_eq!(interp.eval(&vals, 3.0, 3.0), Sample::OutOfHull);
        assert_eq!(interp.eval(&vals, 1.0, -0.5), Sample::OutOfHull);
    }

    #[test]
    fn hull_boundary_counts_as_interior() {
        let (interp, vals) = square();
        assert!(matches!(interp.eval(&vals, 1.0, 0.0), Sample::Interior(_)));
    }

    #[test]
    fn degenerate_cloud_is_an_error() {
        let pts = vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]];
        assert!(ScatteredInterpolator::new(pts).is_err());
    }
}
