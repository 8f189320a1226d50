//! Boundary curves over the sampled operating envelope.

use cryo_core::interp1;

/// Sentinel ceiling temperature used to pad boundary curves into total
/// functions over the full query range.
pub const TEMP_CEILING_K: f64 = 500.0;

/// A monotone threshold curve built from one boundary subset of the load
/// table, padded with sentinel endpoints so it is defined for any query in
/// `[0, TEMP_CEILING_K]`.
#[derive(Debug, Clone)]
pub struct BoundaryCurve {
    /// Query axis: 0, the subset's coordinates, TEMP_CEILING_K.
    xs: Vec<f64>,
    /// Value axis: first value, the subset's values, last value.
    ys: Vec<f64>,
}

impl BoundaryCurve {
    /// `query_axis` and `value_axis` are the boundary subset's coordinates,
    /// already sorted ascending along `query_axis`.
    pub fn new(query_axis: &[f64], value_axis: &[f64]) -> Self {
        debug_assert_eq!(query_axis.len(), value_axis.len());
        debug_assert!(!query_axis.is_empty());

        let mut xs = Vec::with_capacity(query_axis.len() + 2);
        xs.push(0.0);
        xs.extend_from_slice(query_axis);
        xs.push(TEMP_CEILING_K);

        let mut ys = Vec::with_capacity(value_axis.len() + 2);
        ys.push(value_axis[0]);
        ys.extend_from_slice(value_axis);
        ys.push(value_axis[value_axis.len() - 1]);

        Self { xs, ys }
    }

    /// Threshold value at `x`, linearly interpolated.
    pub fn eval(&self, x: f64) -> f64 {
        interp1(x, &self.xs, &self.ys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_makes_the_curve_total() {
        let curve = BoundaryCurve::new(&[4.0, 10.0, 20.0], &[30.0, 40.0, 50.0]);
        // Held flat between the sentinels and the outermost samples.
        assert_eq!(curve.eval(0.0), 30.0);
        assert_eq!(curve.eval(2.0), 30.0);
        assert_eq!(curve.eval(TEMP_CEILING_K), 50.0);
        assert_eq!(curve.eval(400.0), 50.0);
    }

    #[test]
    fn interpolates_between_samples() {
        let curve = BoundaryCurve::new(&[4.0, 10.0], &[30.0, 40.0]);
        assert!((curve.eval(7.0) - 35.0).abs() < 1e-12);
    }

    #[test]
    fn single_sample_is_constant() {
        let curve = BoundaryCurve::new(&[10.0], &[42.0]);
        assert_eq!(curve.eval(0.0), 42.0);
        assert_eq!(curve.eval(10.0), 42.0);
        assert_eq!(curve.eval(499.0), 42.0);
    }
}
