/// Floating point type used throughout the system
pub type Real = f64;

/// Piecewise-linear interpolation over ascending sample points.
///
/// Queries below `xs[0]` return `ys[0]`; queries above the last sample return
/// the last value (clamped at both ends). `xs` must be ascending, non-empty,
/// and the same length as `ys`.
pub fn interp1(x: Real, xs: &[Real], ys: &[Real]) -> Real {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert!(!xs.is_empty());

    if x <= xs[0] {
        return ys[0];
    }
    let last = xs.len() - 1;
    if x >= xs[last] {
        return ys[last];
    }

    // First index with xs[hi] > x; hi >= 1 because x > xs[0].
    let hi = xs.partition_point(|&v| v <= x);
    let lo = hi - 1;
    let span = xs[hi] - xs[lo];
    if span == 0.0 {
        return ys[lo];
    }
    let frac = (x - xs[lo]) / span;
    ys[lo] + frac * (ys[hi] - ys[lo])
}
