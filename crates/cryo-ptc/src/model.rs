//! Load curve evaluation and the PTC model.

use std::path::Path;

use cryo_core::interp1;

use crate::curve::BoundaryCurve;
use crate::dataset::{LoadCurveTable, LoadSample};
use crate::error::{PtcError, PtcResult};
use crate::scatter::{Sample, ScatteredInterpolator};

/// The rows of the table achieving one global load extreme, sorted along the
/// axis they are later interpolated over.
#[derive(Debug, Clone)]
struct BoundarySubset {
    t1: Vec<f64>,
    t2: Vec<f64>,
    load_1: Vec<f64>,
    load_2: Vec<f64>,
}

impl BoundarySubset {
    fn collect<F>(samples: &[LoadSample], keep: F, sort_by_t1: bool) -> Self
    where
        F: Fn(&LoadSample) -> bool,
    {
        let mut rows: Vec<&LoadSample> = samples.iter().filter(|s| keep(s)).collect();
        rows.sort_by(|a, b| {
            let (ka, kb) = if sort_by_t1 {
                (a.t1_k, b.t1_k)
            } else {
                (a.t2_k, b.t2_k)
            };
            ka.total_cmp(&kb)
        });
        Self {
            t1: rows.iter().map(|s| s.t1_k).collect(),
            t2: rows.iter().map(|s| s.t2_k).collect(),
            load_1: rows.iter().map(|s| s.load_1_w).collect(),
            load_2: rows.iter().map(|s| s.load_2_w).collect(),
        }
    }
}

/// Tabulated cooling power over two stage temperatures, with interior
/// piecewise-linear interpolation and boundary-curve extrapolation outside
/// the convex hull of the samples.
#[derive(Debug, Clone)]
pub struct LoadCurve {
    interp: ScatteredInterpolator,
    load_1: Vec<f64>,
    load_2: Vec<f64>,

    l1_low: f64,
    l1_high: f64,
    l2_low: f64,
    l2_high: f64,

    /// Rows at the load_1 extremes, sorted by T2.
    sub_1_low: BoundarySubset,
    sub_1_high: BoundarySubset,
    /// Rows at the load_2 extremes, sorted by T1.
    sub_2_low: BoundarySubset,
    sub_2_high: BoundarySubset,

    /// T1 thresholds as functions of T2.
    curve_t1_low: BoundaryCurve,
    curve_t1_high: BoundaryCurve,
    /// T2 thresholds as functions of T1.
    curve_t2_low: BoundaryCurve,
    curve_t2_high: BoundaryCurve,
}

impl LoadCurve {
    pub fn new(table: &LoadCurveTable) -> PtcResult<Self> {
        let samples = table.samples();

        let points: Vec<[f64; 2]> = samples.iter().map(|s| [s.t1_k, s.t2_k]).collect();
        let interp = ScatteredInterpolator::new(points)?;
        let load_1: Vec<f64> = samples.iter().map(|s| s.load_1_w).collect();
        let load_2: Vec<f64> = samples.iter().map(|s| s.load_2_w).collect();

        let l1_low = fold_min(&load_1);
        let l1_high = fold_max(&load_1);
        let l2_low = fold_min(&load_2);
        let l2_high = fold_max(&load_2);

        let sub_1_low = BoundarySubset::collect(samples, |s| s.load_1_w == l1_low, false);
        let sub_1_high = BoundarySubset::collect(samples, |s| s.load_1_w == l1_high, false);
        let sub_2_low = BoundarySubset::collect(samples, |s| s.load_2_w == l2_low, true);
        let sub_2_high = BoundarySubset::collect(samples, |s| s.load_2_w == l2_high, true);

        let curve_t1_low = BoundaryCurve::new(&sub_1_low.t2, &sub_1_low.t1);
        let curve_t1_high = BoundaryCurve::new(&sub_1_high.t2, &sub_1_high.t1);
        let curve_t2_low = BoundaryCurve::new(&sub_2_low.t1, &sub_2_low.t2);
        let curve_t2_high = BoundaryCurve::new(&sub_2_high.t1, &sub_2_high.t2);

        Ok(Self {
            interp,
            load_1,
            load_2,
            l1_low,
            l1_high,
            l2_low,
            l2_high,
            sub_1_low,
            sub_1_high,
            sub_2_low,
            sub_2_high,
            curve_t1_low,
            curve_t1_high,
            curve_t2_low,
            curve_t2_high,
        })
    }

    /// Raw stage-1 load at the given stage temperatures, W.
    pub fn load_1(&self, t1: f64, t2: f64) -> PtcResult<f64> {
        match self.interp.eval(&self.load_1, t1, t2) {
            Sample::Interior(v) => Ok(v),
            Sample::OutOfHull => {
                if t1 < self.curve_t1_low.eval(t2) {
                    Ok(self.l1_low)
                } else if t1 > self.curve_t1_high.eval(t2) {
                    Ok(self.l1_high)
                } else if t2 < self.curve_t2_low.eval(t1) {
                    Ok(interp1(t1, &self.sub_2_low.t1, &self.sub_2_low.load_1))
                } else if t2 > self.curve_t2_high.eval(t1) {
                    Ok(interp1(t1, &self.sub_2_high.t1, &self.sub_2_high.load_1))
                } else {
                    Err(PtcError::OutOfDomain { t1, t2 })
                }
            }
        }
    }

    /// Raw stage-2 load; same fallback table with the temperature roles
    /// swapped.
    pub fn load_2(&self, t1: f64, t2: f64) -> PtcResult<f64> {
        match self.interp.eval(&self.load_2, t1, t2) {
            Sample::Interior(v) => Ok(v),
            Sample::OutOfHull => {
                if t2 < self.curve_t2_low.eval(t1) {
                    Ok(self.l2_low)
                } else if t2 > self.curve_t2_high.eval(t1) {
                    Ok(self.l2_high)
                } else if t1 < self.curve_t1_low.eval(t2) {
                    Ok(interp1(t2, &self.sub_1_low.t2, &self.sub_1_low.load_2))
                } else if t1 > self.curve_t1_high.eval(t2) {
                    Ok(interp1(t2, &self.sub_1_high.t2, &self.sub_1_high.load_2))
                } else {
                    Err(PtcError::OutOfDomain { t1, t2 })
                }
            }
        }
    }

    fn t1_min(&self) -> f64 {
        fold_min(&self.sub_1_low.t1)
    }

    fn t2_min(&self) -> f64 {
        fold_min(&self.sub_2_low.t2)
    }
}

fn fold_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn fold_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Two-stage pulse-tube cooler.
///
/// Reports the tabulated loads negated: positive load values are heat the
/// cooler removes, so downstream flow accounting can add the returned value
/// directly to a stage's pending heat.
#[derive(Debug, Clone)]
pub struct PtcModel {
    curve: LoadCurve,
    t1_min_k: f64,
    t2_min_k: f64,
}

impl PtcModel {
    pub fn new(table: &LoadCurveTable) -> PtcResult<Self> {
        let curve = LoadCurve::new(table)?;
        let t1_min_k = curve.t1_min();
        let t2_min_k = curve.t2_min();
        Ok(Self {
            curve,
            t1_min_k,
            t2_min_k,
        })
    }

    pub fn from_csv_path(path: &Path) -> PtcResult<Self> {
        let table = LoadCurveTable::from_csv_path(path)?;
        Self::new(&table)
    }

    /// Heat injected into stage 1 per second (negative while cooling), W.
    pub fn power_stage1(&self, t1: f64, t2: f64) -> PtcResult<f64> {
        Ok(-self.curve.load_1(t1, t2)?)
    }

    /// Heat injected into stage 2 per second (negative while cooling), W.
    pub fn power_stage2(&self, t1: f64, t2: f64) -> PtcResult<f64> {
        Ok(-self.curve.load_2(t1, t2)?)
    }

    /// Minimum T1 sampled on the load_1 lower boundary.
    pub fn t1_min(&self) -> f64 {
        self.t1_min_k
    }

    /// Minimum T2 sampled on the load_2 lower boundary; used as the global
    /// floor temperature for the simulation.
    pub fn t2_min(&self) -> f64 {
        self.t2_min_k
    }
}
