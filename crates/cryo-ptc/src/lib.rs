//! cryo-ptc: the pulse-tube cooler load model.
//!
//! Provides:
//! - `LoadCurveTable`: the sampled `(T1, T2, load_1, load_2)` operating points
//! - `ScatteredInterpolator`: Delaunay-based piecewise-linear interpolation
//!   over the sample cloud, with an explicit `Interior`/`OutOfHull` result
//! - boundary curves and the four-way extrapolation fallback outside the hull
//! - `PtcModel`: signed per-stage heat extraction rates and the floor
//!   temperatures derived from the boundary subsets

pub mod curve;
pub mod dataset;
pub(crate) mod delaunay;
pub mod error;
pub mod model;
pub mod scatter;

pub use curve::TEMP_CEILING_K;
pub use dataset::{LoadCurveTable, LoadSample};
pub use error::{PtcError, PtcResult};
pub use model::{LoadCurve, PtcModel};
pub use scatter::{Sample, ScatteredInterpolator};
