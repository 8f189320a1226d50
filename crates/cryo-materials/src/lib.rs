//! cryo-materials: temperature-dependent material properties.
//!
//! Provides:
//! - `Material`: thermal conductivity and specific heat from polynomial fits
//!   in log10 space, with linear-to-zero extrapolation below a floor
//!   temperature and a lazily built lookup cache for hot-loop queries
//! - TSV parsing of coefficient tables
//! - `MaterialLibrary`: arena of shared materials resolved by name

pub mod error;
pub mod library;
pub mod material;

pub use error::{MaterialError, MaterialResult};
pub use library::MaterialLibrary;
pub use material::{EvalOptions, Material};
