//! cryo-core: stable foundation for cryoflow.
//!
//! Contains:
//! - numeric (Real + 1-D interpolation)
//! - ids (stable compact IDs for network/model objects)

pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use ids::*;
pub use numeric::*;
