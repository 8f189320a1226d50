//! Error types for material property evaluation.

use thiserror::Error;

pub type MaterialResult<T> = Result<T, MaterialError>;

#[derive(Error, Debug)]
pub enum MaterialError {
    #[error("Temperature {temp} K is outside the fit domain (must be > 0 K)")]
    NonPositiveTemperature { temp: f64 },

    #[error("Material table has no coefficient rows")]
    EmptyTable,

    #[error("Malformed material table row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Duplicate material name: {name}")]
    DuplicateName { name: String },

    #[error("Unknown material: {name}")]
    UnknownMaterial { name: String },
}
