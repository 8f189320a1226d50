//! cryo-results: the recorded temperature table and its CSV rendering.

pub mod table;

pub use table::TemperatureTable;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Shape mismatch: {what}")]
    ShapeMismatch { what: String },
}
