//! Load-curve parsing and evaluation errors.

use thiserror::Error;

pub type PtcResult<T> = Result<T, PtcError>;

#[derive(Error, Debug)]
pub enum PtcError {
    #[error("I/O error reading load curve: {0}")]
    Io(#[from] std::io::Error),

    #[error("Load curve file is empty")]
    Empty,

    #[error("Bad load curve header: expected \"T1,T2,load_1,load_2\", found {found:?}")]
    BadHeader { found: String },

    #[error("Malformed load curve row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Load curve needs at least 3 samples, found {count}")]
    TooFewSamples { count: usize },

    #[error("Load curve samples are degenerate (collinear); no interior exists")]
    DegenerateSamples,

    #[error("Load query (T1={t1}, T2={t2}) matches no interior or boundary region")]
    OutOfDomain { t1: f64, t2: f64 },
}
