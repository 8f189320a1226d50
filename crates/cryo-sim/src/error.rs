//! Error types for simulation operations.

use cryo_net::NetError;
use cryo_ptc::PtcError;
use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Stage node not found in network: {name}")]
    UnknownStageNode { name: String },

    #[error(transparent)]
    Network(#[from] NetError),

    #[error(transparent)]
    Ptc(#[from] PtcError),
}
