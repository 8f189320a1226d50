//! Network construction and evaluation errors.

use cryo_core::{MaterialId, NodeId};
use cryo_materials::MaterialError;
use thiserror::Error;

pub type NetResult<T> = Result<T, NetError>;

#[derive(Error, Debug)]
pub enum NetError {
    #[error("Duplicate node name: {name}")]
    DuplicateNode { name: String },

    #[error("Unknown node: {name}")]
    UnknownNode { name: String },

    #[error("Node id {id} is out of bounds")]
    InvalidNodeId { id: NodeId },

    #[error("Material id {id} is not in the library")]
    InvalidMaterialId { id: MaterialId },

    #[error("Duplicate edge: {src} -> {target}")]
    DuplicateEdge { src: NodeId, target: NodeId },

    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    #[error(transparent)]
    Material(#[from] MaterialError),
}
