//! cryo-net: the discretized thermal network.
//!
//! Provides:
//! - `ThermalNode`: mass + temperature state with clamped heat application
//! - `ConductiveEdge` / `ThermalNetwork`: arena-indexed directed graph with
//!   geometry-dependent conductance
//! - the spherical shell builder that slices a shell into a chain of nodes

pub mod builder;
pub mod error;
pub mod network;
pub mod node;

pub use builder::{add_spherical_shell, ShellSpec};
pub use error::{NetError, NetResult};
pub use network::{ConductiveEdge, ThermalNetwork};
pub use node::{ThermalNode, AMBIENT_TEMP_K, PROPERTY_FLOOR_K};
