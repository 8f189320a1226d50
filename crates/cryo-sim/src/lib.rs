//! cryo-sim: the explicit time-integration loop.
//!
//! Drives the cool-down: conductive flow over the network, PTC heat
//! injection at the two designated stage nodes, simultaneous clamped heat
//! application, and monotone one-way step halving over a fixed iteration
//! budget.

pub mod cooldown;
pub mod error;
pub mod flow;

pub use cooldown::{Cooldown, Progress, SimOptions, SimRecord};
pub use error::{SimError, SimResult};
pub use flow::conductive_flow;
