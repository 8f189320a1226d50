//! Project schema definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One simulation setup: shell stages, material tables, cooler wiring, and
/// run parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    /// Material name -> TSV coefficient table, one polynomial order per row:
    /// `label \t conductivity_coeff \t specific_heat_coeff`.
    #[serde(default)]
    pub materials: BTreeMap<String, String>,
    #[serde(default)]
    pub stages: Vec<StageDef>,
    pub cooler: CoolerDef,
    #[serde(default)]
    pub run: RunDef,
}

/// One spherical shell stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageDef {
    pub name: String,
    pub material: String,
    pub slices: usize,
    pub radius_m: f64,
    pub thickness_m: f64,
    pub density_kg_m3: f64,
    /// Appended to the slice index to form node names, e.g. `_4K` -> `0_4K`.
    pub suffix: String,
}

/// The two network nodes the cooler stages attach to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoolerDef {
    #[serde(default = "default_stage1_node")]
    pub stage1_node: String,
    #[serde(default = "default_stage2_node")]
    pub stage2_node: String,
}

impl Default for CoolerDef {
    fn default() -> Self {
        Self {
            stage1_node: default_stage1_node(),
            stage2_node: default_stage2_node(),
        }
    }
}

/// Run parameters; every field has the historical default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_dt_initial_s")]
    pub dt_initial_s: f64,
    #[serde(default = "default_record_every")]
    pub record_every: usize,
}

impl Default for RunDef {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            dt_initial_s: default_dt_initial_s(),
            record_every: default_record_every(),
        }
    }
}

fn default_stage1_node() -> String {
    "0_40K".to_string()
}

fn default_stage2_node() -> String {
    "0_4K".to_string()
}

fn default_iterations() -> usize {
    200_000
}

fn default_dt_initial_s() -> f64 {
    20.0
}

fn default_record_every() -> usize {
    1
}
