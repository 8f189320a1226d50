//! Project validation logic.
//!
//! Structural checks only; material coefficient tables are parsed when the
//! model is assembled.

use std::collections::HashSet;

use crate::schema::{Project, StageDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Missing reference: {name} in {context}")]
    MissingReference { name: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.stages.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "stages".to_string(),
            value: "[]".to_string(),
            reason: "at least one shell stage is required".to_string(),
        });
    }

    let mut stage_names = HashSet::new();
    let mut suffixes = HashSet::new();
    for stage in &project.stages {
        if !stage_names.insert(&stage.name) {
            return Err(ValidationError::DuplicateName {
                name: stage.name.clone(),
                context: "stages".to_string(),
            });
        }
        if !suffixes.insert(&stage.suffix) {
            return Err(ValidationError::DuplicateName {
                name: stage.suffix.clone(),
                context: "stage suffixes".to_string(),
            });
        }
        validate_stage(stage)?;
        if !project.materials.contains_key(&stage.material) {
            return Err(ValidationError::MissingReference {
                name: stage.material.clone(),
                context: format!("stage '{}' material", stage.name),
            });
        }
    }

    validate_stage_node(project, &project.cooler.stage1_node, "cooler stage1_node")?;
    validate_stage_node(project, &project.cooler.stage2_node, "cooler stage2_node")?;
    if project.cooler.stage1_node == project.cooler.stage2_node {
        return Err(ValidationError::InvalidValue {
            field: "cooler".to_string(),
            value: project.cooler.stage1_node.clone(),
            reason: "stage nodes must be distinct".to_string(),
        });
    }

    if project.run.iterations == 0 {
        return Err(ValidationError::InvalidValue {
            field: "run iterations".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if !project.run.dt_initial_s.is_finite() || project.run.dt_initial_s <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "run dt_initial_s".to_string(),
            value: project.run.dt_initial_s.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    if project.run.record_every == 0 {
        return Err(ValidationError::InvalidValue {
            field: "run record_every".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}

fn validate_stage(stage: &StageDef) -> Result<(), ValidationError> {
    if stage.slices < 2 {
        return Err(ValidationError::InvalidValue {
            field: format!("stage '{}' slices", stage.name),
            value: stage.slices.to_string(),
            reason: "must be at least 2".to_string(),
        });
    }
    validate_positive_finite("radius_m", stage.radius_m, &stage.name)?;
    validate_positive_finite("thickness_m", stage.thickness_m, &stage.name)?;
    validate_positive_finite("density_kg_m3", stage.density_kg_m3, &stage.name)?;
    if stage.suffix.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("stage '{}' suffix", stage.name),
            value: String::new(),
            reason: "must be non-empty".to_string(),
        });
    }
    Ok(())
}

/// A cooler node name must be `<index><suffix>` for some stage, with the
/// index inside that stage's slice range.
fn validate_stage_node(
    project: &Project,
    node: &str,
    context: &str,
) -> Result<(), ValidationError> {
    for stage in &project.stages {
        if let Some(prefix) = node.strip_suffix(stage.suffix.as_str()) {
            if let Ok(index) = prefix.parse::<usize>() {
                if index < stage.slices {
                    return Ok(());
                }
            }
        }
    }
    Err(ValidationError::MissingReference {
        name: node.to_string(),
        context: context.to_string(),
    })
}

fn validate_positive_finite(
    field: &str,
    value: f64,
    stage_name: &str,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("stage '{}' {}", stage_name, field),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}
