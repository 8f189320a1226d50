//! Arena of shared materials resolved by name.

use std::collections::HashMap;

use cryo_core::MaterialId;

use crate::error::{MaterialError, MaterialResult};
use crate::material::Material;

/// Owns every material of a model; nodes and edges reference entries by
/// `MaterialId` so many of them can share one instance (and its caches).
#[derive(Debug, Default)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
    by_name: HashMap<String, MaterialId>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material, rejecting duplicate names.
    pub fn insert(&mut self, material: Material) -> MaterialResult<MaterialId> {
        if self.by_name.contains_key(material.name()) {
            return Err(MaterialError::DuplicateName {
                name: material.name().to_string(),
            });
        }
        let id = MaterialId::from_index(self.materials.len() as u32);
        self.by_name.insert(material.name().to_string(), id);
        self.materials.push(material);
        Ok(id)
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.index() as usize)
    }

    pub fn id_of(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> MaterialResult<MaterialId> {
        self.id_of(name).ok_or_else(|| MaterialError::UnknownMaterial {
            name: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
