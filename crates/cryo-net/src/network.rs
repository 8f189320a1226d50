//! Arena-indexed directed thermal network.

use std::collections::HashMap;

use cryo_core::{EdgeId, MaterialId, NodeId};
use cryo_materials::{EvalOptions, MaterialLibrary};

use crate::error::{NetError, NetResult};
use crate::node::{ThermalNode, PROPERTY_FLOOR_K};

/// A directed conductive coupling between two nodes.
///
/// The geometric factor (cross-sectional area over separation distance) is
/// fixed at construction; conductance is this factor times the material's
/// conductivity at the lower of the two endpoint temperatures.
#[derive(Debug, Clone)]
pub struct ConductiveEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub material: MaterialId,
    /// Area / distance, in meters.
    pub geometry_m: f64,
}

/// Directed graph of thermal nodes; nodes are unique by name and at most one
/// edge exists per ordered node pair. Iteration order is insertion order,
/// which fixes the output column order.
#[derive(Debug, Default)]
pub struct ThermalNetwork {
    materials: MaterialLibrary,
    nodes: Vec<ThermalNode>,
    edges: Vec<ConductiveEdge>,
    by_name: HashMap<String, NodeId>,
}

impl ThermalNetwork {
    pub fn new(materials: MaterialLibrary) -> Self {
        Self {
            materials,
            nodes: Vec::new(),
            edges: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        material: MaterialId,
        mass_kg: f64,
        temperature_k: f64,
    ) -> NetResult<NodeId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(NetError::DuplicateNode { name });
        }
        if self.materials.get(material).is_none() {
            return Err(NetError::InvalidMaterialId { id: material });
        }
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.nodes.push(ThermalNode {
            name,
            material,
            mass_kg,
            temperature_k,
        });
        Ok(id)
    }

    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        material: MaterialId,
        geometry_m: f64,
    ) -> NetResult<EdgeId> {
        if self.node(source).is_none() {
            return Err(NetError::InvalidNodeId { id: source });
        }
        if self.node(target).is_none() {
            return Err(NetError::InvalidNodeId { id: target });
        }
        if self.materials.get(material).is_none() {
            return Err(NetError::InvalidMaterialId { id: material });
        }
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return Err(NetError::DuplicateEdge { src: source, target });
        }
        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(ConductiveEdge {
            source,
            target,
            material,
            geometry_m,
        });
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&ThermalNode> {
        self.nodes.get(id.index() as usize)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn nodes(&self) -> &[ThermalNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[ConductiveEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Snapshot of all node temperatures in insertion order.
    pub fn temperatures(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.temperature_k).collect()
    }

    /// Conductance of an edge at the lower endpoint temperature, W/K.
    ///
    /// Uses the cached conductivity lookup; this is the hot-loop call site
    /// the material cache exists for.
    pub fn conductance(&self, edge: &ConductiveEdge, t_low_k: f64) -> NetResult<f64> {
        let material = self
            .materials
            .get(edge.material)
            .ok_or(NetError::InvalidMaterialId { id: edge.material })?;
        let opts = EvalOptions::cached(Some(PROPERTY_FLOOR_K));
        Ok(material.conductivity(t_low_k, opts)? * edge.geometry_m)
    }

    /// Apply heat to one node with the clamping rules of
    /// [`ThermalNode::put_heat`].
    pub fn put_heat(
        &mut self,
        id: NodeId,
        q_j: f64,
        min_temp_k: f64,
        exact: bool,
    ) -> NetResult<()> {
        let node = self
            .nodes
            .get_mut(id.index() as usize)
            .ok_or(NetError::InvalidNodeId { id })?;
        let material = self
            .materials
            .get(node.material)
            .ok_or(NetError::InvalidMaterialId { id: node.material })?;
        node.put_heat(q_j, material, min_temp_k, exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryo_materials::Material;

    fn library() -> (MaterialLibrary, MaterialId) {
        let mut lib = MaterialLibrary::new();
        let id = lib
            .insert(Material::new("unit", vec![0.0], vec![0.0]).unwrap())
            .unwrap();
        (lib, id)
    }

    #[test]
    fn duplicate_node_names_rejected() {
        let (lib, mat) = library();
        let mut net = ThermalNetwork::new(lib);
        net.add_node("a", mat, 1.0, 300.0).unwrap();
        assert!(net.add_node("a", mat, 1.0, 300.0).is_err());
    }

    #[test]
    fn duplicate_edges_rejected() {
        let (lib, mat) = library();
        let mut net = ThermalNetwork::new(lib);
        let a = net.add_node("a", mat, 1.0, 300.0).unwrap();
        let b = net.add_node("b", mat, 1.0, 300.0).unwrap();
        net.add_edge(a, b, mat, 1.0).unwrap();
        assert!(net.add_edge(a, b, mat, 2.0).is_err());
        // Opposite orientation is a different edge.
        net.add_edge(b, a, mat, 1.0).unwrap();
    }

    #[test]
    fn conductance_scales_with_geometry() {
        let (lib, mat) = library();
        let mut net = ThermalNetwork::new(lib);
        let a = net.add_node("a", mat, 1.0, 300.0).unwrap();
        let b = net.add_node("b", mat, 1.0, 300.0).unwrap();
        net.add_edge(a, b, mat, 2.5).unwrap();
        // Conductivity of the unit material is 10^0 = 1 for T >= 4.
        let g = net.conductance(&net.edges()[0], 100.0).unwrap();
        assert!((g - 2.5).abs() < 1e-9);
    }

    #[test]
    fn node_lookup_by_name() {
        let (lib, mat) = library();
        let mut net = ThermalNetwork::new(lib);
        let a = net.add_node("0_4K", mat, 1.0, 300.0).unwrap();
        assert_eq!(net.node_id("0_4K"), Some(a));
        assert_eq!(net.node_id("missing"), None);
    }
}
