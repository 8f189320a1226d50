//! Spherical shell discretization.
//!
//! Slices a spherical shell uniformly in polar angle into a chain of nodes
//! connected by conductive edges. Multiple shells (e.g. an inner 4 K stage
//! and an outer 40 K stage) can be added to the same network using disjoint
//! name suffixes; any cross-shell coupling is injected by the integrator.

use std::f64::consts::PI;

use cryo_core::{MaterialId, NodeId};

use crate::error::{NetError, NetResult};
use crate::network::ThermalNetwork;
use crate::node::AMBIENT_TEMP_K;

/// Geometry of one shell stage.
#[derive(Debug, Clone)]
pub struct ShellSpec {
    /// Number of polar slices, at least 2.
    pub slices: usize,
    pub radius_m: f64,
    pub thickness_m: f64,
    pub density_kg_m3: f64,
    /// Appended to the slice index to form node names, e.g. `_4K` -> `0_4K`.
    pub suffix: String,
}

/// Add one shell as a chain of `slices` nodes and return their ids in order.
///
/// Slice `i` spans polar angles `[i*pi/n, (i+1)*pi/n]`. Its mass is
/// `-2*pi*r^2*(cos th_{i+1} - cos th_i)*thickness*density` (the cosine
/// difference is negative on `[0, pi]`, so the product is positive). The edge
/// between slices `i` and `i+1` carries the fixed geometric factor
/// `2*pi*r*thickness*sin th_{i+1} / (2r/n)`.
pub fn add_spherical_shell(
    net: &mut ThermalNetwork,
    spec: &ShellSpec,
    material: MaterialId,
) -> NetResult<Vec<NodeId>> {
    if spec.slices < 2 {
        return Err(NetError::InvalidGeometry {
            what: "slices must be at least 2",
        });
    }
    if spec.radius_m <= 0.0 {
        return Err(NetError::InvalidGeometry {
            what: "radius must be positive",
        });
    }
    if spec.thickness_m <= 0.0 {
        return Err(NetError::InvalidGeometry {
            what: "thickness must be positive",
        });
    }
    if spec.density_kg_m3 <= 0.0 {
        return Err(NetError::InvalidGeometry {
            what: "density must be positive",
        });
    }

    let n = spec.slices;
    let theta = |j: usize| j as f64 * PI / n as f64;

    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let mass_kg = -2.0
            * PI
            * spec.radius_m.powi(2)
            * (theta(i + 1).cos() - theta(i).cos())
            * spec.thickness_m
            * spec.density_kg_m3;
        let name = format!("{i}{}", spec.suffix);
        ids.push(net.add_node(name, material, mass_kg, AMBIENT_TEMP_K)?);
    }

    let distance_m = 2.0 * spec.radius_m / n as f64;
    for i in 0..n - 1 {
        let area_m2 = 2.0 * PI * spec.radius_m * spec.thickness_m * theta(i + 1).sin();
        net.add_edge(ids[i], ids[i + 1], material, area_m2 / distance_m)?;
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryo_materials::{Material, MaterialLibrary};

    fn network() -> (ThermalNetwork, MaterialId) {
        let mut lib = MaterialLibrary::new();
        let mat = lib
            .insert(Material::new("unit", vec![0.0], vec![0.0]).unwrap())
            .unwrap();
        (ThermalNetwork::new(lib), mat)
    }

    fn spec(slices: usize) -> ShellSpec {
        ShellSpec {
            slices,
            radius_m: 0.5,
            thickness_m: 0.002,
            density_kg_m3: 8000.0,
            suffix: "_4K".into(),
        }
    }

    #[test]
    fn chain_structure_and_names() {
        let (mut net, mat) = network();
        let ids = add_spherical_shell(&mut net, &spec(4), mat).unwrap();
        assert_eq!(ids.len(), 4);
        assert_eq!(net.edge_count(), 3);
        assert_eq!(net.node(ids[0]).unwrap().name, "0_4K");
        assert_eq!(net.node(ids[3]).unwrap().name, "3_4K");
        for id in &ids {
            assert_eq!(net.node(*id).unwrap().temperature_k, AMBIENT_TEMP_K);
        }
    }

    #[test]
    fn slice_masses_are_positive_and_sum_to_shell_mass() {
        let (mut net, mat) = network();
        let s = spec(10);
        let ids = add_spherical_shell(&mut net, &s, mat).unwrap();

        let mut total = 0.0;
        for id in &ids {
            let m = net.node(*id).unwrap().mass_kg;
            assert!(m > 0.0, "slice mass must come out positive");
            total += m;
        }
        // Sum telescopes to 4*pi*r^2*t*rho regardless of slice count.
        let expected = 4.0 * PI * s.radius_m.powi(2) * s.thickness_m * s.density_kg_m3;
        assert!((total - expected).abs() < 1e-9 * expected);
    }

    #[test]
    fn edge_geometry_uses_downstream_angle() {
        let (mut net, mat) = network();
        let s = spec(4);
        add_spherical_shell(&mut net, &s, mat).unwrap();

        let distance = 2.0 * s.radius_m / 4.0;
        for (i, edge) in net.edges().iter().enumerate() {
            let th = (i + 1) as f64 * PI / 4.0;
            let area = 2.0 * PI * s.radius_m * s.thickness_m * th.sin();
            assert!((edge.geometry_m - area / distance).abs() < 1e-12);
        }
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        let (mut net, mat) = network();
        let mut s = spec(1);
        assert!(add_spherical_shell(&mut net, &s, mat).is_err());
        s.slices = 4;
        s.radius_m = 0.0;
        assert!(add_spherical_shell(&mut net, &s, mat).is_err());
        s.radius_m = 0.5;
        s.density_kg_m3 = -1.0;
        assert!(add_spherical_shell(&mut net, &s, mat).is_err());
    }

    #[test]
    fn two_shells_with_disjoint_suffixes() {
        let (mut net, mat) = network();
        add_spherical_shell(&mut net, &spec(4), mat).unwrap();
        let mut outer = spec(4);
        outer.suffix = "_40K".into();
        add_spherical_shell(&mut net, &outer, mat).unwrap();
        assert_eq!(net.node_count(), 8);
        assert!(net.node_id("0_4K").is_some());
        assert!(net.node_id("0_40K").is_some());
    }
}
