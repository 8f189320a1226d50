//! Thermal node state and heat application.

use cryo_core::MaterialId;
use cryo_materials::{EvalOptions, Material};

use crate::error::NetResult;

/// Every node starts at ambient and never exceeds it; heat that would push a
/// node above ambient is silently discarded.
pub const AMBIENT_TEMP_K: f64 = 300.0;

/// Extrapolation floor for property lookups inside the network (Kelvin).
pub const PROPERTY_FLOOR_K: f64 = 4.0;

/// A named vertex of the thermal network.
///
/// Owns a reference (by id) to a shared material, a mass computed from shell
/// geometry, and the only mutable state of the simulation: its temperature.
#[derive(Debug, Clone)]
pub struct ThermalNode {
    pub name: String,
    pub material: MaterialId,
    pub mass_kg: f64,
    pub temperature_k: f64,
}

impl ThermalNode {
    /// Apply a heat quantity `q_j` (Joules) to this node.
    ///
    /// The temperature change is `q / mass / specific_heat(T)`. The result is
    /// clamped: below `min_temp_k` the node is set exactly to `min_temp_k`;
    /// an update that would exceed ambient leaves the node unchanged.
    ///
    /// `exact` selects the un-cached polynomial for the specific-heat
    /// evaluation; the cached table is used otherwise.
    pub fn put_heat(
        &mut self,
        q_j: f64,
        material: &Material,
        min_temp_k: f64,
        exact: bool,
    ) -> NetResult<()> {
        let opts = EvalOptions {
            extrapolate_below: Some(PROPERTY_FLOOR_K),
            use_cache: !exact,
        };
        let specific_heat = material.specific_heat(self.temperature_k, opts)?;
        let delta = q_j / self.mass_kg / specific_heat;
        let next = self.temperature_k + delta;

        if next < min_temp_k {
            self.temperature_k = min_temp_k;
        } else if next > AMBIENT_TEMP_K {
            // Discarded; the vessel cannot be heated past ambient.
        } else {
            self.temperature_k = next;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryo_core::MaterialId;

    // Specific heat 10^0 = 1 J/(kg·K), so delta_T == q / mass.
    fn unit_material() -> Material {
        Material::new("unit", vec![0.0], vec![0.0]).unwrap()
    }

    fn node(temp: f64) -> ThermalNode {
        ThermalNode {
            name: "n".into(),
            material: MaterialId::from_index(0),
            mass_kg: 1.0,
            temperature_k: temp,
        }
    }

    #[test]
    fn zero_heat_leaves_temperature_unchanged() {
        let m = unit_material();
        let mut n = node(250.0);
        n.put_heat(0.0, &m, 4.0, true).unwrap();
        assert_eq!(n.temperature_k, 250.0);
    }

    #[test]
    fn cooling_moves_temperature_down() {
        let m = unit_material();
        let mut n = node(250.0);
        n.put_heat(-10.0, &m, 4.0, true).unwrap();
        assert!((n.temperature_k - 240.0).abs() < 1e-12);
    }

    #[test]
    fn clamps_exactly_to_min_temp() {
        let m = unit_material();
        let mut n = node(10.0);
        n.put_heat(-1e6, &m, 4.0, true).unwrap();
        assert_eq!(n.temperature_k, 4.0);
    }

    #[test]
    fn heat_above_ambient_is_discarded() {
        let m = unit_material();
        let mut n = node(299.0);
        n.put_heat(100.0, &m, 4.0, true).unwrap();
        assert_eq!(n.temperature_k, 299.0);
    }

    #[test]
    fn result_stays_within_bounds() {
        let m = unit_material();
        for q in [-1e9, -1.0, 0.0, 0.5, 1e9] {
            let mut n = node(150.0);
            n.put_heat(q, &m, 4.0, true).unwrap();
            assert!(n.temperature_k >= 4.0);
            assert!(n.temperature_k <= AMBIENT_TEMP_K);
        }
    }
}
