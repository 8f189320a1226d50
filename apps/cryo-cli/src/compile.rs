//! Model assembly from a validated project.

use cryo_materials::{Material, MaterialLibrary};
use cryo_net::{add_spherical_shell, ShellSpec, ThermalNetwork};
use cryo_ptc::PtcModel;
use cryo_project::Project;
use cryo_sim::{Cooldown, SimOptions};

use crate::error::AppResult;

/// Build the thermal network from the project stages and wire up the cooler.
pub fn assemble(project: &Project, ptc: PtcModel, opts: SimOptions) -> AppResult<Cooldown> {
    let mut library = MaterialLibrary::new();
    for (name, tsv) in &project.materials {
        library.insert(Material::from_tsv(name.clone(), tsv)?)?;
    }

    let mut net = ThermalNetwork::new(library);
    for stage in &project.stages {
        let material = net.materials().resolve(&stage.material)?;
        let spec = ShellSpec {
            slices: stage.slices,
            radius_m: stage.radius_m,
            thickness_m: stage.thickness_m,
            density_kg_m3: stage.density_kg_m3,
            suffix: stage.suffix.clone(),
        };
        add_spherical_shell(&mut net, &spec, material)?;
    }

    let sim = Cooldown::new(
        net,
        ptc,
        &project.cooler.stage1_node,
        &project.cooler.stage2_node,
        opts,
    )?;
    Ok(sim)
}
