use std::collections::BTreeMap;

use cryo_project::schema::*;
use cryo_project::{load_yaml, save_yaml, validate_project};

fn two_stage_project() -> Project {
    let mut materials = BTreeMap::new();
    materials.insert(
        "steel".to_string(),
        "c0\t-2.0\t0.0\nc1\t0.5\t1.2\n".to_string(),
    );

    Project {
        name: "Spheric Cryostat".to_string(),
        materials,
        stages: vec![
            StageDef {
                name: "inner".to_string(),
                material: "steel".to_string(),
                slices: 4,
                radius_m: 0.3,
                thickness_m: 0.002,
                density_kg_m3: 8000.0,
                suffix: "_4K".to_string(),
            },
            StageDef {
                name: "outer".to_string(),
                material: "steel".to_string(),
                slices: 6,
                radius_m: 0.5,
                thickness_m: 0.003,
                density_kg_m3: 8000.0,
                suffix: "_40K".to_string(),
            },
        ],
        cooler: CoolerDef::default(),
        run: RunDef {
            iterations: 1000,
            dt_initial_s: 20.0,
            record_every: 10,
        },
    }
}

#[test]
fn roundtrip_yaml_two_stage_project() {
    let project = two_stage_project();
    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("cryo_project_roundtrip.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn defaults_fill_missing_run_and_cooler() {
    let yaml = r#"
name: minimal
materials:
  steel: "c0\t-2.0\t0.0"
stages:
  - name: inner
    material: steel
    slices: 4
    radius_m: 0.3
    thickness_m: 0.002
    density_kg_m3: 8000.0
    suffix: _4K
  - name: outer
    material: steel
    slices: 4
    radius_m: 0.5
    thickness_m: 0.002
    density_kg_m3: 8000.0
    suffix: _40K
cooler: {}
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    validate_project(&project).unwrap();

    assert_eq!(project.cooler.stage1_node, "0_40K");
    assert_eq!(project.cooler.stage2_node, "0_4K");
    assert_eq!(project.run.iterations, 200_000);
    assert_eq!(project.run.dt_initial_s, 20.0);
    assert_eq!(project.run.record_every, 1);
}

#[test]
fn validation_fails_on_missing_material() {
    let mut project = two_stage_project();
    project.stages[0].material = "unobtainium".to_string();
    assert!(validate_project(&project).is_err());
}

#[test]
fn validation_fails_on_bad_geometry() {
    let mut project = two_stage_project();
    project.stages[0].slices = 1;
    assert!(validate_project(&project).is_err());

    let mut project = two_stage_project();
    project.stages[1].radius_m = 0.0;
    assert!(validate_project(&project).is_err());

    let mut project = two_stage_project();
    project.stages[1].density_kg_m3 = f64::NAN;
    assert!(validate_project(&project).is_err());
}

#[test]
fn validation_fails_on_duplicate_suffix() {
    let mut project = two_stage_project();
    project.stages[1].suffix = "_4K".to_string();
    assert!(validate_project(&project).is_err());
}

#[test]
fn validation_checks_cooler_node_names() {
    let mut project = two_stage_project();
    project.cooler.stage2_node = "9_4K".to_string(); // index beyond slices
    assert!(validate_project(&project).is_err());

    let mut project = two_stage_project();
    project.cooler.stage1_node = "0_77K".to_string(); // unknown suffix
    assert!(validate_project(&project).is_err());

    let mut project = two_stage_project();
    project.cooler.stage1_node = project.cooler.stage2_node.clone();
    assert!(validate_project(&project).is_err());
}
