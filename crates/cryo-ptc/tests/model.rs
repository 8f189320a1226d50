//! Integration tests for the PTC load model.

use cryo_ptc::{LoadCurveTable, PtcModel};

/// 3x3 grid: T1 in {30, 50, 70}, T2 in {4, 8, 12},
/// load_1 = T1 - 30, load_2 = T2 - 4.
fn grid_csv() -> String {
    let mut csv = String::from("T1,T2,load_1,load_2\n");
    for t1 in [30.0_f64, 50.0, 70.0] {
        for t2 in [4.0_f64, 8.0, 12.0] {
            csv.push_str(&format!("{},{},{},{}\n", t1, t2, t1 - 30.0, t2 - 4.0));
        }
    }
    csv
}

fn model() -> PtcModel {
    let table = LoadCurveTable::from_csv_str(&grid_csv()).unwrap();
    PtcModel::new(&table).unwrap()
}

#[test]
fn floor_temperatures_come_from_low_boundaries() {
    let m = model();
    assert_eq!(m.t1_min(), 30.0);
    assert_eq!(m.t2_min(), 4.0);
}

#[test]
fn interior_power_is_negated_interpolation() {
    let m = model();
    // load_1(50, 8) = 20 on the linear field, so the stage power is -20.
    let p1 = m.power_stage1(50.0, 8.0).unwrap();
    assert!((p1 + 20.0).abs() < 1e-9, "p1 = {p1}");
    let p2 = m.power_stage2(50.0, 8.0).unwrap();
    assert!((p2 + 4.0).abs() < 1e-9, "p2 = {p2}");
}

#[test]
fn t1_below_envelope_clamps_to_global_minimum_load() {
    let m = model();
    // Below the sampled T1 range at an in-range T2: clamp to min load_1 = 0.
    for t1 in [0.5, 10.0, 29.0] {
        let p1 = m.power_stage1(t1, 8.0).unwrap();
        assert_eq!(p1, 0.0, "t1 = {t1}");
    }
}

#[test]
fn t1_above_envelope_clamps_to_global_maximum_load() {
    let m = model();
    let p1 = m.power_stage1(120.0, 8.0).unwrap();
    assert!((p1 + 40.0).abs() < 1e-12);
}

#[test]
fn t2_below_envelope_interpolates_low_boundary_for_load_1() {
    let m = model();
    // T2 below the envelope: load_1 follows the T2-low subset vs T1.
    let p1 = m.power_stage1(50.0, 1.0).unwrap();
    assert!((p1 + 20.0).abs() < 1e-9);
    // And load_2 clamps to its global minimum.
    let p2 = m.power_stage2(50.0, 1.0).unwrap();
    assert_eq!(p2, 0.0);
}

#[test]
fn t1_below_envelope_interpolates_low_boundary_for_load_2() {
    let m = model();
    // Out of hull left of the envelope: load_2 follows the T1-low subset
    // (T1 = 30 rows) as a function of T2: load_2(T2=8) = 4.
    let p2 = m.power_stage2(10.0, 8.0).unwrap();
    assert!((p2 + 4.0).abs() < 1e-9);
}

#[test]
fn t2_above_envelope_clamps_load_2_to_maximum() {
    let m = model();
    let p2 = m.power_stage2(50.0, 40.0).unwrap();
    assert!((p2 + 8.0).abs() < 1e-12);
}
