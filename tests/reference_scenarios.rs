use oxygen_rs::{o2c_to_o2p, o2c_to_o2s, o2p_to_o2c, o2p_to_o2s, o2s_to_o2c, o2s_to_o2p};

fn assert_rel(actual: f64, expected: f64) {
    let rel = ((actual - expected) / expected).abs();
    assert!(rel < 1e-5, "got {actual}, expected {expected} (rel err {rel:e})");
}

#[test]
fn concentration_to_partial_pressure() {
    assert_rel(o2c_to_o2p(2.0, 2.0, 2.0, 2.0), 0.98904);
}

#[test]
fn concentration_to_saturation() {
    assert_rel(o2c_to_o2s(2.0, 2.0, 2.0, 2.0, 1000.0), 0.475537);
}

#[test]
fn partial_pressure_to_concentration() {
    assert_rel(o2p_to_o2c(2.0, 2.0, 2.0, 2.0), 4.04431);
}

#[test]
fn partial_pressure_to_saturation() {
    assert_rel(o2p_to_o2s(2.0, 2.0, 2.0, 2.0, 1000.0), 0.96161);
}

#[test]
fn saturation_to_concentration() {
    assert_rel(o2s_to_o2c(2.0, 2.0, 2.0, 2.0, 1000.0), 8.41155);
}

#[test]
fn saturation_to_partial_pressure() {
    assert_rel(o2s_to_o2p(2.0, 2.0, 2.0, 2.0, 1000.0), 4.15969);
}
