#![cfg(feature = "cli")]

use predicates::prelude::*;

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("oxygen_rs");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_converts_single_value_from_flags() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("oxygen_rs");
    cmd.args([
        "--from", "conc", "--to", "pres", "--value", "2", "-t", "2", "-s", "2", "-p", "2",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("partial_pressure: 0.98904"));
}

#[test]
fn cli_accepts_negative_temperatures_and_value_lists() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("oxygen_rs");
    cmd.args([
        "--json", "--from", "sat", "--to", "conc", "--value", "90,100", "-t", "-1.5", "-s",
        "34.5",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"values\""))
        .stdout(predicate::str::contains("\"unit\": \"umol/L\""));
}

#[test]
fn cli_works_with_request_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("oxygen_rs");
    let request = serde_json::json!({
        "from": "saturation",
        "to": "partial_pressure",
        "samples": [
            { "value": 2.0, "t_c": 2.0, "s": 2.0, "p_dbar": 2.0, "p_atm": 1000.0 }
        ]
    })
    .to_string();

    cmd.arg("--request-json").arg(request);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4.15969"));
}

#[test]
fn cli_works_with_stdin_document_and_default_pressures() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("oxygen_rs");

    let doc = serde_json::json!({
        "from": "concentration",
        "to": "saturation",
        "samples": [
            { "value": 282.015, "t_c": 10.0, "s": 35.0 }
        ]
    })
    .to_string();

    cmd.arg("--input").arg("-").write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("saturation: 100.0000"));
}

#[test]
fn cli_reports_domain_errors() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("oxygen_rs");
    cmd.args([
        "--from", "sat", "--to", "pres", "--value", "100", "-t", "20", "-s", "35", "--p-atm",
        "5",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Numeric domain error"));
}

#[test]
fn cli_rejects_unknown_quantity() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("oxygen_rs");
    cmd.args(["--from", "ppm", "--to", "sat", "--value", "1", "-t", "2", "-s", "2"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown oxygen quantity"));
}

#[test]
fn cli_reports_invalid_json_for_request_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("oxygen_rs");
    cmd.arg("--request-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --request-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("oxygen_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}
