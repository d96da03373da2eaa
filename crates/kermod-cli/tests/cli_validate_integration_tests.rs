//! CLI integration tests
//!
//! Drives the compiled binary against model record files on disk.

use kermod_core::model::{Element, Feature, Model, MultiplicityRange, Type};
use kermod_core::serialize::serialize_model;
use std::io::Write;
use std::process::Command;

fn write_record(model: &Model) -> tempfile::NamedTempFile {
    let record = serialize_model(model).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string_pretty(&record).unwrap()).unwrap();
    file.flush().unwrap();
    file
}

fn kermod() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kermod"))
}

fn clean_model() -> Model {
    let mut model = Model::new("m-clean");
    let mut ty = Type::new("t-1");
    ty.add_feature(Feature::new("f-1"));
    model.add_element(Element::Type(ty));
    model
}

fn broken_model() -> Model {
    let mut model = clean_model();
    model.add_element(Element::Multiplicity(MultiplicityRange::new("m-bad", 5, 3)));
    model
}

#[test]
fn test_validate_clean_model_exits_zero() {
    let file = write_record(&clean_model());

    let output = kermod().arg("validate").arg(file.path()).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 issue(s) found"));
}

#[test]
fn test_validate_broken_model_exits_nonzero() {
    let file = write_record(&broken_model());

    let output = kermod().arg("validate").arg(file.path()).output().unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ERR_INVALID_UPPER_BOUND"));
    assert!(stdout.contains("m-bad"));
}

#[test]
fn test_validate_json_report() {
    let file = write_record(&broken_model());

    let output = kermod()
        .arg("validate")
        .arg(file.path())
        .arg("--json")
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["issue_count"], 1);
    assert_eq!(report["issues"][0]["code"], "ERR_INVALID_UPPER_BOUND");
}

#[test]
fn test_roundtrip_command_confirms_stability() {
    let file = write_record(&clean_model());

    let output = kermod().arg("roundtrip").arg(file.path()).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("round trip OK"));
}

#[test]
fn test_inspect_command_counts_kinds() {
    let file = write_record(&broken_model());

    let output = kermod().arg("inspect").arg(file.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("m-clean"));
    assert!(stdout.contains("elements: 2"));
    assert!(stdout.contains("digest:"));
}

#[test]
fn test_unreadable_file_reports_error() {
    let output = kermod()
        .arg("validate")
        .arg("/definitely/not/here.json")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read"));
}
