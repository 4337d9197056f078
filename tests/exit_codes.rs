use std::process::Command;

fn origami() -> Command {
    Command::new(env!("CARGO_BIN_EXE_origami"))
}

#[test]
fn exit_code_usage_is_1_for_missing_args() {
    let status = origami().status().expect("run origami");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn exit_code_usage_is_1_for_unknown_flag() {
    let status = origami()
        .args(["pattern.yaml", "--frobnicate"])
        .status()
        .expect("run origami");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn exit_code_input_is_2_for_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.yaml");

    let status = origami()
        .arg(missing.to_string_lossy().as_ref())
        .status()
        .expect("run origami");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn exit_code_input_is_2_for_invalid_yaml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = dir.path().join("bad.yaml");
    std::fs::write(&bad, "pattern: [kresling,").expect("write bad yaml");

    let status = origami()
        .arg(bad.to_string_lossy().as_ref())
        .status()
        .expect("run origami");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn exit_code_input_is_2_for_unknown_pattern() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("waterbomb.yaml");
    std::fs::write(&config, "pattern: waterbomb\n").expect("write config");

    let status = origami()
        .arg(config.to_string_lossy().as_ref())
        .status()
        .expect("run origami");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn exit_code_processing_is_3_for_invalid_parameters() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("masu.yaml");
    std::fs::write(&config, "pattern: masu_box\nlength: 0\n").expect("write config");

    let status = origami()
        .arg(config.to_string_lossy().as_ref())
        .status()
        .expect("run origami");
    assert_eq!(status.code(), Some(3));
}

#[test]
fn renders_pattern_to_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("kresling.yaml");
    let output = dir.path().join("kresling.json");
    std::fs::write(
        &config,
        "pattern: kresling\nangle_ratio: 2\ncylinder:\n  sides: 5\n  rows: 2\n",
    )
    .expect("write config");

    let out = origami()
        .args([
            config.to_string_lossy().as_ref(),
            "--output",
            output.to_string_lossy().as_ref(),
            "--separate-edges",
        ])
        .output()
        .expect("run origami");
    assert!(
        out.status.success(),
        "origami failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(String::from_utf8_lossy(&out.stderr).contains("angle_ratio"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).expect("read output"))
            .expect("valid json");
    assert_eq!(json["pattern"], "kresling");
    assert_eq!(json["warnings"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["boundary"].as_array().map(Vec::len), Some(6));

    let tree = json["tree"].as_array().expect("tree is a group");
    assert_eq!(tree.len(), 5);
    let edges = tree[4].as_array().expect("edges group");
    assert_eq!(edges.len(), 6);
    assert!(edges.iter().all(|e| e["style"] == "edge"));
}

#[test]
fn writes_to_stdout_without_output_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("masu.yaml");
    std::fs::write(&config, "pattern: masu_box\n").expect("write config");

    let out = origami()
        .arg(config.to_string_lossy().as_ref())
        .output()
        .expect("run origami");
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    assert_eq!(json["pattern"], "masu_box");
    assert_eq!(json["boundary"][2], serde_json::json!({ "x": 10.0, "y": 10.0 }));
}
