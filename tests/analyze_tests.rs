use assert_fs::prelude::*;
use predicates::prelude::*;

const SYSTEM_YAML: &str = r#"
trials: 200
period_hours: 8760
seed: 42
load_levels:
  - magnitude: 600
    probability: 0.5
  - magnitude: 850
    probability: 0.5
generation_units:
  - name: G1
    capacity: 300
    unavailability: 0.05
  - name: G2
    capacity: 300
    unavailability: 0.08
  - name: G3
    capacity: 250
    unavailability: 0.1
"#;

#[test]
fn analyze_writes_yaml_output_and_prints_report() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("system.yaml");
    input.write_str(SYSTEM_YAML).unwrap();
    let output = temp.child("analysis.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("plole");
    cmd.args([
        "analyze",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Reliability Report"))
        .stdout(predicate::str::contains("Data source: system.yaml"))
        .stdout(predicate::str::contains("PLOLE:"))
        .stdout(predicate::str::contains("Analysis of 200 trials written to"));

    let contents = std::fs::read_to_string(output.path()).unwrap();
    assert!(contents.contains("report:"));
    assert!(contents.contains("plole:"));
    assert!(contents.contains("ploee:"));
    assert!(contents.contains("deficits:"));
    assert!(contents.contains("plole_contributions:"));
    assert_eq!(contents.matches("deficit_mw:").count(), 400);
}

#[test]
fn analyze_same_seed_produces_identical_json() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("system.yaml");
    input.write_str(SYSTEM_YAML).unwrap();

    let run = |name: &str| {
        let output = temp.child(name);
        let mut cmd = assert_cmd::cargo_bin_cmd!("plole");
        cmd.args([
            "analyze",
            "-i",
            input.path().to_str().unwrap(),
            "-o",
            output.path().to_str().unwrap(),
            "-n",
            "50",
            "--seed",
            "7",
            "--format",
            "json",
        ]);
        cmd.assert().success();
        std::fs::read_to_string(output.path()).unwrap()
    };

    let first = run("first.json");
    let second = run("second.json");
    assert!(first.trim_start().starts_with('{'));
    assert!(first.contains("\"trials\": 50"));
    assert_eq!(first, second);
}

#[test]
fn analyze_rejects_config_without_generation_units() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("empty.yaml");
    input
        .write_str("load_levels:\n  - { magnitude: 100, probability: 1.0 }\ngeneration_units: []\n")
        .unwrap();
    let output = temp.child("analysis.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("plole");
    cmd.args([
        "analyze",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("at least one generation unit is required"));
    output.assert(predicate::path::missing());
}

#[test]
fn analyze_rejects_zero_trials_override() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("system.yaml");
    input.write_str(SYSTEM_YAML).unwrap();
    let output = temp.child("analysis.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("plole");
    cmd.args([
        "analyze",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
        "-n",
        "0",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("trials must be greater than zero"));
}

#[test]
fn analyze_rejects_oversized_trials_override() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("system.yaml");
    input.write_str(SYSTEM_YAML).unwrap();
    let output = temp.child("analysis.yaml");
    let trials = (usize::MAX / 4).to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("plole");
    cmd.args([
        "analyze",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
        "-n",
        &trials,
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exceed the limit"));
    output.assert(predicate::path::missing());
}
