#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gtm(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gtm").unwrap();
    cmd.current_dir(dir.path()).env_remove("GTM_CONFIG");
    cmd
}

fn plan_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = gtm(dir)
        .args(["plan", "--json"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// gtm init / config
// ---------------------------------------------------------------------------

#[test]
fn init_writes_default_config() {
    let dir = TempDir::new().unwrap();
    gtm(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = std::fs::read_to_string(dir.path().join("gtm.yaml")).unwrap();
    assert!(content.contains("strict_options: false"));
    assert!(content.contains("port: 3141"));
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("gtm.yaml"), "strict_options: true\n").unwrap();
    gtm(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(dir.path().join("gtm.yaml")).unwrap();
    assert_eq!(content, "strict_options: true\n");
}

#[test]
fn init_json_reports_outcome() {
    let dir = TempDir::new().unwrap();
    let first = gtm(&dir).args(["init", "--json"]).output().unwrap();
    let first: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(first["outcome"], "created");

    let second = gtm(&dir).args(["init", "--json"]).output().unwrap();
    let second: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(second["outcome"], "kept");
    assert_eq!(second["created"], false);
}

#[test]
fn config_validate_default_is_clean() {
    let dir = TempDir::new().unwrap();
    gtm(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_fails_on_errors() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("gtm.yaml"), "version: 2\n").unwrap();
    gtm(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("unsupported config version 2"));
}

#[test]
fn config_show_reports_discovered_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("gtm.yaml"), "server:\n  port: 9000\n").unwrap();
    gtm(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port: 9000"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    gtm(&dir)
        .args(["--config", "nope.yaml", "plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config not found"));
}

// ---------------------------------------------------------------------------
// gtm plan
// ---------------------------------------------------------------------------

#[test]
fn plan_with_no_input_renders_markdown() {
    let dir = TempDir::new().unwrap();
    gtm(&dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Your Product Launch Command"))
        .stdout(predicate::str::contains("## Channel Battleplan"))
        .stdout(predicate::str::contains("## Next Agentic Steps"));
}

#[test]
fn plan_json_has_every_section() {
    let dir = TempDir::new().unwrap();
    let json = plan_json(&dir, &[]);
    for key in [
        "executiveSummary",
        "keyObjectives",
        "audienceProfile",
        "messagingPillars",
        "channelPlan",
        "launchTimeline",
        "contentFactory",
        "growthExperiments",
        "measurementFramework",
        "riskMitigation",
        "followUps",
    ] {
        assert!(!json["plan"][key].as_array().unwrap().is_empty(), "{key}");
    }
}

#[test]
fn plan_flags_drive_tables() {
    let dir = TempDir::new().unwrap();
    let short = plan_json(&dir, &["--timeline", "2-weeks", "--budget", "lean"]);
    let long = plan_json(&dir, &["--timeline", "half-year", "--budget", "aggressive"]);
    assert!(
        long["plan"]["launchTimeline"].as_array().unwrap().len()
            > short["plan"]["launchTimeline"].as_array().unwrap().len()
    );
    assert_ne!(short["plan"]["channelPlan"], long["plan"]["channelPlan"]);
}

#[test]
fn plan_reads_stdin_payload() {
    let dir = TempDir::new().unwrap();
    gtm(&dir)
        .args(["plan", "--input", "-"])
        .write_stdin(r#"{"productName": "Atlas IQ", "focusAreas": ["positioning", 42, null]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Atlas IQ Launch Command"))
        .stdout(predicate::str::contains("Positioning & Narrative"));
}

#[test]
fn plan_rejects_non_object_payload() {
    let dir = TempDir::new().unwrap();
    gtm(&dir)
        .args(["plan", "--input", "-"])
        .write_stdin("[1, 2, 3]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid payload"));
}

#[test]
fn plan_strict_flag_rejects_unknown_stage() {
    let dir = TempDir::new().unwrap();
    gtm(&dir)
        .args(["plan", "--stage", "series-b", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid stage 'series-b'"));
}

#[test]
fn plan_lenient_defaults_unknown_stage() {
    let dir = TempDir::new().unwrap();
    gtm(&dir)
        .args(["plan", "--stage", "series-b"])
        .assert()
        .success();
}

#[test]
fn plan_strict_from_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("gtm.yaml"), "strict_options: true\n").unwrap();
    gtm(&dir)
        .args(["plan", "--budget", "unlimited"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid budgetLevel"));
}

#[test]
fn plan_writes_output_file() {
    let dir = TempDir::new().unwrap();
    gtm(&dir)
        .args(["plan", "--product-name", "Atlas", "--output", "plan.md"])
        .assert()
        .success();
    let content = std::fs::read_to_string(dir.path().join("plan.md")).unwrap();
    assert!(content.starts_with("# Atlas Launch Command"));
}

// ---------------------------------------------------------------------------
// gtm options
// ---------------------------------------------------------------------------

#[test]
fn options_table_lists_labels() {
    let dir = TempDir::new().unwrap();
    gtm(&dir)
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("stage (default: beta)"))
        .stdout(predicate::str::contains("half-year"))
        .stdout(predicate::str::contains("Lean (scrappy, <$10k/month)"));
}
