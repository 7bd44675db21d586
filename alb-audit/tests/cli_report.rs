use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn alb_audit() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("alb-audit"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_run_prints_sections_in_fixed_order() {
    let output = alb_audit()
        .arg(fixture("fixtures/mixed-modes.json"))
        .output()
        .expect("run");
    assert!(output.status.success(), "default run should succeed");

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let positions = [
        "scan_info",
        "load_balancers",
        "waf_coverage",
        "advanced_stats",
        "by_type",
        "by_region",
    ]
    .iter()
    .map(|heading| stdout.find(heading).expect("heading present"))
    .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(stdout.contains("without_waf="));
    assert!(!stdout.lines().any(|line| line == "without_waf"));
}

#[test]
fn coverage_reports_account_and_global_percentages() {
    alb_audit()
        .arg(fixture("fixtures/coverage-two-accounts.json"))
        .arg("--waf-coverage")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan_info"))
        .stdout(predicate::str::contains(
            "- 111111111111 (prod): total=3 with_waf=2 (66.7%)",
        ))
        .stdout(predicate::str::contains(
            "- 222222222222 (dev): total=1 with_waf=0 (0.0%)",
        ))
        .stdout(predicate::str::contains("- total=4 with_waf=2 (50.0%)"));
}

#[test]
fn no_waf_audit_lists_unprotected_load_balancers() {
    alb_audit()
        .arg(fixture("fixtures/mixed-modes.json"))
        .arg("--no-waf")
        .assert()
        .success()
        .stdout(predicate::str::contains("! prod-api-nlb type=NLB scheme=internal"))
        .stdout(predicate::str::contains("! legacy-portal"))
        .stdout(predicate::str::contains("staging-web").not());
}

#[test]
fn stats_on_quick_scan_reports_unavailable() {
    alb_audit()
        .arg(fixture("fixtures/coverage-two-accounts.json"))
        .arg("--stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("~ unavailable"))
        .stdout(predicate::str::contains("scan_mode=standard"));
}

#[test]
fn search_is_case_insensitive() {
    let lower = alb_audit()
        .arg(fixture("fixtures/mixed-modes.json"))
        .args(["--search", "prod"])
        .output()
        .expect("run");
    let upper = alb_audit()
        .arg(fixture("fixtures/mixed-modes.json"))
        .args(["--search", "PROD"])
        .output()
        .expect("run");
    assert!(lower.status.success() && upper.status.success());

    let lower = String::from_utf8(lower.stdout).expect("utf8");
    let upper = String::from_utf8(upper.stdout).expect("utf8");
    assert!(lower.contains("+ Prod-Web-ALB"));
    assert!(lower.contains("! prod-api-nlb"));
    assert_eq!(
        lower.replace("search 'prod'", ""),
        upper.replace("search 'PROD'", "")
    );
}

#[test]
fn json_format_contains_only_selected_sections() {
    let output = alb_audit()
        .arg(fixture("fixtures/mixed-modes.json"))
        .args(["--by-type", "--stats", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success(), "json run should succeed");

    let report: Value = serde_json::from_slice(&output.stdout).expect("json parse");
    assert_eq!(report["by_type"][0]["friendly_type"], "ALB");
    assert_eq!(report["by_type"][0]["count"], 3);
    assert_eq!(report["advanced"]["status"], "available");
    assert_eq!(report["advanced"]["total_listeners"], 4);
    assert_eq!(report["advanced"]["full"]["total_rules"], 4);
    assert!(report.get("scan_info").is_some());
    assert!(report.get("coverage").is_none());
}

#[test]
fn malformed_document_fails_without_partial_report() {
    alb_audit()
        .arg(fixture("fixtures/malformed-top-level.json"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("list of account objects"));

    alb_audit()
        .arg(fixture("fixtures/missing-waf.json"))
        .arg("--list")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("has no waf_association"));
}

#[test]
fn config_file_overrides_default_sections() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("report.toml");
    fs::write(
        &config,
        r#"
default_sections = ["by-region"]

[mode_labels]
quick = "Q"
standard = "S"
full = "F"
unknown = "U"
"#,
    )
    .expect("write config");

    alb_audit()
        .arg(fixture("fixtures/coverage-two-accounts.json"))
        .arg("--config")
        .arg(path_as_str(&config))
        .assert()
        .success()
        .stdout(predicate::str::contains("by_region"))
        .stdout(predicate::str::contains("- us-east-1: total=3 with_waf=1 (33.3%)"))
        .stdout(predicate::str::contains("load_balancers").not());
}

#[test]
fn broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("report.toml");
    fs::write(&config, "default_sections = [").expect("write config");

    alb_audit()
        .arg(fixture("fixtures/coverage-two-accounts.json"))
        .arg("--config")
        .arg(path_as_str(&config))
        .assert()
        .success()
        .stdout(predicate::str::contains("waf_coverage"))
        .stderr(predicate::str::contains("using embedded defaults"));
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}
