use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
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
fn csv_export_writes_header_and_one_row_per_load_balancer() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("albs.csv");

    alb_audit()
        .arg(fixture("fixtures/coverage-two-accounts.json"))
        .arg("--csv")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported 4 rows"));

    let csv = fs::read_to_string(&out).expect("read csv");
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "Account_ID,Profile,Region,ALB_Name,Type,State,Scheme,DNS_Name,VPC_ID,Has_WAF,WAF_Name,WAF_ID,WAF_ARN,Listener_Count,TargetGroup_Count"
    );
    assert_eq!(
        lines[2],
        "111111111111,prod,us-east-1,shop-admin,ALB,active,internal,shop-admin-5678.us-east-1.elb.amazonaws.com,vpc-0a1b2c3d,No,,,,0,0"
    );
    assert!(lines[1].contains(",Yes,shop-acl,11aa,arn:aws:wafv2:us-east-1:111111111111"));
    assert!(lines[4].starts_with("222222222222,dev,us-east-1,dev-sandbox,"));
}

#[test]
fn csv_export_keeps_json_stdout_clean() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("albs.csv");

    let output = alb_audit()
        .arg(fixture("fixtures/mixed-modes.json"))
        .arg("--csv")
        .arg(&out)
        .args(["--format", "json", "--log-level", "info"])
        .output()
        .expect("run");
    assert!(output.status.success(), "export should succeed");

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json parse");
    assert!(report.get("scan_info").is_some());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("exported 4 rows"));
    assert!(fs::read_to_string(&out).expect("read csv").contains("staging-web"));
}

#[test]
fn csv_export_refuses_to_overwrite_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("scan.json");
    fs::copy(fixture("fixtures/coverage-two-accounts.json"), &input).expect("copy fixture");

    alb_audit()
        .arg(&input)
        .arg("--csv")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite scan document"));

    let untouched = fs::read_to_string(&input).expect("read input");
    assert!(untouched.starts_with('['));
}
