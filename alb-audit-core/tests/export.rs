use std::path::PathBuf;

use alb_audit_core::{ExportRow, ReportAggregator, EXPORT_COLUMNS};
use pretty_assertions::assert_eq;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn single_unprotected_record_exports_empty_waf_fields() {
    let aggregator = ReportAggregator::from_slice(
        br#"[{
            "profile": "dev",
            "account_info": {"account_id": "999"},
            "scan_mode": "quick",
            "regions": [{"region": "us-east-2", "load_balancers": [{
                "basic_info": {
                    "LoadBalancerName": "solo",
                    "Type": "application",
                    "State": {"Code": "active"},
                    "Scheme": "internal",
                    "DNSName": "solo.example",
                    "VpcId": "vpc-1"
                },
                "waf_association": {"has_waf": false}
            }]}]
        }]"#,
    )
    .expect("parse");

    let rows = aggregator.export_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        ExportRow {
            account_id: "999".to_string(),
            profile: "dev".to_string(),
            region: "us-east-2".to_string(),
            name: "solo".to_string(),
            lb_type: "application".to_string(),
            state: "active".to_string(),
            scheme: "internal".to_string(),
            dns_name: "solo.example".to_string(),
            vpc_id: "vpc-1".to_string(),
            has_waf: "No".to_string(),
            waf_name: String::new(),
            waf_id: String::new(),
            waf_arn: String::new(),
            listener_count: 0,
            target_group_count: 0,
        }
    );
    assert_eq!(rows[0].to_record().len(), EXPORT_COLUMNS.len());
}

#[test]
fn export_follows_document_order_with_topology_counts() {
    let aggregator = ReportAggregator::load(&fixture("fixtures/mixed-modes.json")).expect("load");
    let rows = aggregator.export_rows();

    let summary = rows
        .iter()
        .map(|r| {
            (
                r.name.as_str(),
                r.has_waf.as_str(),
                r.listener_count,
                r.target_group_count,
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![
            ("Prod-Web-ALB", "Yes", 2, 1),
            ("prod-api-nlb", "No", 1, 1),
            ("legacy-portal", "No", 0, 0),
            ("staging-web", "Yes", 1, 1),
        ]
    );
    assert_eq!(rows[0].waf_name, "prod-web-acl");
    assert_eq!(rows[0].waf_id, "a1b2");
    assert!(rows[0].waf_arn.starts_with("arn:aws:wafv2:us-east-1"));
    assert_eq!(rows[0].lb_type, "ALB");
}

#[test]
fn json_export_uses_column_names() {
    let aggregator = ReportAggregator::load(&fixture("fixtures/coverage-two-accounts.json"))
        .expect("load");
    let json = alb_audit_core::format_json(&aggregator.export_rows());
    for column in EXPORT_COLUMNS {
        assert!(json.contains(&format!("\"{column}\"")), "missing {column}");
    }
}
