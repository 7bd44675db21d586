use std::path::PathBuf;

use alb_audit_core::format::{
    format_advanced, format_coverage, format_load_balancers, format_search, format_without_waf,
};
use alb_audit_core::ReportAggregator;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn coverage_text_uses_one_decimal_percentages() {
    let aggregator =
        ReportAggregator::load(&fixture("fixtures/coverage-two-accounts.json")).expect("load");
    let text = format_coverage(&aggregator.waf_coverage());

    assert!(text.contains("- 111111111111 (prod): total=3 with_waf=2 (66.7%) without_waf=1 (33.3%)"));
    assert!(text.contains("- 222222222222 (dev): total=1 with_waf=0 (0.0%) without_waf=1 (100.0%)"));
    assert!(text.contains("- total=4 with_waf=2 (50.0%) without_waf=2 (50.0%)"));
}

#[test]
fn list_text_marks_waf_status() {
    let aggregator = ReportAggregator::load(&fixture("fixtures/mixed-modes.json")).expect("load");
    let text = format_load_balancers(&aggregator.list_all());

    assert!(text.contains("account 333333333333 (security-audit)"));
    assert!(text.contains("+ Prod-Web-ALB type=ALB state=active"));
    assert!(text.contains("waf=prod-web-acl"));
    assert!(text.contains("! legacy-portal type=ALB"));
}

#[test]
fn empty_results_have_explicit_lines() {
    let aggregator = ReportAggregator::from_slice(
        br#"[{"regions": [{"region": "us-east-1", "load_balancers": [
            {"basic_info": {"LoadBalancerName": "safe"}, "waf_association": {"has_waf": true}}
        ]}]}]"#,
    )
    .expect("parse");

    assert!(format_without_waf(&aggregator.find_without_waf())
        .contains("every load balancer has a WAF association"));
    assert_eq!(
        format_search("nope", &aggregator.search("nope")),
        "~ no load balancer name matches 'nope'"
    );
    assert!(format_advanced(&aggregator.advanced_statistics()).starts_with("~ unavailable"));
}

#[test]
fn advanced_text_lists_health_percentages() {
    let aggregator = ReportAggregator::load(&fixture("fixtures/mixed-modes.json")).expect("load");
    let text = format_advanced(&aggregator.advanced_statistics());

    assert!(text.contains("listeners total=4"));
    assert!(text.contains("- HTTPS: 2"));
    assert!(text.contains("listener_rules total=4"));
    assert!(text.contains("+ healthy: 3 (60.0%)"));
    assert!(text.contains("! unhealthy: 1 (20.0%)"));
    assert!(text.contains("~ draining: 1 (20.0%)"));
}
