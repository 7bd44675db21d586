//! Plain-text rendering of query results.
//!
//! Lines carry a leading marker so terminal renderers can style them without
//! re-parsing: `+` protected or healthy, `!` unprotected or unhealthy, `~` a
//! note, `-` a plain list item.

use crate::aggregate::{
    AccountGroup, AdvancedStats, CoverageReport, CoverageStats, LabelCount, RegionCoverage,
    SearchMatch, TypeCount,
};
use crate::model::LoadBalancer;

/// Format grouped load balancers with their WAF status.
pub fn format_load_balancers(groups: &[AccountGroup<'_>]) -> String {
    if groups.is_empty() {
        return "- none".to_string();
    }
    let mut lines = Vec::new();
    for group in groups {
        lines.push(format!("account {} ({})", group.account_id, group.profile));
        for region in &group.regions {
            lines.push(format!("  region {}", region.region));
            for lb in &region.load_balancers {
                lines.push(format!("    {}", summary_line(lb)));
            }
        }
    }
    lines.join("\n")
}

/// Format the unprotected-load-balancer audit.
pub fn format_without_waf(groups: &[AccountGroup<'_>]) -> String {
    if groups.is_empty() {
        return "+ every load balancer has a WAF association".to_string();
    }
    let mut lines = Vec::new();
    for group in groups {
        lines.push(format!("account {} ({})", group.account_id, group.profile));
        for region in &group.regions {
            lines.push(format!("  region {}", region.region));
            for lb in &region.load_balancers {
                lines.push(format!(
                    "    ! {} type={} scheme={} dns={}",
                    lb.basic.display_name(),
                    lb.basic.display_type(),
                    lb.basic.display_scheme(),
                    lb.basic.display_dns()
                ));
            }
        }
    }
    lines.join("\n")
}

pub fn format_coverage(report: &CoverageReport) -> String {
    let mut lines = vec!["by_account".to_string()];
    if report.accounts.is_empty() {
        lines.push("- none".to_string());
    }
    for account in &report.accounts {
        lines.push(format!(
            "- {} ({}): {}",
            account.account_id,
            account.profile,
            coverage_fields(&account.stats)
        ));
    }
    lines.push("global".to_string());
    lines.push(format!("- {}", coverage_fields(&report.global)));
    lines.join("\n")
}

pub fn format_type_distribution(rows: &[TypeCount]) -> String {
    if rows.is_empty() {
        return "- none".to_string();
    }
    rows.iter()
        .map(|row| format!("- {}: {}", row.friendly_type, row.count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_region_distribution(rows: &[RegionCoverage]) -> String {
    if rows.is_empty() {
        return "- none".to_string();
    }
    rows.iter()
        .map(|row| {
            format!(
                "- {}: total={} with_waf={} ({:.1}%)",
                row.region, row.total, row.with_waf, row.coverage_percent
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_search(pattern: &str, matches: &[SearchMatch<'_>]) -> String {
    if matches.is_empty() {
        return format!("~ no load balancer name matches '{pattern}'");
    }
    let mut lines = Vec::new();
    for hit in matches {
        lines.push(format!(
            "account {} ({}) region {}",
            hit.account_id, hit.profile, hit.region
        ));
        for lb in &hit.load_balancers {
            lines.push(format!("  {}", summary_line(lb)));
        }
    }
    lines.join("\n")
}

pub fn format_advanced(stats: &AdvancedStats) -> String {
    let summary = match stats {
        AdvancedStats::Unavailable { required_mode } => {
            return format!(
                "~ unavailable: listener and target group data needs scan_mode={required_mode} or full; rescan with a deeper mode"
            );
        }
        AdvancedStats::Available(summary) => summary,
    };

    let mut lines = vec![format!("listeners total={}", summary.total_listeners)];
    push_counts(&mut lines, &summary.listener_protocols);
    lines.push(format!("target_groups total={}", summary.total_target_groups));
    push_counts(&mut lines, &summary.target_group_protocols);

    match &summary.full {
        Some(full) => {
            lines.push(format!("listener_rules total={}", full.total_rules));
            lines.push(format!("target_health total={}", full.total_targets));
            for share in &full.health_states {
                let marker = match share.state.as_str() {
                    "healthy" => '+',
                    "unhealthy" => '!',
                    _ => '~',
                };
                lines.push(format!(
                    "{marker} {}: {} ({:.1}%)",
                    share.state, share.count, share.percent
                ));
            }
        }
        None => lines.push(
            "~ rescan in full mode to include listener rules and target health".to_string(),
        ),
    }
    lines.join("\n")
}

fn push_counts(lines: &mut Vec<String>, counts: &[LabelCount]) {
    for row in counts {
        lines.push(format!("- {}: {}", row.label, row.count));
    }
}

fn coverage_fields(stats: &CoverageStats) -> String {
    format!(
        "total={} with_waf={} ({:.1}%) without_waf={} ({:.1}%)",
        stats.total_albs,
        stats.with_waf,
        stats.coverage_percent,
        stats.without_waf,
        stats.uncovered_percent()
    )
}

fn summary_line(lb: &LoadBalancer) -> String {
    let (marker, waf) = match lb.waf.web_acl() {
        Some(acl) => ('+', acl.display_name()),
        None => ('!', "none"),
    };
    format!(
        "{marker} {} type={} state={} dns={} waf={waf}",
        lb.basic.display_name(),
        lb.basic.display_type(),
        lb.basic.display_state(),
        lb.basic.display_dns()
    )
}
