use alb_audit_core::aggregate::{
    AccountGroup, AdvancedStats, CoverageReport, RegionCoverage, ScanInfo, SearchMatch, TypeCount,
};
use alb_audit_core::format::{
    format_advanced, format_coverage, format_load_balancers, format_region_distribution,
    format_search, format_type_distribution, format_without_waf,
};
use alb_audit_core::ReportAggregator;
use colored::Colorize;
use serde::Serialize;

use crate::config::{ModeLabels, ReportConfig, Section};

/// Which sections to produce, in order. The search runs after all sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPlan {
    pub sections: Vec<Section>,
    pub search: Option<String>,
}

/// Render the planned sections as colored terminal text.
pub fn render_text_report(
    aggregator: &ReportAggregator,
    plan: &ReportPlan,
    config: &ReportConfig,
) -> String {
    let mut blocks = Vec::new();
    for section in &plan.sections {
        let (title, body) = match section {
            Section::ScanInfo => (
                "scan_info".to_string(),
                render_scan_info(&aggregator.scan_info(), &config.mode_labels),
            ),
            Section::List => (
                "load_balancers".to_string(),
                format_load_balancers(&aggregator.list_all()),
            ),
            Section::Coverage => (
                "waf_coverage".to_string(),
                format_coverage(&aggregator.waf_coverage()),
            ),
            Section::NoWaf => (
                "without_waf".to_string(),
                format_without_waf(&aggregator.find_without_waf()),
            ),
            Section::AdvancedStats => (
                "advanced_stats".to_string(),
                format_advanced(&aggregator.advanced_statistics()),
            ),
            Section::ByType => (
                "by_type".to_string(),
                format_type_distribution(&aggregator.distribution_by_type()),
            ),
            Section::ByRegion => (
                "by_region".to_string(),
                format_region_distribution(&aggregator.distribution_by_region()),
            ),
        };
        blocks.push(render_block(&title, &body));
    }
    if let Some(pattern) = &plan.search {
        let body = format_search(pattern, &aggregator.search(pattern));
        blocks.push(render_block(&format!("search '{pattern}'"), &body));
    }
    blocks.join("\n\n")
}

/// Render per-account scan metadata with configured mode labels.
pub fn render_scan_info(infos: &[ScanInfo<'_>], labels: &ModeLabels) -> String {
    if infos.is_empty() {
        return "- none".to_string();
    }
    infos
        .iter()
        .map(|info| {
            format!(
                "- {} ({}) scan_time={} scan_mode={} ({})",
                info.account_id,
                info.profile,
                info.scan_time,
                info.scan_mode,
                labels.label(info.scan_mode)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Color lines by their leading marker.
pub fn colorize(text: &str) -> String {
    let mut out = Vec::new();
    for line in text.lines() {
        let colored = match line.trim_start().chars().next() {
            Some('+') => line.green().to_string(),
            Some('!') => line.red().to_string(),
            Some('~') => line.yellow().to_string(),
            _ => line.to_string(),
        };
        out.push(colored);
    }
    out.join("\n")
}

fn render_block(title: &str, body: &str) -> String {
    format!("{}\n{}", title.cyan().bold(), colorize(body))
}

#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub pattern: &'a str,
    pub matches: Vec<SearchMatch<'a>>,
}

/// Machine-readable report; only planned sections are present.
#[derive(Debug, Default, Serialize)]
pub struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_info: Option<Vec<ScanInfo<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<AccountGroup<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_waf: Option<Vec<AccountGroup<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced: Option<AdvancedStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_type: Option<Vec<TypeCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_region: Option<Vec<RegionCoverage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchReport<'a>>,
}

pub fn build_json_report<'a>(aggregator: &'a ReportAggregator, plan: &'a ReportPlan) -> JsonReport<'a> {
    let mut report = JsonReport::default();
    for section in &plan.sections {
        match section {
            Section::ScanInfo => report.scan_info = Some(aggregator.scan_info()),
            Section::List => report.load_balancers = Some(aggregator.list_all()),
            Section::Coverage => report.coverage = Some(aggregator.waf_coverage()),
            Section::NoWaf => report.without_waf = Some(aggregator.find_without_waf()),
            Section::AdvancedStats => report.advanced = Some(aggregator.advanced_statistics()),
            Section::ByType => report.by_type = Some(aggregator.distribution_by_type()),
            Section::ByRegion => report.by_region = Some(aggregator.distribution_by_region()),
        }
    }
    if let Some(pattern) = &plan.search {
        report.search = Some(SearchReport {
            pattern,
            matches: aggregator.search(pattern),
        });
    }
    report
}
