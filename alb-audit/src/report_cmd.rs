use std::path::Path;

use alb_audit::config::{default_report_config, load_report_config, ReportConfig, Section};
use alb_audit::export::export_csv;
use alb_audit::report::{build_json_report, render_text_report, ReportPlan};
use alb_audit_core::{format_json, ReportAggregator};
use anyhow::{Context, Result};

use crate::cli::{Cli, OutputFormat};
use crate::path_guard;

pub fn run_report(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref());

    if let Some(csv_path) = &cli.csv {
        path_guard::ensure_export_not_input(csv_path, &cli.json_file)?;
    }

    let aggregator = ReportAggregator::load(&cli.json_file)
        .with_context(|| format!("failed to load {}", cli.json_file.display()))?;
    let document = aggregator.document();
    log::info!(
        "loaded {} accounts with {} load balancers from {}",
        document.accounts.len(),
        document.load_balancer_count(),
        cli.json_file.display()
    );
    for mode in aggregator.scan_mode_summary() {
        log::debug!("account {} scanned in {} mode", mode.account_id, mode.scan_mode);
    }

    let plan = build_plan(&cli, &config);
    match cli.format {
        OutputFormat::Text => println!("{}", render_text_report(&aggregator, &plan, &config)),
        OutputFormat::Json => println!("{}", format_json(&build_json_report(&aggregator, &plan))),
    }

    if let Some(csv_path) = &cli.csv {
        let count = export_csv(csv_path, &aggregator.export_rows())?;
        if cli.format == OutputFormat::Text {
            println!();
            println!("exported {count} rows to {}", csv_path.display());
        }
    }

    Ok(())
}

/// Sections to run: configured defaults when nothing is selected, otherwise
/// scan info followed by the selected sections in fixed order.
fn build_plan(cli: &Cli, config: &ReportConfig) -> ReportPlan {
    if !cli.any_selection() {
        return ReportPlan {
            sections: config.default_sections.clone(),
            search: None,
        };
    }

    let selected = [
        (cli.list, Section::List),
        (cli.waf_coverage, Section::Coverage),
        (cli.no_waf, Section::NoWaf),
        (cli.stats, Section::AdvancedStats),
        (cli.by_type, Section::ByType),
        (cli.by_region, Section::ByRegion),
    ];
    let mut sections = vec![Section::ScanInfo];
    sections.extend(
        selected
            .into_iter()
            .filter_map(|(enabled, section)| enabled.then_some(section)),
    );

    ReportPlan {
        sections,
        search: cli.search.clone(),
    }
}

fn resolve_config(path: Option<&Path>) -> ReportConfig {
    let Some(path) = path else {
        return default_report_config();
    };

    match load_report_config(path) {
        Ok(config) => {
            log::debug!("using report config {}", path.display());
            config
        }
        Err(err) => {
            log::warn!("{err}; using embedded defaults");
            default_report_config()
        }
    }
}
