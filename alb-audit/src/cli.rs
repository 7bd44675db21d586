use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "alb-audit")]
#[command(about = "Report WAF coverage and load balancer statistics from ALB scan JSON")]
pub struct Cli {
    /// Scan document written by the ALB collector.
    pub json_file: PathBuf,
    /// List every load balancer with its WAF status.
    #[arg(long)]
    pub list: bool,
    /// Show WAF coverage per account and overall.
    #[arg(long)]
    pub waf_coverage: bool,
    /// List load balancers without a WAF association.
    #[arg(long)]
    pub no_waf: bool,
    /// Show listener, target group and target health statistics (standard/full scans).
    #[arg(long)]
    pub stats: bool,
    /// Count load balancers by type.
    #[arg(long)]
    pub by_type: bool,
    /// Count load balancers and WAF coverage by region.
    #[arg(long)]
    pub by_region: bool,
    /// Case-insensitive substring search on load balancer names.
    #[arg(long)]
    pub search: Option<String>,
    /// Export one CSV row per load balancer to this path.
    #[arg(long)]
    pub csv: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Optional report config TOML (default sections, scan mode labels).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Log verbosity on stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Whether any section or export flag was given.
    pub fn any_selection(&self) -> bool {
        self.list
            || self.waf_coverage
            || self.no_waf
            || self.stats
            || self.by_type
            || self.by_region
            || self.search.is_some()
            || self.csv.is_some()
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
