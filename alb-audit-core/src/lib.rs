//! Load collected ALB / WAF scan documents and compute coverage statistics.

pub mod aggregate;
pub mod format;
pub mod loader;
pub mod model;

pub use aggregate::{
    AccountGroup, AdvancedStats, CoverageReport, ExportRow, ReportAggregator, SearchMatch,
    EXPORT_COLUMNS,
};
pub use format::format_json;
pub use loader::{parse, parse_file, LoadError};
pub use model::{LoadBalancer, ScanDocument, ScanMode};
