//! Read-only queries over a loaded scan document.

pub mod advanced;
pub mod coverage;
pub mod distribution;
pub mod export;
pub mod grouping;
mod tally;

use std::path::Path;

use serde::Serialize;

use crate::loader::{parse, parse_file, LoadError};
use crate::model::{ScanDocument, ScanMode};

pub use advanced::{
    advanced_statistics, AdvancedStats, AdvancedSummary, FullModeStats, HealthShare, LabelCount,
};
pub use coverage::{waf_coverage, AccountCoverage, CoverageReport, CoverageStats};
pub use distribution::{distribution_by_region, distribution_by_type, RegionCoverage, TypeCount};
pub use export::{export_rows, ExportRow, EXPORT_COLUMNS};
pub use grouping::{group_by_account, search, AccountGroup, RegionGroup, SearchMatch};
pub use tally::percent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountMode<'a> {
    pub account_id: &'a str,
    pub scan_mode: ScanMode,
}

/// Per-account scan metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanInfo<'a> {
    pub account_id: &'a str,
    pub profile: &'a str,
    pub scan_time: &'a str,
    pub scan_mode: ScanMode,
}

/// Owns a scan document and answers statistics queries over it.
///
/// Every query is a pure function of the document; nothing is cached or
/// mutated, so an aggregator can be shared across threads by reference.
#[derive(Debug, Clone)]
pub struct ReportAggregator {
    document: ScanDocument,
}

impl ReportAggregator {
    pub fn new(document: ScanDocument) -> Self {
        Self { document }
    }

    /// Load and validate a collector JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        parse_file(path).map(Self::new)
    }

    pub fn from_slice(json: &[u8]) -> Result<Self, LoadError> {
        parse(json).map(Self::new)
    }

    pub fn document(&self) -> &ScanDocument {
        &self.document
    }

    /// Scan mode of each account, in document order.
    pub fn scan_mode_summary(&self) -> Vec<AccountMode<'_>> {
        self.document
            .accounts
            .iter()
            .map(|a| AccountMode {
                account_id: &a.account_id,
                scan_mode: a.scan_mode,
            })
            .collect()
    }

    pub fn scan_info(&self) -> Vec<ScanInfo<'_>> {
        self.document
            .accounts
            .iter()
            .map(|a| ScanInfo {
                account_id: &a.account_id,
                profile: &a.profile,
                scan_time: &a.scan_time,
                scan_mode: a.scan_mode,
            })
            .collect()
    }

    /// Every load balancer grouped by account and region; empty regions are omitted.
    pub fn list_all(&self) -> Vec<AccountGroup<'_>> {
        group_by_account(&self.document, |_| true)
    }

    pub fn waf_coverage(&self) -> CoverageReport {
        waf_coverage(&self.document)
    }

    /// Load balancers with no Web ACL, grouped by account and region.
    pub fn find_without_waf(&self) -> Vec<AccountGroup<'_>> {
        group_by_account(&self.document, |lb| !lb.has_waf())
    }

    pub fn distribution_by_type(&self) -> Vec<TypeCount> {
        distribution_by_type(&self.document)
    }

    pub fn distribution_by_region(&self) -> Vec<RegionCoverage> {
        distribution_by_region(&self.document)
    }

    pub fn search(&self, pattern: &str) -> Vec<SearchMatch<'_>> {
        search(&self.document, pattern)
    }

    pub fn advanced_statistics(&self) -> AdvancedStats {
        advanced_statistics(&self.document)
    }

    pub fn export_rows(&self) -> Vec<ExportRow> {
        export_rows(&self.document)
    }
}
