use std::collections::HashMap;

use serde::Serialize;

use crate::model::{ScanDocument, UNKNOWN};

use super::coverage::count_covered;
use super::tally::{percent, Tally};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub friendly_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionCoverage {
    pub region: String,
    pub total: usize,
    pub with_waf: usize,
    pub coverage_percent: f64,
}

/// Count load balancers per friendly type, most common first.
pub fn distribution_by_type(doc: &ScanDocument) -> Vec<TypeCount> {
    let mut tally = Tally::default();
    for (_, _, lb) in doc.records() {
        tally.add(lb.basic.friendly_type.as_deref().unwrap_or(UNKNOWN));
    }
    tally
        .into_sorted()
        .into_iter()
        .map(|(friendly_type, count)| TypeCount {
            friendly_type,
            count,
        })
        .collect()
}

/// Count load balancers and WAF coverage per region code, largest region first.
///
/// Regions with the same code in different accounts are merged.
pub fn distribution_by_region(doc: &ScanDocument) -> Vec<RegionCoverage> {
    let mut rows: Vec<(String, usize, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for region in doc.accounts.iter().flat_map(|a| &a.regions) {
        let (total, covered) = count_covered(&region.load_balancers);
        let slot = *index.entry(region.region.as_str()).or_insert_with(|| {
            rows.push((region.region.clone(), 0, 0));
            rows.len() - 1
        });
        rows[slot].1 += total;
        rows[slot].2 += covered;
    }

    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter()
        .map(|(region, total, with_waf)| RegionCoverage {
            region,
            total,
            with_waf,
            coverage_percent: percent(with_waf, total),
        })
        .collect()
}
