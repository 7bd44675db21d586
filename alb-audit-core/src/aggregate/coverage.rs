use serde::Serialize;

use crate::model::{LoadBalancer, ScanDocument};

use super::tally::percent;

/// WAF coverage counts for one scope.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CoverageStats {
    pub total_albs: usize,
    pub with_waf: usize,
    pub without_waf: usize,
    pub coverage_percent: f64,
}

impl CoverageStats {
    fn from_counts(total_albs: usize, with_waf: usize) -> Self {
        Self {
            total_albs,
            with_waf,
            without_waf: total_albs - with_waf,
            coverage_percent: percent(with_waf, total_albs),
        }
    }

    /// Share of load balancers without a Web ACL, as a percentage.
    pub fn uncovered_percent(&self) -> f64 {
        if self.total_albs == 0 {
            return 0.0;
        }
        100.0 - self.coverage_percent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountCoverage {
    pub account_id: String,
    pub profile: String,
    #[serde(flatten)]
    pub stats: CoverageStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub accounts: Vec<AccountCoverage>,
    pub global: CoverageStats,
}

/// Compute WAF coverage per account and across the whole document.
pub fn waf_coverage(doc: &ScanDocument) -> CoverageReport {
    let mut accounts = Vec::with_capacity(doc.accounts.len());
    let mut total = 0;
    let mut covered = 0;

    for account in &doc.accounts {
        let lbs = account.regions.iter().flat_map(|r| &r.load_balancers);
        let (account_total, account_covered) = count_covered(lbs);
        total += account_total;
        covered += account_covered;
        accounts.push(AccountCoverage {
            account_id: account.account_id.clone(),
            profile: account.profile.clone(),
            stats: CoverageStats::from_counts(account_total, account_covered),
        });
    }

    CoverageReport {
        accounts,
        global: CoverageStats::from_counts(total, covered),
    }
}

pub(crate) fn count_covered<'a>(lbs: impl IntoIterator<Item = &'a LoadBalancer>) -> (usize, usize) {
    lbs.into_iter().fold((0, 0), |(total, covered), lb| {
        (total + 1, covered + usize::from(lb.has_waf()))
    })
}
