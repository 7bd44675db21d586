use serde::Serialize;

use crate::model::{LoadBalancer, ScanDocument};

/// Load balancers of one account, grouped by region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountGroup<'a> {
    pub account_id: &'a str,
    pub profile: &'a str,
    pub regions: Vec<RegionGroup<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionGroup<'a> {
    pub region: &'a str,
    pub load_balancers: Vec<&'a LoadBalancer>,
}

/// Search hits for one account and region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch<'a> {
    pub account_id: &'a str,
    pub profile: &'a str,
    pub region: &'a str,
    pub load_balancers: Vec<&'a LoadBalancer>,
}

/// Group records passing `keep` by account and region.
///
/// Regions with no kept record are omitted, and so are accounts left with no
/// region.
pub fn group_by_account<'a>(
    doc: &'a ScanDocument,
    keep: impl Fn(&LoadBalancer) -> bool,
) -> Vec<AccountGroup<'a>> {
    let mut groups = Vec::new();
    for account in &doc.accounts {
        let regions = account
            .regions
            .iter()
            .filter_map(|region| {
                let load_balancers = region
                    .load_balancers
                    .iter()
                    .filter(|lb| keep(*lb))
                    .collect::<Vec<_>>();
                (!load_balancers.is_empty()).then_some(RegionGroup {
                    region: &region.region,
                    load_balancers,
                })
            })
            .collect::<Vec<_>>();
        if !regions.is_empty() {
            groups.push(AccountGroup {
                account_id: &account.account_id,
                profile: &account.profile,
                regions,
            });
        }
    }
    groups
}

/// Case-insensitive substring search on load balancer names.
///
/// A record without a name only matches the empty pattern.
pub fn search<'a>(doc: &'a ScanDocument, pattern: &str) -> Vec<SearchMatch<'a>> {
    let needle = pattern.to_lowercase();
    let mut matches = Vec::new();
    for account in &doc.accounts {
        for region in &account.regions {
            let load_balancers = region
                .load_balancers
                .iter()
                .filter(|lb| {
                    lb.basic
                        .name
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase()
                        .contains(&needle)
                })
                .collect::<Vec<_>>();
            if !load_balancers.is_empty() {
                matches.push(SearchMatch {
                    account_id: &account.account_id,
                    profile: &account.profile,
                    region: &region.region,
                    load_balancers,
                });
            }
        }
    }
    matches
}
