use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::model::{
    AccountScan, BasicInfo, Detail, Listener, ListenerRule, LoadBalancer, RegionScan,
    ScanDocument, ScanMode, TargetGroup, TargetHealth, WafAssociation, WebAcl, UNKNOWN,
};

/// Errors that can occur while loading a scan document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read input file.
    #[error("failed to read scan document: {0}")]
    Io(#[from] std::io::Error),
    /// Input was not valid JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Top-level shape is not a list of account objects.
    #[error("malformed scan document: {0}")]
    Malformed(String),
    /// An account's `regions`, `load_balancers` or `waf_association` has the wrong JSON type.
    #[error("invalid account entry {index}: {source}")]
    InvalidAccount {
        index: usize,
        source: serde_json::Error,
    },
    /// A load balancer lacks the required `waf_association` key.
    #[error(
        "load balancer #{index} in account {account_id} region {region} has no waf_association"
    )]
    MissingWafAssociation {
        account_id: String,
        region: String,
        index: usize,
    },
}

/// Parse collector JSON bytes into a [`ScanDocument`].
pub fn parse(json: &[u8]) -> Result<ScanDocument, LoadError> {
    let value: Value = serde_json::from_slice(json)?;
    let Value::Array(items) = value else {
        return Err(LoadError::Malformed(
            "top-level value must be a list of account objects".to_string(),
        ));
    };

    let mut accounts = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(LoadError::Malformed(format!(
                "account entry {index} is not an object"
            )));
        }
        let raw: RawAccount = serde_json::from_value(item)
            .map_err(|source| LoadError::InvalidAccount { index, source })?;
        accounts.push(build_account(raw)?);
    }

    Ok(ScanDocument { accounts })
}

/// Parse a collector JSON file into a [`ScanDocument`].
pub fn parse_file(path: &Path) -> Result<ScanDocument, LoadError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}

fn build_account(raw: RawAccount) -> Result<AccountScan, LoadError> {
    let account_id = raw
        .account_info
        .and_then(|info| info.account_id)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let scan_mode = raw
        .scan_mode
        .as_deref()
        .map(ScanMode::from_label)
        .unwrap_or(ScanMode::Unknown);

    let mut regions = Vec::new();
    for raw_region in raw.regions.unwrap_or_default() {
        let region = raw_region.region.unwrap_or_else(|| UNKNOWN.to_string());
        let mut load_balancers = Vec::new();
        for (index, raw_lb) in raw_region
            .load_balancers
            .unwrap_or_default()
            .into_iter()
            .enumerate()
        {
            let Some(waf) = raw_lb.waf_association else {
                return Err(LoadError::MissingWafAssociation {
                    account_id,
                    region,
                    index,
                });
            };
            load_balancers.push(LoadBalancer {
                basic: build_basic(raw_lb.basic_info.unwrap_or_default()),
                waf: build_waf(waf),
                detail: build_detail(scan_mode, raw_lb.listeners, raw_lb.target_groups),
            });
        }
        regions.push(RegionScan {
            region,
            load_balancers,
        });
    }

    Ok(AccountScan {
        account_id,
        profile: raw.profile.unwrap_or_else(|| UNKNOWN.to_string()),
        scan_time: raw.scan_time.unwrap_or_else(|| UNKNOWN.to_string()),
        scan_mode,
        regions,
    })
}

fn build_basic(raw: RawBasicInfo) -> BasicInfo {
    BasicInfo {
        name: raw.name,
        lb_type: raw.lb_type,
        friendly_type: raw.friendly_type,
        state_code: raw.state.and_then(|s| s.code),
        dns_name: raw.dns_name,
        scheme: raw.scheme,
        vpc_id: raw.vpc_id,
        arn: raw.arn,
    }
}

fn build_waf(raw: RawWafAssociation) -> WafAssociation {
    if !raw.has_waf.unwrap_or(false) {
        return WafAssociation::Unprotected;
    }
    let web_acl = raw
        .web_acl
        .map(|acl| WebAcl {
            name: acl.name,
            id: acl.id,
            arn: acl.arn,
        })
        .unwrap_or_default();
    WafAssociation::Protected { web_acl }
}

fn build_detail(
    mode: ScanMode,
    listeners: Option<Vec<RawListener>>,
    target_groups: Option<Vec<RawTargetGroup>>,
) -> Detail {
    if !mode.has_topology() {
        return Detail::Basic;
    }
    let with_health = mode.has_health();

    let listeners = listeners
        .unwrap_or_default()
        .into_iter()
        .map(|raw| Listener {
            protocol: raw.protocol,
            port: raw.port,
            rules: if with_health {
                raw.rules
                    .unwrap_or_default()
                    .into_iter()
                    .map(|rule| ListenerRule {
                        arn: rule.arn,
                        priority: rule.priority,
                        is_default: rule.is_default.unwrap_or(false),
                    })
                    .collect()
            } else {
                Vec::new()
            },
        })
        .collect();

    let target_groups = target_groups
        .unwrap_or_default()
        .into_iter()
        .map(|raw| TargetGroup {
            name: raw.name,
            protocol: raw.protocol,
            port: raw.port,
            targets: if with_health {
                raw.target_health
                    .unwrap_or_default()
                    .into_iter()
                    .map(|t| TargetHealth {
                        target_id: t.target.and_then(|target| target.id),
                        state: t.health.and_then(|health| health.state),
                    })
                    .collect()
            } else {
                Vec::new()
            },
        })
        .collect();

    if with_health {
        Detail::WithHealth {
            listeners,
            target_groups,
        }
    } else {
        Detail::WithTopology {
            listeners,
            target_groups,
        }
    }
}

/// Deserialize an optional leaf, treating a value of the wrong JSON type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

// Only `regions`, `load_balancers` and `waf_association` are held to their
// JSON type; everything else degrades to absent.
#[derive(Debug, Deserialize)]
struct RawAccount {
    #[serde(default, deserialize_with = "lenient")]
    account_info: Option<RawAccountInfo>,
    #[serde(default, deserialize_with = "lenient")]
    profile: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    scan_time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    scan_mode: Option<String>,
    regions: Option<Vec<RawRegion>>,
}

#[derive(Debug, Deserialize)]
struct RawAccountInfo {
    #[serde(default, deserialize_with = "lenient")]
    account_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRegion {
    #[serde(default, deserialize_with = "lenient")]
    region: Option<String>,
    load_balancers: Option<Vec<RawLoadBalancer>>,
}

#[derive(Debug, Deserialize)]
struct RawLoadBalancer {
    #[serde(default, deserialize_with = "lenient")]
    basic_info: Option<RawBasicInfo>,
    waf_association: Option<RawWafAssociation>,
    #[serde(default, deserialize_with = "lenient")]
    listeners: Option<Vec<RawListener>>,
    #[serde(default, deserialize_with = "lenient")]
    target_groups: Option<Vec<RawTargetGroup>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBasicInfo {
    #[serde(rename = "LoadBalancerName", default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "lenient")]
    lb_type: Option<String>,
    #[serde(rename = "FriendlyType", default, deserialize_with = "lenient")]
    friendly_type: Option<String>,
    #[serde(rename = "State", default, deserialize_with = "lenient")]
    state: Option<RawState>,
    #[serde(rename = "DNSName", default, deserialize_with = "lenient")]
    dns_name: Option<String>,
    #[serde(rename = "Scheme", default, deserialize_with = "lenient")]
    scheme: Option<String>,
    #[serde(rename = "VpcId", default, deserialize_with = "lenient")]
    vpc_id: Option<String>,
    #[serde(rename = "LoadBalancerArn", default, deserialize_with = "lenient")]
    arn: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawState {
    #[serde(rename = "Code", default, deserialize_with = "lenient")]
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWafAssociation {
    #[serde(default, deserialize_with = "lenient")]
    has_waf: Option<bool>,
    #[serde(rename = "WebACL", default, deserialize_with = "lenient")]
    web_acl: Option<RawWebAcl>,
}

#[derive(Debug, Deserialize)]
struct RawWebAcl {
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "Id", default, deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(rename = "ARN", default, deserialize_with = "lenient")]
    arn: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawListener {
    #[serde(rename = "Protocol", default, deserialize_with = "lenient")]
    protocol: Option<String>,
    #[serde(rename = "Port", default, deserialize_with = "lenient")]
    port: Option<u16>,
    #[serde(rename = "Rules", default, deserialize_with = "lenient")]
    rules: Option<Vec<RawRule>>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(rename = "RuleArn", default, deserialize_with = "lenient")]
    arn: Option<String>,
    #[serde(rename = "Priority", default, deserialize_with = "lenient")]
    priority: Option<String>,
    #[serde(rename = "IsDefault", default, deserialize_with = "lenient")]
    is_default: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawTargetGroup {
    #[serde(rename = "TargetGroupName", default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "Protocol", default, deserialize_with = "lenient")]
    protocol: Option<String>,
    #[serde(rename = "Port", default, deserialize_with = "lenient")]
    port: Option<u16>,
    #[serde(default, deserialize_with = "lenient")]
    target_health: Option<Vec<RawTargetHealth>>,
}

#[derive(Debug, Deserialize)]
struct RawTargetHealth {
    #[serde(rename = "Target", default, deserialize_with = "lenient")]
    target: Option<RawTarget>,
    #[serde(rename = "TargetHealth", default, deserialize_with = "lenient")]
    health: Option<RawHealth>,
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    #[serde(rename = "Id", default, deserialize_with = "lenient")]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHealth {
    #[serde(rename = "State", default, deserialize_with = "lenient")]
    state: Option<String>,
}
