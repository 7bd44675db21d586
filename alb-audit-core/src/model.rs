use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Display fallback for absent identifying strings.
pub const UNKNOWN: &str = "Unknown";
/// Display fallback for absent address-like strings.
pub const NOT_AVAILABLE: &str = "N/A";

/// Collection depth tier recorded by the collector for one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Basic info and WAF association only.
    Quick,
    /// Adds listeners and target groups.
    Standard,
    /// Adds listener rules and target health.
    Full,
    /// Absent or unrecognised mode.
    Unknown,
}

impl ScanMode {
    /// Parse the collector's `scan_mode` label. Unrecognised labels map to `Unknown`.
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "quick" => Self::Quick,
            "standard" => Self::Standard,
            "full" => Self::Full,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Standard => "standard",
            Self::Full => "full",
            Self::Unknown => "unknown",
        }
    }

    /// Whether listeners and target groups are populated in this mode.
    pub fn has_topology(self) -> bool {
        matches!(self, Self::Standard | Self::Full)
    }

    /// Whether listener rules and target health are populated in this mode.
    pub fn has_health(self) -> bool {
        self == Self::Full
    }
}

impl Display for ScanMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A whole scan: one entry per account, in scan order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScanDocument {
    pub accounts: Vec<AccountScan>,
}

impl ScanDocument {
    /// Walk every load balancer with its owning account and region, in document order.
    pub fn records(&self) -> impl Iterator<Item = (&AccountScan, &RegionScan, &LoadBalancer)> {
        self.accounts.iter().flat_map(|account| {
            account.regions.iter().flat_map(move |region| {
                region
                    .load_balancers
                    .iter()
                    .map(move |lb| (account, region, lb))
            })
        })
    }

    pub fn load_balancer_count(&self) -> usize {
        self.accounts
            .iter()
            .map(AccountScan::load_balancer_count)
            .sum()
    }
}

/// Scan results for one account/profile pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountScan {
    pub account_id: String,
    pub profile: String,
    pub scan_time: String,
    pub scan_mode: ScanMode,
    pub regions: Vec<RegionScan>,
}

impl AccountScan {
    pub fn load_balancer_count(&self) -> usize {
        self.regions.iter().map(|r| r.load_balancers.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionScan {
    pub region: String,
    pub load_balancers: Vec<LoadBalancer>,
}

/// One load balancer as reported by the collector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadBalancer {
    pub basic: BasicInfo,
    pub waf: WafAssociation,
    pub detail: Detail,
}

impl LoadBalancer {
    pub fn has_waf(&self) -> bool {
        self.waf.has_waf()
    }
}

/// Identity fields of a load balancer. Every field is optional in the source.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BasicInfo {
    pub name: Option<String>,
    pub lb_type: Option<String>,
    pub friendly_type: Option<String>,
    pub state_code: Option<String>,
    pub dns_name: Option<String>,
    pub scheme: Option<String>,
    pub vpc_id: Option<String>,
    pub arn: Option<String>,
}

impl BasicInfo {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }

    /// Friendly type, then raw type, then `Unknown`.
    pub fn display_type(&self) -> &str {
        self.friendly_type
            .as_deref()
            .or(self.lb_type.as_deref())
            .unwrap_or(UNKNOWN)
    }

    pub fn display_state(&self) -> &str {
        self.state_code.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn display_dns(&self) -> &str {
        self.dns_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn display_scheme(&self) -> &str {
        self.scheme.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn display_vpc(&self) -> &str {
        self.vpc_id.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// WAF association state. A protected record always carries its Web ACL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WafAssociation {
    Protected { web_acl: WebAcl },
    Unprotected,
}

impl WafAssociation {
    pub fn has_waf(&self) -> bool {
        matches!(self, Self::Protected { .. })
    }

    pub fn web_acl(&self) -> Option<&WebAcl> {
        match self {
            Self::Protected { web_acl } => Some(web_acl),
            Self::Unprotected => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WebAcl {
    pub name: Option<String>,
    pub id: Option<String>,
    pub arn: Option<String>,
}

impl WebAcl {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Depth-dependent sub-structures of a load balancer.
///
/// The variant follows the owning account's scan mode: quick and unknown
/// scans carry `Basic`, standard scans `WithTopology`, full scans
/// `WithHealth`. Statistics match on the variant they need and treat any
/// other variant as contributing nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "depth", rename_all = "snake_case")]
pub enum Detail {
    Basic,
    WithTopology {
        listeners: Vec<Listener>,
        target_groups: Vec<TargetGroup>,
    },
    WithHealth {
        listeners: Vec<Listener>,
        target_groups: Vec<TargetGroup>,
    },
}

impl Detail {
    pub fn listeners(&self) -> &[Listener] {
        match self {
            Self::Basic => &[],
            Self::WithTopology { listeners, .. } | Self::WithHealth { listeners, .. } => {
                listeners.as_slice()
            }
        }
    }

    pub fn target_groups(&self) -> &[TargetGroup] {
        match self {
            Self::Basic => &[],
            Self::WithTopology { target_groups, .. } | Self::WithHealth { target_groups, .. } => {
                target_groups.as_slice()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listener {
    pub protocol: Option<String>,
    pub port: Option<u16>,
    pub rules: Vec<ListenerRule>,
}

impl Listener {
    pub fn display_protocol(&self) -> &str {
        self.protocol.as_deref().unwrap_or(UNKNOWN)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ListenerRule {
    pub arn: Option<String>,
    pub priority: Option<String>,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetGroup {
    pub name: Option<String>,
    pub protocol: Option<String>,
    pub port: Option<u16>,
    pub targets: Vec<TargetHealth>,
}

impl TargetGroup {
    pub fn display_protocol(&self) -> &str {
        self.protocol.as_deref().unwrap_or(UNKNOWN)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TargetHealth {
    pub target_id: Option<String>,
    pub state: Option<String>,
}

impl TargetHealth {
    pub fn display_state(&self) -> &str {
        self.state.as_deref().unwrap_or(UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::{BasicInfo, ScanMode};

    #[test]
    fn scan_mode_labels_are_lenient() {
        assert_eq!(ScanMode::from_label("full"), ScanMode::Full);
        assert_eq!(ScanMode::from_label(" Standard "), ScanMode::Standard);
        assert_eq!(ScanMode::from_label("deep"), ScanMode::Unknown);
        assert!(ScanMode::Full.has_topology() && ScanMode::Full.has_health());
        assert!(!ScanMode::Quick.has_topology());
    }

    #[test]
    fn display_type_prefers_friendly_type() {
        let mut basic = BasicInfo {
            lb_type: Some("application".to_string()),
            ..BasicInfo::default()
        };
        assert_eq!(basic.display_type(), "application");
        basic.friendly_type = Some("ALB".to_string());
        assert_eq!(basic.display_type(), "ALB");
        assert_eq!(BasicInfo::default().display_type(), "Unknown");
        assert_eq!(BasicInfo::default().display_dns(), "N/A");
    }
}
