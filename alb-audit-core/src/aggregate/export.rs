use serde::Serialize;

use crate::model::ScanDocument;

/// Column order of the flattened export.
pub const EXPORT_COLUMNS: [&str; 15] = [
    "Account_ID",
    "Profile",
    "Region",
    "ALB_Name",
    "Type",
    "State",
    "Scheme",
    "DNS_Name",
    "VPC_ID",
    "Has_WAF",
    "WAF_Name",
    "WAF_ID",
    "WAF_ARN",
    "Listener_Count",
    "TargetGroup_Count",
];

/// One load balancer flattened for tabular export. Absent fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Account_ID")]
    pub account_id: String,
    #[serde(rename = "Profile")]
    pub profile: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "ALB_Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub lb_type: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Scheme")]
    pub scheme: String,
    #[serde(rename = "DNS_Name")]
    pub dns_name: String,
    #[serde(rename = "VPC_ID")]
    pub vpc_id: String,
    #[serde(rename = "Has_WAF")]
    pub has_waf: String,
    #[serde(rename = "WAF_Name")]
    pub waf_name: String,
    #[serde(rename = "WAF_ID")]
    pub waf_id: String,
    #[serde(rename = "WAF_ARN")]
    pub waf_arn: String,
    #[serde(rename = "Listener_Count")]
    pub listener_count: usize,
    #[serde(rename = "TargetGroup_Count")]
    pub target_group_count: usize,
}

impl ExportRow {
    /// Field values in [`EXPORT_COLUMNS`] order.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.account_id.clone(),
            self.profile.clone(),
            self.region.clone(),
            self.name.clone(),
            self.lb_type.clone(),
            self.state.clone(),
            self.scheme.clone(),
            self.dns_name.clone(),
            self.vpc_id.clone(),
            self.has_waf.clone(),
            self.waf_name.clone(),
            self.waf_id.clone(),
            self.waf_arn.clone(),
            self.listener_count.to_string(),
            self.target_group_count.to_string(),
        ]
    }
}

/// Flatten the document into one row per load balancer, in document order.
pub fn export_rows(doc: &ScanDocument) -> Vec<ExportRow> {
    doc.records()
        .map(|(account, region, lb)| {
            let basic = &lb.basic;
            let acl = lb.waf.web_acl();
            ExportRow {
                account_id: account.account_id.clone(),
                profile: account.profile.clone(),
                region: region.region.clone(),
                name: basic.name.clone().unwrap_or_default(),
                lb_type: basic
                    .friendly_type
                    .clone()
                    .or_else(|| basic.lb_type.clone())
                    .unwrap_or_default(),
                state: basic.state_code.clone().unwrap_or_default(),
                scheme: basic.scheme.clone().unwrap_or_default(),
                dns_name: basic.dns_name.clone().unwrap_or_default(),
                vpc_id: basic.vpc_id.clone().unwrap_or_default(),
                has_waf: if lb.has_waf() { "Yes" } else { "No" }.to_string(),
                waf_name: acl.and_then(|a| a.name.clone()).unwrap_or_default(),
                waf_id: acl.and_then(|a| a.id.clone()).unwrap_or_default(),
                waf_arn: acl.and_then(|a| a.arn.clone()).unwrap_or_default(),
                listener_count: lb.detail.listeners().len(),
                target_group_count: lb.detail.target_groups().len(),
            }
        })
        .collect()
}
