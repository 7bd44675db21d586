//! Listener, target group, and target health statistics.
//!
//! These figures only exist for accounts scanned in standard or full mode.
//! Each record contributes according to its [`Detail`] variant, so documents
//! mixing quick and full accounts aggregate only what was collected.

use serde::Serialize;

use crate::model::{Detail, ScanDocument, ScanMode};

use super::tally::{percent, Tally};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdvancedStats {
    /// No account was scanned deeply enough.
    Unavailable { required_mode: ScanMode },
    Available(AdvancedSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedSummary {
    pub total_listeners: usize,
    pub listener_protocols: Vec<LabelCount>,
    pub total_target_groups: usize,
    pub target_group_protocols: Vec<LabelCount>,
    /// Present only when at least one account used full mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<FullModeStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullModeStats {
    pub total_rules: usize,
    pub total_targets: usize,
    pub health_states: Vec<HealthShare>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthShare {
    pub state: String,
    pub count: usize,
    pub percent: f64,
}

/// Compute depth-gated statistics over the whole document.
pub fn advanced_statistics(doc: &ScanDocument) -> AdvancedStats {
    let any_topology = doc.accounts.iter().any(|a| a.scan_mode.has_topology());
    if !any_topology {
        return AdvancedStats::Unavailable {
            required_mode: ScanMode::Standard,
        };
    }
    let any_full = doc.accounts.iter().any(|a| a.scan_mode.has_health());

    let mut total_listeners = 0;
    let mut total_target_groups = 0;
    let mut total_rules = 0;
    let mut total_targets = 0;
    let mut listener_protocols = Tally::default();
    let mut target_group_protocols = Tally::default();
    let mut health_states = Tally::default();

    for (_, _, lb) in doc.records() {
        let with_health = match &lb.detail {
            Detail::Basic => continue,
            Detail::WithTopology { .. } => false,
            Detail::WithHealth { .. } => true,
        };

        for listener in lb.detail.listeners() {
            total_listeners += 1;
            listener_protocols.add(listener.display_protocol());
            if with_health {
                total_rules += listener.rules.len();
            }
        }
        for group in lb.detail.target_groups() {
            total_target_groups += 1;
            target_group_protocols.add(group.display_protocol());
            if with_health {
                for target in &group.targets {
                    total_targets += 1;
                    health_states.add(target.display_state());
                }
            }
        }
    }

    let full = any_full.then(|| FullModeStats {
        total_rules,
        total_targets,
        health_states: health_states
            .into_sorted()
            .into_iter()
            .map(|(state, count)| HealthShare {
                state,
                count,
                percent: percent(count, total_targets),
            })
            .collect(),
    });

    AdvancedStats::Available(AdvancedSummary {
        total_listeners,
        listener_protocols: labelled(listener_protocols),
        total_target_groups,
        target_group_protocols: labelled(target_group_protocols),
        full,
    })
}

fn labelled(tally: Tally) -> Vec<LabelCount> {
    tally
        .into_sorted()
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect()
}
