//! Detection passes. Each pass is independent and may emit any number of
//! findings; nothing is deduplicated across passes.

pub mod bottleneck;
pub mod inversion;
pub mod regression;
pub mod stalling;

use skillweave_core::{DomainId, RiskFinding, RiskType};

use crate::narrative;

/// Assemble a finding from its narrative values.
///
/// `affected_domains` is deduplicated in first-seen order.
pub(crate) fn finding(
    risk_type: RiskType,
    severity: f64,
    values: &[(&str, String)],
    affected_domains: impl IntoIterator<Item = DomainId>,
    affected_nodes: Vec<String>,
    action_domain_id: Option<DomainId>,
) -> RiskFinding {
    let (title, description) = narrative::narrate(risk_type, values);
    let mut domains: Vec<DomainId> = Vec::new();
    for domain in affected_domains {
        if !domains.contains(&domain) {
            domains.push(domain);
        }
    }
    RiskFinding {
        risk_type,
        severity,
        title,
        description,
        affected_domains: domains,
        affected_nodes,
        action_domain_id,
    }
}
