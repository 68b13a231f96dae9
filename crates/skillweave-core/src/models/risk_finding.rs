use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::DomainId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskType {
    Inversion,
    Regression,
    Bottleneck,
    Stalling,
}

impl RiskType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inversion => "inversion",
            Self::Regression => "regression",
            Self::Bottleneck => "bottleneck",
            Self::Stalling => "stalling",
        }
    }
}

impl fmt::Display for RiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed risk surfaced by the detector. Higher severity is worse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskFinding {
    #[serde(rename = "type")]
    pub risk_type: RiskType,
    pub severity: f64,
    pub title: String,
    pub description: String,
    /// Domains involved, deduplicated, in first-seen order.
    pub affected_domains: Vec<DomainId>,
    /// Concrete skill or domain ids the finding is about.
    pub affected_nodes: Vec<String>,
    /// Suggested remediation target.
    pub action_domain_id: Option<DomainId>,
}
