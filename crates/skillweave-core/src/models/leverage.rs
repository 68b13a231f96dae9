use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::DomainId;

/// How much downstream capability a weak domain is holding back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LeverageScore {
    pub domain_id: DomainId,
    /// `(1 - health_pct) * Σ unmet(downstream)`.
    pub leverage: f64,
    /// Transitive dependents of the domain.
    pub downstream: Vec<DomainId>,
    /// Transitive prerequisites; fewer means closer to the root.
    pub prerequisite_count: usize,
}
