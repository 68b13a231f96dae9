use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::NodeKind;

/// Framing of a cascade query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CascadeDirection {
    /// Source degrades; harm flows to what depends on it.
    Deficit,
    /// Source strengthens; the traversal walks its prerequisites.
    Mastery,
}

impl CascadeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deficit => "deficit",
            Self::Mastery => "mastery",
        }
    }
}

/// Nodes touched by a hypothetical change at `source_id`. Transient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CascadeResult {
    /// False when the source could not be resolved.
    pub active: bool,
    pub source_id: String,
    pub source_kind: Option<NodeKind>,
    pub direction: CascadeDirection,
    /// Impact assigned to the source before the first hop.
    pub seed_strength: f64,
    /// Node id → impact strength in (0, 1]. Never contains the source.
    pub affected: BTreeMap<String, f64>,
    /// Node id → hop count of the path that produced its impact.
    pub hops: BTreeMap<String, usize>,
}

impl CascadeResult {
    pub fn inactive(source_id: impl Into<String>, direction: CascadeDirection) -> Self {
        Self {
            active: false,
            source_id: source_id.into(),
            source_kind: None,
            direction,
            seed_strength: 0.0,
            affected: BTreeMap::new(),
            hops: BTreeMap::new(),
        }
    }

    pub fn impact_of(&self, node_id: &str) -> Option<f64> {
        self.affected.get(node_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.affected.is_empty()
    }

    /// Affected nodes ordered by impact, strongest first.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> =
            self.affected.iter().map(|(id, v)| (id.as_str(), *v)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}
