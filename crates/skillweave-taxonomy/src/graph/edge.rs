use serde::{Deserialize, Serialize};
use skillweave_core::config::TaxonomyConfig;
use skillweave_core::NodeId;

/// Strength class of a prerequisite edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Direct developmental dependency.
    #[default]
    Primary,
    /// Weaker coupling, typically across domains.
    Secondary,
}

impl EdgeKind {
    pub fn default_weight(self, config: &TaxonomyConfig) -> f64 {
        match self {
            Self::Primary => config.primary_edge_weight,
            Self::Secondary => config.secondary_edge_weight,
        }
    }
}

/// Edge payload: prerequisite → dependent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub kind: EdgeKind,
    /// Propagation weight in (0, 1].
    pub weight: f64,
}

/// A borrowed view of one edge with its endpoints.
#[derive(Debug, Clone, Copy)]
pub struct DependencyLink<'a> {
    pub prerequisite: &'a NodeId,
    pub dependent: &'a NodeId,
    pub edge: &'a DependencyEdge,
}
