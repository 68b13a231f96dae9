use serde::{Deserialize, Serialize};

use super::{defaults, ensure};
use crate::errors::EngineResult;

/// Edge weighting applied when the taxonomy source omits explicit weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Weight of `primary` prerequisite edges.
    pub primary_edge_weight: f64,
    /// Weight of `secondary` prerequisite edges.
    pub secondary_edge_weight: f64,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            primary_edge_weight: defaults::DEFAULT_PRIMARY_EDGE_WEIGHT,
            secondary_edge_weight: defaults::DEFAULT_SECONDARY_EDGE_WEIGHT,
        }
    }
}

impl TaxonomyConfig {
    pub fn validate(&self) -> EngineResult<()> {
        for (name, weight) in [
            ("primary_edge_weight", self.primary_edge_weight),
            ("secondary_edge_weight", self.secondary_edge_weight),
        ] {
            ensure(weight > 0.0 && weight <= 1.0, || {
                format!("taxonomy.{name} must lie in (0, 1], got {weight}")
            })?;
        }
        Ok(())
    }
}
