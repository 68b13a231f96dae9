use serde::{Deserialize, Serialize};

use super::{defaults, ensure};
use crate::errors::EngineResult;

/// Cascade propagation parameters.
///
/// Each hop multiplies impact by `edge_weight * (1 - hop_decay)`. Raising
/// `hop_decay` can only shrink impacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    /// Fraction of impact lost per hop, in [0, 1).
    pub hop_decay: f64,
    /// Impacts below this are dropped and not expanded further.
    pub materiality_threshold: f64,
    /// Maximum hops from the source.
    pub max_depth: usize,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            hop_decay: defaults::DEFAULT_CASCADE_HOP_DECAY,
            materiality_threshold: defaults::DEFAULT_CASCADE_MATERIALITY_THRESHOLD,
            max_depth: defaults::DEFAULT_CASCADE_MAX_DEPTH,
        }
    }
}

impl CascadeConfig {
    /// Multiplier applied per hop before edge weight.
    pub fn retention(&self) -> f64 {
        1.0 - self.hop_decay
    }

    pub fn validate(&self) -> EngineResult<()> {
        ensure((0.0..1.0).contains(&self.hop_decay), || {
            format!("cascade.hop_decay must lie in [0, 1), got {}", self.hop_decay)
        })?;
        ensure(
            self.materiality_threshold > 0.0 && self.materiality_threshold <= 1.0,
            || {
                format!(
                    "cascade.materiality_threshold must lie in (0, 1], got {}",
                    self.materiality_threshold
                )
            },
        )?;
        ensure(self.max_depth > 0, || {
            "cascade.max_depth must be at least 1".to_string()
        })
    }
}
