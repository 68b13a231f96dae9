use serde::{Deserialize, Serialize};

use super::{defaults, ensure};
use crate::errors::EngineResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BottleneckConfig {
    /// Domains at or above this health percentage are never bottlenecks.
    pub solid_threshold: f64,
    /// Leverage a bottleneck needs before it is reported as a risk.
    pub significance_threshold: f64,
}

impl Default for BottleneckConfig {
    fn default() -> Self {
        Self {
            solid_threshold: defaults::DEFAULT_SOLID_THRESHOLD,
            significance_threshold: defaults::DEFAULT_BOTTLENECK_SIGNIFICANCE,
        }
    }
}

impl BottleneckConfig {
    pub fn validate(&self) -> EngineResult<()> {
        ensure(
            self.solid_threshold > 0.0 && self.solid_threshold <= 1.0,
            || {
                format!(
                    "bottleneck.solid_threshold must lie in (0, 1], got {}",
                    self.solid_threshold
                )
            },
        )?;
        ensure(self.significance_threshold >= 0.0, || {
            format!(
                "bottleneck.significance_threshold must be non-negative, got {}",
                self.significance_threshold
            )
        })
    }
}
