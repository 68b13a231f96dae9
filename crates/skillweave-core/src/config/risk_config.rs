use serde::{Deserialize, Serialize};

use super::{defaults, ensure};
use crate::errors::EngineResult;

/// Tolerances for the longitudinal risk passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// A dependent may lead its prerequisite by at most this many points.
    pub inversion_tolerance: f64,
    /// Declines larger than this are regressions.
    pub regression_tolerance: f64,
    /// Score ranges smaller than this are stalls.
    pub stalling_tolerance: f64,
    /// Oldest-to-newest snapshot span required before flagging a stall.
    pub stalling_min_span_days: i64,
    /// Observations (snapshots + current) required before flagging a stall.
    pub stalling_min_points: usize,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            inversion_tolerance: defaults::DEFAULT_INVERSION_TOLERANCE,
            regression_tolerance: defaults::DEFAULT_REGRESSION_TOLERANCE,
            stalling_tolerance: defaults::DEFAULT_STALLING_TOLERANCE,
            stalling_min_span_days: defaults::DEFAULT_STALLING_MIN_SPAN_DAYS,
            stalling_min_points: defaults::DEFAULT_STALLING_MIN_POINTS,
        }
    }
}

impl RiskConfig {
    pub fn validate(&self) -> EngineResult<()> {
        for (name, value) in [
            ("inversion_tolerance", self.inversion_tolerance),
            ("regression_tolerance", self.regression_tolerance),
            ("stalling_tolerance", self.stalling_tolerance),
        ] {
            ensure(value >= 0.0, || {
                format!("risk.{name} must be non-negative, got {value}")
            })?;
        }
        ensure(self.stalling_min_span_days >= 0, || {
            "risk.stalling_min_span_days must be non-negative".to_string()
        })?;
        // Oldest snapshot, one intermediate, and current.
        ensure(self.stalling_min_points >= 3, || {
            format!(
                "risk.stalling_min_points must be at least 3, got {}",
                self.stalling_min_points
            )
        })
    }
}
