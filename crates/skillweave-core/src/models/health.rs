use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::MAX_LEVEL_SCORE;
use crate::ids::{DomainId, SkillGroupId, SubAreaId};

/// Derived health of one aggregation node. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HealthStats {
    /// Mean score over assessed skills (0–3), or 0 when none are assessed.
    pub average: f64,
    /// `average / 3`, in [0, 1]. Exactly 0 when `assessed_count` is 0.
    pub health_pct: f64,
    pub assessed_count: usize,
    pub total_count: usize,
}

impl HealthStats {
    /// Build from an accumulated score sum.
    pub fn from_sum(score_sum: f64, assessed_count: usize, total_count: usize) -> Self {
        if assessed_count == 0 {
            return Self {
                average: 0.0,
                health_pct: 0.0,
                assessed_count: 0,
                total_count,
            };
        }
        let average = score_sum / assessed_count as f64;
        Self {
            average,
            health_pct: (average / MAX_LEVEL_SCORE).clamp(0.0, 1.0),
            assessed_count,
            total_count,
        }
    }

    pub fn is_assessed(&self) -> bool {
        self.assessed_count > 0
    }

    /// Unmet health fraction, `1 - health_pct`. Unassessed nodes are fully unmet.
    pub fn unmet(&self) -> f64 {
        1.0 - self.health_pct
    }
}

/// Health of every domain, sub-area, and skill group for one assessment map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HealthReport {
    pub domains: BTreeMap<DomainId, HealthStats>,
    pub sub_areas: BTreeMap<SubAreaId, HealthStats>,
    pub skill_groups: BTreeMap<SkillGroupId, HealthStats>,
    /// Assessed ids that the taxonomy does not know. Excluded from all stats.
    pub unknown_skills: Vec<String>,
}

impl HealthReport {
    pub fn domain(&self, id: &str) -> Option<&HealthStats> {
        self.domains.get(id)
    }

    pub fn sub_area(&self, id: &str) -> Option<&HealthStats> {
        self.sub_areas.get(id)
    }

    pub fn skill_group(&self, id: &str) -> Option<&HealthStats> {
        self.skill_groups.get(id)
    }

    /// Domains with at least one assessed skill.
    pub fn assessed_domains(&self) -> impl Iterator<Item = (&DomainId, &HealthStats)> {
        self.domains.iter().filter(|(_, stats)| stats.is_assessed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassessed_stats_are_zero() {
        let stats = HealthStats::from_sum(0.0, 0, 5);
        assert_eq!(stats.health_pct, 0.0);
        assert!(!stats.is_assessed());
        assert_eq!(stats.unmet(), 1.0);
    }

    #[test]
    fn fully_solid_stats_are_one() {
        let stats = HealthStats::from_sum(9.0, 3, 3);
        assert_eq!(stats.average, 3.0);
        assert_eq!(stats.health_pct, 1.0);
    }
}
