use serde::Deserialize;

use skillweave_core::{AssessmentMap, RiskType, Snapshot};

use crate::load_fixture;

pub const SCENARIOS_DIR: &str = "golden/scenarios";

/// A recorded history with the findings the detector must produce for it.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub description: String,
    /// Fixture path of the taxonomy the scenario runs against.
    pub taxonomy: String,
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
    pub current: AssessmentMap,
    /// Findings in expected output order.
    pub expected: Vec<ExpectedFinding>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedFinding {
    #[serde(rename = "type")]
    pub risk_type: RiskType,
    /// First affected domain.
    pub domain: String,
    pub severity: f64,
}

/// Load a scenario by file stem, e.g. `"stalling_plateau"`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("{SCENARIOS_DIR}/{name}.json"))
}
