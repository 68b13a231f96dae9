use std::sync::Arc;

use tracing::{debug, info};

use skillweave_core::config::CascadeConfig;
use skillweave_core::errors::EngineResult;
use skillweave_core::{
    AssessmentMap, CascadeDirection, CascadeResult, DomainId, EngineConfig, HealthReport,
    LeverageScore, RiskFinding, Snapshot,
};
use skillweave_taxonomy::TaxonomyGraph;

/// Shared, read-only engine handle.
///
/// Every operation is a pure function of its arguments and the immutable
/// graph, so one engine can serve concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct SkillEngine {
    graph: Arc<TaxonomyGraph>,
    config: EngineConfig,
}

impl SkillEngine {
    /// Wrap an existing graph. Fails if `config` is out of range.
    pub fn new(graph: Arc<TaxonomyGraph>, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    /// Build the graph from taxonomy JSON. Integrity errors abort construction.
    pub fn from_json(taxonomy_json: &str, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let graph = TaxonomyGraph::from_json(taxonomy_json, &config.taxonomy)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "skill engine ready"
        );
        Ok(Self {
            graph: Arc::new(graph),
            config,
        })
    }

    /// Build from taxonomy JSON and a TOML config document.
    pub fn from_toml(taxonomy_json: &str, config_toml: &str) -> EngineResult<Self> {
        Self::from_json(taxonomy_json, EngineConfig::from_toml(config_toml)?)
    }

    /// Install the global subscriber described by `[observability]`.
    /// Returns `Ok(false)` if one was already installed.
    pub fn init_tracing(&self) -> EngineResult<bool> {
        skillweave_observability::init_tracing(&self.config.observability)
    }

    pub fn graph(&self) -> &Arc<TaxonomyGraph> {
        &self.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compute_health(&self, assessments: &AssessmentMap) -> HealthReport {
        skillweave_health::compute_health(&self.graph, assessments)
    }

    /// Cascade with the configured decay and threshold. An unknown source
    /// yields an inactive result.
    pub fn simulate(
        &self,
        source_id: &str,
        assessments: &AssessmentMap,
        direction: CascadeDirection,
    ) -> CascadeResult {
        self.simulate_with(source_id, assessments, direction, &self.config.cascade)
    }

    /// Cascade with caller-supplied propagation parameters.
    pub fn simulate_with(
        &self,
        source_id: &str,
        assessments: &AssessmentMap,
        direction: CascadeDirection,
        cascade: &CascadeConfig,
    ) -> CascadeResult {
        skillweave_cascade::simulate(&self.graph, source_id, assessments, direction, cascade)
    }

    /// The highest-leverage domain, or `None` when nothing is holding
    /// anything back.
    pub fn find_bottleneck(&self, assessments: &AssessmentMap) -> Option<DomainId> {
        self.bottleneck_score(assessments)
            .map(|score| score.domain_id)
    }

    /// Like [`find_bottleneck`](Self::find_bottleneck) with the full score.
    pub fn bottleneck_score(&self, assessments: &AssessmentMap) -> Option<LeverageScore> {
        let report = self.compute_health(assessments);
        match skillweave_cascade::find_bottleneck(&self.graph, &report, &self.config.bottleneck) {
            Ok(top) => top,
            Err(err) => {
                debug!(error = %err, "bottleneck analysis failed");
                None
            }
        }
    }

    /// Every bottleneck candidate, best first.
    pub fn rank_leverage(&self, assessments: &AssessmentMap) -> EngineResult<Vec<LeverageScore>> {
        let report = self.compute_health(assessments);
        skillweave_cascade::rank_leverage(&self.graph, &report, &self.config.bottleneck)
    }

    /// Risk findings for `current` against `snapshots`, most severe first.
    pub fn detect(&self, current: &AssessmentMap, snapshots: &[Snapshot]) -> Vec<RiskFinding> {
        skillweave_risk::detect(&self.graph, current, snapshots, &self.config)
    }
}
