//! Entry point running every detection pass over one history.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use skillweave_core::{AssessmentMap, EngineConfig, HealthReport, RiskFinding, Snapshot};
use skillweave_health::compute_health;
use skillweave_observability::risk_span;
use skillweave_taxonomy::TaxonomyGraph;

use crate::detection::{bottleneck, inversion, regression, stalling};

/// Health of one historical snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotHealth {
    pub timestamp: DateTime<Utc>,
    pub report: HealthReport,
}

/// Snapshot health ordered oldest first, plus the current state.
#[derive(Debug, Clone)]
pub struct History<'a> {
    pub current_map: &'a AssessmentMap,
    pub current: HealthReport,
    pub snapshots: Vec<SnapshotHealth>,
}

impl<'a> History<'a> {
    /// Aggregate health for every snapshot and the current map. Snapshots are
    /// ordered by timestamp; the caller's slice is left untouched.
    pub fn build(graph: &TaxonomyGraph, current: &'a AssessmentMap, snapshots: &[Snapshot]) -> Self {
        let mut ordered: Vec<&Snapshot> = snapshots.iter().collect();
        ordered.sort_by_key(|snapshot| snapshot.timestamp);
        Self {
            current_map: current,
            current: compute_health(graph, current),
            snapshots: ordered
                .into_iter()
                .map(|snapshot| SnapshotHealth {
                    timestamp: snapshot.timestamp,
                    report: compute_health(graph, &snapshot.assessments),
                })
                .collect(),
        }
    }
}

/// Run all four passes and return findings most severe first.
///
/// Severity ties are broken by type (inversion, regression, bottleneck,
/// stalling) and then by title, so output order is deterministic.
pub fn detect(
    graph: &TaxonomyGraph,
    current: &AssessmentMap,
    snapshots: &[Snapshot],
    config: &EngineConfig,
) -> Vec<RiskFinding> {
    let span = risk_span!(snapshots.len());
    let _guard = span.enter();

    let history = History::build(graph, current, snapshots);

    let mut findings = inversion::detect(graph, &history, &config.risk);
    findings.extend(regression::detect(graph, &history, &config.risk));
    findings.extend(bottleneck::detect(graph, &history, &config.bottleneck));
    findings.extend(stalling::detect(
        graph,
        &history,
        &config.risk,
        &config.bottleneck,
    ));

    findings.sort_by(|a, b| {
        b.severity
            .total_cmp(&a.severity)
            .then_with(|| a.risk_type.cmp(&b.risk_type))
            .then_with(|| a.title.cmp(&b.title))
    });

    if findings.is_empty() {
        debug!("no risks detected");
    } else {
        info!(count = findings.len(), "risks detected");
    }
    findings
}
