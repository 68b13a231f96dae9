//! Leverage ranking over the domain graph.
//!
//! ```text
//! leverage(d) = (1 − health_pct(d)) × Σ unmet(x)  for x in descendants(d)
//! ```
//!
//! Unassessed downstream domains count as fully unmet. Domains already at or
//! above the solid threshold are never candidates.

use std::cmp::Ordering;

use tracing::debug;

use skillweave_core::config::BottleneckConfig;
use skillweave_core::constants::SCORE_EPSILON;
use skillweave_core::errors::EngineResult;
use skillweave_core::{HealthReport, LeverageScore, NodeId};
use skillweave_observability::bottleneck_span;
use skillweave_taxonomy::TaxonomyGraph;

/// Every candidate domain with its leverage, best intervention first.
///
/// Ordering: leverage descending, then fewer transitive prerequisites (closer
/// to the root), then domain id.
pub fn rank_leverage(
    graph: &TaxonomyGraph,
    report: &HealthReport,
    config: &BottleneckConfig,
) -> EngineResult<Vec<LeverageScore>> {
    let span = bottleneck_span!(graph.domains().len());
    let _guard = span.enter();

    let mut scores = Vec::new();
    for (domain_id, stats) in report.assessed_domains() {
        if stats.health_pct >= config.solid_threshold {
            continue;
        }
        let node = NodeId::Domain(domain_id.clone());
        let descendants = graph.descendants(&node)?;
        let downstream: Vec<_> = descendants
            .iter()
            .filter_map(|id| id.as_domain().cloned())
            .collect();
        let blocked: f64 = downstream
            .iter()
            .map(|id| report.domain(id.as_str()).map_or(1.0, |s| s.unmet()))
            .sum();
        scores.push(LeverageScore {
            domain_id: domain_id.clone(),
            leverage: stats.unmet() * blocked,
            downstream,
            prerequisite_count: graph.prerequisite_count(&node)?,
        });
    }

    scores.sort_by(compare_leverage);
    debug!(candidates = scores.len(), "leverage ranked");
    Ok(scores)
}

/// The single highest-leverage domain, if any domain is holding anything back.
///
/// `None` when nothing is assessed, every assessed domain is solid, or the
/// best candidate has no unmet downstream capability.
pub fn find_bottleneck(
    graph: &TaxonomyGraph,
    report: &HealthReport,
    config: &BottleneckConfig,
) -> EngineResult<Option<LeverageScore>> {
    let top = rank_leverage(graph, report, config)?.into_iter().next();
    Ok(top.filter(|score| score.leverage > 0.0))
}

/// Leverage values within epsilon compare equal so the tie-break on
/// prerequisite count applies to scores that differ only by rounding.
fn compare_leverage(a: &LeverageScore, b: &LeverageScore) -> Ordering {
    leverage_key(b.leverage)
        .cmp(&leverage_key(a.leverage))
        .then_with(|| a.prerequisite_count.cmp(&b.prerequisite_count))
        .then_with(|| a.domain_id.cmp(&b.domain_id))
}

fn leverage_key(leverage: f64) -> i64 {
    (leverage / SCORE_EPSILON).round() as i64
}
