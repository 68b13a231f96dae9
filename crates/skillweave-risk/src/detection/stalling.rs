//! Domains whose average has not meaningfully moved across a long enough
//! history.
//!
//! Only observations in which the domain is assessed count. A stall needs at
//! least two such snapshots plus an assessed current state, the configured
//! number of points overall, and a snapshot span of at least the minimum
//! window. Solid domains never stall.

use tracing::debug;

use skillweave_core::config::{BottleneckConfig, RiskConfig};
use skillweave_core::{DomainId, RiskFinding, RiskType};
use skillweave_taxonomy::TaxonomyGraph;

use super::finding;
use crate::detector::History;
use crate::narrative::score;
use crate::suppression::Suppression;

pub fn detect(
    graph: &TaxonomyGraph,
    history: &History<'_>,
    config: &RiskConfig,
    bottleneck: &BottleneckConfig,
) -> Vec<RiskFinding> {
    graph
        .domains()
        .iter()
        .filter_map(|domain| match stall(graph, domain, history, config, bottleneck) {
            Ok(found) => found,
            Err(reason) => {
                debug!(reason = %reason, "stalling suppressed");
                None
            }
        })
        .collect()
}

fn stall(
    graph: &TaxonomyGraph,
    domain: &DomainId,
    history: &History<'_>,
    config: &RiskConfig,
    bottleneck: &BottleneckConfig,
) -> Result<Option<RiskFinding>, Suppression> {
    let Some(current) = history
        .current
        .domain(domain.as_str())
        .filter(|stats| stats.is_assessed())
    else {
        return Ok(None);
    };
    if current.health_pct >= bottleneck.solid_threshold {
        return Ok(None);
    }

    let assessed: Vec<_> = history
        .snapshots
        .iter()
        .filter_map(|snapshot| {
            snapshot
                .report
                .domain(domain.as_str())
                .filter(|stats| stats.is_assessed())
                .map(|stats| (snapshot.timestamp, stats.average))
        })
        .collect();

    let points = assessed.len() + 1;
    if assessed.len() < 2 || points < config.stalling_min_points {
        return Err(Suppression::TooFewObservations {
            domain: domain.clone(),
            observed: points,
            required: config.stalling_min_points,
        });
    }

    let (Some(first), Some(last)) = (assessed.first(), assessed.last()) else {
        return Ok(None);
    };
    let days = (last.0 - first.0).num_days();
    if days < config.stalling_min_span_days {
        return Err(Suppression::SpanTooShort {
            domain: domain.clone(),
            days,
            required: config.stalling_min_span_days,
        });
    }

    let averages = assessed
        .iter()
        .map(|(_, average)| *average)
        .chain(std::iter::once(current.average));
    let (min, max) = averages.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if max - min >= config.stalling_tolerance {
        return Ok(None);
    }

    Ok(Some(finding(
        RiskType::Stalling,
        current.unmet(),
        &[
            ("domain", graph.label_of(domain.as_str()).to_string()),
            ("average", score(current.average)),
            ("points", points.to_string()),
            ("days", days.to_string()),
        ],
        [domain.clone()],
        vec![domain.to_string()],
        Some(domain.clone()),
    )))
}
