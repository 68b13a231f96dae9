//! Domain average declining between consecutive observations.
//!
//! With exactly one snapshot, that snapshot is compared against the current
//! map. With two or more, the two most recent snapshots are compared and so
//! are the latest snapshot and the current map; a domain is reported once,
//! with the steeper of the two declines.

use tracing::debug;

use skillweave_core::config::RiskConfig;
use skillweave_core::{HealthReport, RiskFinding, RiskType};
use skillweave_taxonomy::TaxonomyGraph;

use super::finding;
use crate::detector::History;
use crate::narrative::score;
use crate::suppression::Suppression;

pub fn detect(graph: &TaxonomyGraph, history: &History<'_>, config: &RiskConfig) -> Vec<RiskFinding> {
    let pairs = comparisons(history);
    if pairs.is_empty() {
        debug!(reason = %Suppression::NoBaseline, "regression pass suppressed");
        return Vec::new();
    }

    let mut findings = Vec::new();
    for domain in graph.domains() {
        let steepest = pairs
            .iter()
            .filter_map(|(before, after)| {
                let was = before.domain(domain.as_str()).filter(|s| s.is_assessed())?;
                let now = after.domain(domain.as_str()).filter(|s| s.is_assessed())?;
                Some((was, now, was.average - now.average))
            })
            .filter(|&(_, _, decline)| decline > config.regression_tolerance)
            .max_by(|a, b| a.2.total_cmp(&b.2));
        let Some((was, now, decline)) = steepest else {
            continue;
        };
        findings.push(finding(
            RiskType::Regression,
            decline,
            &[
                ("domain", graph.label_of(domain.as_str()).to_string()),
                ("before", score(was.average)),
                ("after", score(now.average)),
            ],
            [domain.clone()],
            vec![domain.to_string()],
            Some(domain.clone()),
        ));
    }
    findings
}

/// `(before, after)` report pairs to compare, oldest pair first.
fn comparisons<'h>(history: &'h History<'_>) -> Vec<(&'h HealthReport, &'h HealthReport)> {
    match history.snapshots.as_slice() {
        [] => Vec::new(),
        [only] => vec![(&only.report, &history.current)],
        [.., previous, latest] => vec![
            (&previous.report, &latest.report),
            (&latest.report, &history.current),
        ],
    }
}
