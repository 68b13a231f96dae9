//! Re-surfaces the bottleneck as a finding when its leverage is significant.

use tracing::debug;

use skillweave_cascade::find_bottleneck;
use skillweave_core::config::BottleneckConfig;
use skillweave_core::{RiskFinding, RiskType};
use skillweave_taxonomy::TaxonomyGraph;

use super::finding;
use crate::detector::History;
use crate::narrative::score;
use crate::suppression::Suppression;

pub fn detect(
    graph: &TaxonomyGraph,
    history: &History<'_>,
    config: &BottleneckConfig,
) -> Vec<RiskFinding> {
    let top = match find_bottleneck(graph, &history.current, config) {
        Ok(Some(top)) => top,
        Ok(None) => {
            debug!(reason = %Suppression::NoBottleneck, "bottleneck pass suppressed");
            return Vec::new();
        }
        Err(err) => {
            debug!(error = %err, "bottleneck ranking failed");
            return Vec::new();
        }
    };

    if top.leverage <= config.significance_threshold {
        let reason = Suppression::BelowSignificance {
            domain: top.domain_id.clone(),
            leverage: top.leverage,
        };
        debug!(reason = %reason, "bottleneck pass suppressed");
        return Vec::new();
    }

    let domain = top.domain_id.clone();
    vec![finding(
        RiskType::Bottleneck,
        top.leverage,
        &[
            ("domain", graph.label_of(domain.as_str()).to_string()),
            ("downstream", top.downstream.len().to_string()),
            ("leverage", score(top.leverage)),
        ],
        std::iter::once(domain.clone()).chain(top.downstream.iter().cloned()),
        vec![domain.to_string()],
        Some(domain),
    )]
}
