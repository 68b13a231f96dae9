//! Dependent ahead of its prerequisite.
//!
//! Checked on skill edges using levels and on domain edges using averages.
//! Both endpoints must be assessed; an unassessed prerequisite is unknown,
//! not weak. A domain pair already reported through one of its skill edges
//! is not reported again at the domain level.

use std::collections::HashSet;

use tracing::debug;

use skillweave_core::config::RiskConfig;
use skillweave_core::{DomainId, NodeId, RiskFinding, RiskType};
use skillweave_taxonomy::TaxonomyGraph;

use super::finding;
use crate::detector::History;
use crate::narrative::score;

pub fn detect(graph: &TaxonomyGraph, history: &History<'_>, config: &RiskConfig) -> Vec<RiskFinding> {
    let mut findings = Vec::new();
    let mut covered: HashSet<(DomainId, DomainId)> = HashSet::new();

    for link in graph.skill_edges() {
        let level = |id: &NodeId| {
            history
                .current_map
                .get(id.as_str())
                .filter(|level| level.is_assessed())
                .map(|level| level.score())
        };
        if let (Some(pre), Some(dep)) = (level(link.prerequisite), level(link.dependent)) {
            if let Some(found) = check(graph, link.prerequisite, link.dependent, pre, dep, config) {
                if let (Ok(from), Ok(to)) =
                    (graph.domain_of(link.prerequisite), graph.domain_of(link.dependent))
                {
                    if from != to {
                        covered.insert((from.clone(), to.clone()));
                    }
                }
                findings.push(found);
            }
        }
    }

    for link in graph.domain_edges() {
        let average = |id: &NodeId| {
            history
                .current
                .domain(id.as_str())
                .filter(|stats| stats.is_assessed())
                .map(|stats| stats.average)
        };
        let (Ok(from), Ok(to)) = (graph.domain_of(link.prerequisite), graph.domain_of(link.dependent))
        else {
            continue;
        };
        if covered.contains(&(from.clone(), to.clone())) {
            debug!(%from, %to, "domain inversion already reported through a skill edge");
            continue;
        }
        if let (Some(pre), Some(dep)) = (average(link.prerequisite), average(link.dependent)) {
            findings.extend(check(graph, link.prerequisite, link.dependent, pre, dep, config));
        }
    }

    findings
}

fn check(
    graph: &TaxonomyGraph,
    prerequisite: &NodeId,
    dependent: &NodeId,
    prerequisite_score: f64,
    dependent_score: f64,
    config: &RiskConfig,
) -> Option<RiskFinding> {
    let gap = dependent_score - prerequisite_score;
    if gap <= config.inversion_tolerance {
        return None;
    }
    let prerequisite_domain = graph.domain_of(prerequisite).ok()?.clone();
    let dependent_domain = graph.domain_of(dependent).ok()?.clone();

    Some(finding(
        RiskType::Inversion,
        gap,
        &[
            ("prerequisite", graph.label_of(prerequisite.as_str()).to_string()),
            ("dependent", graph.label_of(dependent.as_str()).to_string()),
            ("prerequisite_score", score(prerequisite_score)),
            ("dependent_score", score(dependent_score)),
            ("gap", score(gap)),
        ],
        [prerequisite_domain.clone(), dependent_domain],
        vec![prerequisite.as_str().to_string(), dependent.as_str().to_string()],
        Some(prerequisite_domain),
    ))
}
