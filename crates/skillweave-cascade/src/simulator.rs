//! Breadth-first cascade with per-hop decay and a materiality cutoff.
//!
//! ```text
//! impact(next) = impact(current) × edge_weight × (1 − hop_decay)
//! ```
//!
//! A node reachable by several paths keeps the maximum impact, never the sum.
//! Nodes whose impact falls below the materiality threshold are dropped and
//! not expanded, and no path is followed past `max_depth` hops.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use tracing::debug;

use skillweave_core::config::CascadeConfig;
use skillweave_core::errors::{EngineError, EngineResult};
use skillweave_core::{AssessmentMap, CascadeDirection, CascadeResult, Node, NodeId};
use skillweave_health::node_health;
use skillweave_observability::cascade_span;
use skillweave_taxonomy::{Direction, TaxonomyGraph};

/// Simulate a cascade from `source_id`. Never fails: an unknown source
/// yields an inactive result.
pub fn simulate(
    graph: &TaxonomyGraph,
    source_id: &str,
    assessments: &AssessmentMap,
    direction: CascadeDirection,
    config: &CascadeConfig,
) -> CascadeResult {
    let span = cascade_span!(source_id, direction.as_str());
    let _guard = span.enter();

    match try_simulate(graph, source_id, assessments, direction, config) {
        Ok(result) => result,
        Err(err) => {
            debug!(error = %err, "cascade source unresolved, returning inactive result");
            CascadeResult::inactive(source_id, direction)
        }
    }
}

/// Fallible form of [`simulate`]; reports an unknown source as an error.
pub fn try_simulate(
    graph: &TaxonomyGraph,
    source_id: &str,
    assessments: &AssessmentMap,
    direction: CascadeDirection,
    config: &CascadeConfig,
) -> EngineResult<CascadeResult> {
    let source = graph
        .node_by_raw(source_id)
        .ok_or_else(|| EngineError::unknown_node(source_id))?;
    let source_node_id = source.id();

    let seeds = seed_nodes(graph, source, &source_node_id)?;
    let seed_strength = seed_strength(graph, &source_node_id, assessments, direction)?;

    let mut result = CascadeResult {
        active: true,
        source_id: source_id.to_string(),
        source_kind: Some(source.kind()),
        direction,
        seed_strength,
        affected: BTreeMap::new(),
        hops: BTreeMap::new(),
    };
    if seed_strength <= 0.0 {
        return Ok(result);
    }

    let walk = match direction {
        CascadeDirection::Deficit => Direction::Dependents,
        CascadeDirection::Mastery => Direction::Prerequisites,
    };
    let retention = config.retention();
    let excluded: HashSet<&NodeId> = seeds.iter().collect();
    let mut best: HashMap<NodeId, (f64, usize)> = HashMap::new();
    let mut queue: VecDeque<(NodeId, usize, f64)> = seeds
        .iter()
        .map(|id| (id.clone(), 0, seed_strength))
        .collect();

    while let Some((current, depth, strength)) = queue.pop_front() {
        if depth >= config.max_depth {
            continue;
        }
        for neighbor in graph.neighbors(&current, walk)? {
            if excluded.contains(&neighbor.id) {
                continue;
            }
            let impact = strength * neighbor.weight * retention;
            if impact < config.materiality_threshold {
                continue;
            }
            let improves = best
                .get(&neighbor.id)
                .map_or(true, |&(existing, _)| impact > existing);
            if !improves {
                continue;
            }
            best.insert(neighbor.id.clone(), (impact, depth + 1));
            queue.push_back((neighbor.id, depth + 1, impact));
        }
    }

    for (id, (impact, hops)) in best {
        let raw = id.as_str().to_string();
        result.affected.insert(raw.clone(), impact.min(1.0));
        result.hops.insert(raw, hops);
    }

    debug!(
        affected = result.affected.len(),
        seed = seed_strength,
        "cascade simulated"
    );
    Ok(result)
}

/// Edge-bearing nodes the traversal starts from. Sub-areas and skill groups
/// have no edges of their own, so their member skills seed the walk.
fn seed_nodes(graph: &TaxonomyGraph, source: &Node, id: &NodeId) -> EngineResult<Vec<NodeId>> {
    if source.kind().bears_edges() {
        return Ok(vec![id.clone()]);
    }
    Ok(graph
        .skills_in(id)?
        .iter()
        .cloned()
        .map(NodeId::Skill)
        .collect())
}

/// Unassessed sources are treated as a full hypothetical change. Otherwise a
/// deficit carries the source's unmet fraction and mastery its health.
fn seed_strength(
    graph: &TaxonomyGraph,
    source: &NodeId,
    assessments: &AssessmentMap,
    direction: CascadeDirection,
) -> EngineResult<f64> {
    let health = node_health(graph, source, assessments)?;
    if !health.is_assessed() {
        return Ok(1.0);
    }
    Ok(match direction {
        CascadeDirection::Deficit => health.unmet(),
        CascadeDirection::Mastery => health.health_pct,
    })
}
