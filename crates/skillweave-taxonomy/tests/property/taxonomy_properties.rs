//! Property tests for taxonomy construction and closures.

use proptest::prelude::*;

use skillweave_core::config::TaxonomyConfig;
use skillweave_core::errors::{EngineError, GraphIntegrityError};
use skillweave_core::{NodeId, SkillId};
use skillweave_taxonomy::source::{
    DomainSource, PrerequisiteRef, SkillGroupSource, SkillSource, SubAreaSource,
};
use skillweave_taxonomy::{TaxonomyGraph, TaxonomySource};

/// One group of `n` skills `s0..s{n-1}`; `(p, d)` makes `s{p}` a prerequisite of `s{d}`.
fn source(n: usize, edges: &[(usize, usize)]) -> TaxonomySource {
    let skills = (0..n)
        .map(|i| SkillSource {
            id: format!("s{i}"),
            label: None,
            prerequisites: edges
                .iter()
                .filter(|&&(p, d)| d == i && p != d)
                .map(|&(p, _)| PrerequisiteRef::Id(format!("s{p}")))
                .collect(),
        })
        .collect();
    TaxonomySource {
        version: None,
        domains: vec![DomainSource {
            id: "d".into(),
            label: None,
            sub_areas: vec![SubAreaSource {
                id: "a".into(),
                label: None,
                skill_groups: vec![SkillGroupSource {
                    id: "g".into(),
                    label: None,
                    skills,
                }],
            }],
        }],
        domain_edges: Vec::new(),
    }
}

/// Kahn's algorithm, independent of the graph under test.
fn has_cycle(n: usize, edges: &[(usize, usize)]) -> bool {
    let mut unique: Vec<(usize, usize)> = edges.iter().copied().filter(|(p, d)| p != d).collect();
    unique.sort_unstable();
    unique.dedup();
    let mut indegree = vec![0usize; n];
    for &(_, d) in &unique {
        indegree[d] += 1;
    }
    let mut ready: Vec<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
    let mut removed = 0;
    while let Some(node) = ready.pop() {
        removed += 1;
        for &(p, d) in &unique {
            if p == node {
                indegree[d] -= 1;
                if indegree[d] == 0 {
                    ready.push(d);
                }
            }
        }
    }
    removed < n
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 2)
}

fn skill(i: usize) -> NodeId {
    NodeId::Skill(SkillId::new(format!("s{i}")))
}

proptest! {
    #[test]
    fn construction_rejects_exactly_the_cyclic_edge_sets(edges in edge_strategy(12)) {
        let result = TaxonomyGraph::build(source(12, &edges), &TaxonomyConfig::default());
        if has_cycle(12, &edges) {
            let is_cycle_error = matches!(
                result,
                Err(EngineError::GraphIntegrity(GraphIntegrityError::Cycle { .. }))
            );
            prop_assert!(is_cycle_error, "cyclic edge set was accepted");
        } else {
            prop_assert!(result.is_ok(), "acyclic edge set rejected: {:?}", result.err());
        }
    }
}

proptest! {
    #[test]
    fn forward_edges_always_build(edges in edge_strategy(12)) {
        // Orienting every edge low → high can never close a cycle.
        let forward: Vec<(usize, usize)> = edges
            .into_iter()
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        prop_assert!(TaxonomyGraph::build(source(12, &forward), &TaxonomyConfig::default()).is_ok());
    }
}

proptest! {
    #[test]
    fn ancestors_and_descendants_are_inverse(edges in edge_strategy(10)) {
        let forward: Vec<(usize, usize)> = edges
            .into_iter()
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        let graph = TaxonomyGraph::build(source(10, &forward), &TaxonomyConfig::default()).unwrap();
        for a in 0..10 {
            let descendants = graph.descendants(&skill(a)).unwrap();
            prop_assert!(!descendants.contains(&skill(a)));
            for b in 0..10 {
                let forward_hit = descendants.contains(&skill(b));
                let backward_hit = graph.ancestors(&skill(b)).unwrap().contains(&skill(a));
                prop_assert_eq!(forward_hit, backward_hit);
            }
        }
    }
}
