//! Property tests for cascade propagation and bottleneck selection.

use proptest::prelude::*;

use skillweave_cascade::{find_bottleneck, simulate};
use skillweave_core::config::{BottleneckConfig, CascadeConfig, TaxonomyConfig};
use skillweave_core::{AssessmentLevel, AssessmentMap, CascadeDirection};
use skillweave_health::compute_health;
use skillweave_taxonomy::TaxonomyGraph;
use test_fixtures::{load_fixture_str, CHAIN_TAXONOMY, REFERENCE_TAXONOMY};

fn load(path: &str) -> TaxonomyGraph {
    TaxonomyGraph::from_json(&load_fixture_str(path), &TaxonomyConfig::default()).unwrap()
}

fn arb_level() -> impl Strategy<Value = AssessmentLevel> {
    prop_oneof![
        Just(AssessmentLevel::NotAssessed),
        Just(AssessmentLevel::NeedsWork),
        Just(AssessmentLevel::Developing),
        Just(AssessmentLevel::Solid),
    ]
}

fn arb_direction() -> impl Strategy<Value = CascadeDirection> {
    prop_oneof![Just(CascadeDirection::Deficit), Just(CascadeDirection::Mastery)]
}

fn reference_ids() -> Vec<String> {
    let graph = load(REFERENCE_TAXONOMY);
    graph
        .domains()
        .iter()
        .map(|d| d.to_string())
        .chain(graph.sub_areas().iter().map(|s| s.to_string()))
        .chain(graph.skills().iter().map(|s| s.to_string()))
        .collect()
}

fn reference_skills() -> Vec<String> {
    load(REFERENCE_TAXONOMY)
        .skills()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

proptest! {
    #[test]
    fn raising_decay_never_raises_impact(
        source in prop::sample::select(reference_ids()),
        direction in arb_direction(),
        low in 0.0f64..0.9,
        delta in 0.0f64..0.09,
        entries in prop::collection::vec(
            (prop::sample::select(reference_skills()), arb_level()),
            0..30,
        ),
    ) {
        let graph = load(REFERENCE_TAXONOMY);
        let assessments: AssessmentMap = entries.into_iter().collect();
        let gentle = CascadeConfig { hop_decay: low, ..CascadeConfig::default() };
        let harsh = CascadeConfig { hop_decay: low + delta, ..CascadeConfig::default() };

        let a = simulate(&graph, &source, &assessments, direction, &gentle);
        let b = simulate(&graph, &source, &assessments, direction, &harsh);

        for (id, impact) in &b.affected {
            let before = a.impact_of(id);
            prop_assert!(before.is_some(), "{} appeared only under higher decay", id);
            prop_assert!(*impact <= before.unwrap() + 1e-12);
        }
    }

    #[test]
    fn impacts_stay_in_unit_interval_and_exclude_source(
        source in prop::sample::select(reference_ids()),
        direction in arb_direction(),
    ) {
        let graph = load(REFERENCE_TAXONOMY);
        let result = simulate(
            &graph,
            &source,
            &AssessmentMap::new(),
            direction,
            &CascadeConfig::default(),
        );
        prop_assert!(!result.affected.contains_key(&source));
        for (id, impact) in &result.affected {
            prop_assert!(*impact > 0.0 && *impact <= 1.0, "{} = {}", id, impact);
            prop_assert!(result.hops[id] >= 1);
            prop_assert!(result.hops[id] <= CascadeConfig::default().max_depth);
        }
    }

    #[test]
    fn mastered_chain_prefix_is_never_the_bottleneck(
        d3 in prop::collection::vec(arb_level(), 2),
    ) {
        let graph = load(CHAIN_TAXONOMY);
        let mut assessments: AssessmentMap = ["D1-s1", "D1-s2", "D2-s1", "D2-s2"]
            .iter()
            .map(|id| (id.to_string(), AssessmentLevel::Solid))
            .collect();
        assessments.insert("D3-s1".to_string(), d3[0]);
        assessments.insert("D3-s2".to_string(), d3[1]);

        let report = compute_health(&graph, &assessments);
        let top = find_bottleneck(&graph, &report, &BottleneckConfig::default()).unwrap();
        if let Some(top) = top {
            prop_assert!(top.domain_id.as_str() != "D1");
            prop_assert!(top.domain_id.as_str() != "D2");
        }
    }
}
