//! Property tests for health aggregation.

use proptest::prelude::*;

use skillweave_core::config::TaxonomyConfig;
use skillweave_core::{AssessmentLevel, AssessmentMap};
use skillweave_health::compute_health;
use skillweave_taxonomy::TaxonomyGraph;
use test_fixtures::{load_fixture_str, REFERENCE_TAXONOMY};

fn arb_level() -> impl Strategy<Value = AssessmentLevel> {
    prop_oneof![
        Just(AssessmentLevel::NotAssessed),
        Just(AssessmentLevel::NeedsWork),
        Just(AssessmentLevel::Developing),
        Just(AssessmentLevel::Solid),
    ]
}

fn arb_map(skills: Vec<String>) -> impl Strategy<Value = AssessmentMap> {
    prop::collection::vec(
        (prop::sample::select(skills), arb_level()),
        0..40,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn health_pct_is_bounded_and_zero_iff_unassessed(
        assessments in arb_map(
            TaxonomyGraph::from_json(&load_fixture_str(REFERENCE_TAXONOMY), &TaxonomyConfig::default())
                .unwrap()
                .skills()
                .iter()
                .map(|s| s.to_string())
                .collect()
        )
    ) {
        let graph = TaxonomyGraph::from_json(
            &load_fixture_str(REFERENCE_TAXONOMY),
            &TaxonomyConfig::default(),
        )
        .unwrap();
        let report = compute_health(&graph, &assessments);

        let all = report
            .domains
            .values()
            .chain(report.sub_areas.values())
            .chain(report.skill_groups.values());
        for stats in all {
            prop_assert!((0.0..=1.0).contains(&stats.health_pct));
            prop_assert_eq!(stats.health_pct == 0.0, stats.assessed_count == 0);
            prop_assert!(stats.assessed_count <= stats.total_count);
        }
    }
}
