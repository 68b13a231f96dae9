//! Property tests for risk detection.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use skillweave_core::config::TaxonomyConfig;
use skillweave_core::{AssessmentLevel, AssessmentMap, EngineConfig, Snapshot};
use skillweave_risk::detect;
use skillweave_taxonomy::TaxonomyGraph;
use test_fixtures::{load_fixture_str, REFERENCE_TAXONOMY};

fn reference() -> TaxonomyGraph {
    TaxonomyGraph::from_json(
        &load_fixture_str(REFERENCE_TAXONOMY),
        &TaxonomyConfig::default(),
    )
    .unwrap()
}

fn skills() -> Vec<String> {
    reference().skills().iter().map(|s| s.to_string()).collect()
}

fn arb_level() -> impl Strategy<Value = AssessmentLevel> {
    prop_oneof![
        Just(AssessmentLevel::NotAssessed),
        Just(AssessmentLevel::NeedsWork),
        Just(AssessmentLevel::Developing),
        Just(AssessmentLevel::Solid),
    ]
}

fn arb_map() -> impl Strategy<Value = AssessmentMap> {
    prop::collection::vec((prop::sample::select(skills()), arb_level()), 0..40)
        .prop_map(|entries| entries.into_iter().collect())
}

fn arb_snapshots() -> impl Strategy<Value = Vec<Snapshot>> {
    prop::collection::vec((0i64..120, arb_map()), 0..5).prop_map(|entries| {
        let origin = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        entries
            .into_iter()
            .map(|(days, map)| Snapshot::new(origin + Duration::days(days), map))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn findings_are_ordered_and_positive(
        current in arb_map(),
        snapshots in arb_snapshots(),
    ) {
        let graph = reference();
        let findings = detect(&graph, &current, &snapshots, &EngineConfig::default());

        for pair in findings.windows(2) {
            prop_assert!(pair[0].severity >= pair[1].severity);
        }
        for finding in &findings {
            prop_assert!(finding.severity > 0.0);
            prop_assert!(!finding.affected_domains.is_empty());
            prop_assert!(!finding.title.contains('{'), "unrendered slot in {}", finding.title);
            prop_assert!(
                !finding.description.contains('{'),
                "unrendered slot in {}",
                finding.description
            );
        }
    }

    #[test]
    fn detection_is_deterministic(
        current in arb_map(),
        snapshots in arb_snapshots(),
    ) {
        let graph = reference();
        let config = EngineConfig::default();
        let first = detect(&graph, &current, &snapshots, &config);
        let second = detect(&graph, &current, &snapshots, &config);
        prop_assert_eq!(first, second);
    }
}
