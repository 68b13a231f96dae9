use skillweave_core::config::TaxonomyConfig;
use skillweave_core::{AssessmentLevel, AssessmentMap};
use skillweave_health::{compute_health, domain_averages};
use skillweave_taxonomy::TaxonomyGraph;
use test_fixtures::{load_fixture_str, CHAIN_TAXONOMY, REFERENCE_TAXONOMY};

fn load(path: &str) -> TaxonomyGraph {
    TaxonomyGraph::from_json(&load_fixture_str(path), &TaxonomyConfig::default()).unwrap()
}

fn map(entries: &[(&str, AssessmentLevel)]) -> AssessmentMap {
    entries.iter().map(|(id, level)| (id.to_string(), *level)).collect()
}

#[test]
fn fully_solid_domain_next_to_unassessed_ones() {
    let graph = load(CHAIN_TAXONOMY);
    let assessments = map(&[
        ("D1-s1", AssessmentLevel::Solid),
        ("D1-s2", AssessmentLevel::Solid),
    ]);
    let report = compute_health(&graph, &assessments);

    let d1 = report.domain("D1").unwrap();
    assert_eq!(d1.average, 3.0);
    assert_eq!(d1.health_pct, 1.0);
    assert_eq!(d1.assessed_count, 2);
    assert_eq!(d1.total_count, 2);

    for id in ["D2", "D3"] {
        let stats = report.domain(id).unwrap();
        assert_eq!(stats.health_pct, 0.0);
        assert_eq!(stats.assessed_count, 0);
        assert_eq!(stats.total_count, 2);
    }
}

#[test]
fn not_assessed_entries_do_not_count() {
    let graph = load(CHAIN_TAXONOMY);
    let assessments = map(&[
        ("D1-s1", AssessmentLevel::Developing),
        ("D1-s2", AssessmentLevel::NotAssessed),
    ]);
    let d1 = *compute_health(&graph, &assessments).domain("D1").unwrap();
    assert_eq!(d1.assessed_count, 1);
    assert_eq!(d1.average, 2.0);
    assert!((d1.health_pct - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn assessed_low_is_distinct_from_unassessed() {
    let graph = load(CHAIN_TAXONOMY);
    let report = compute_health(&graph, &map(&[("D2-s1", AssessmentLevel::NeedsWork)]));
    let d2 = report.domain("D2").unwrap();
    let d3 = report.domain("D3").unwrap();
    assert!(d2.is_assessed());
    assert!(d2.health_pct > 0.0);
    assert!(!d3.is_assessed());
}

#[test]
fn unknown_skills_are_reported_and_ignored() {
    let graph = load(CHAIN_TAXONOMY);
    let assessments = map(&[
        ("ghost-b", AssessmentLevel::Solid),
        ("ghost-a", AssessmentLevel::NeedsWork),
        ("D1-s1", AssessmentLevel::NeedsWork),
    ]);
    let report = compute_health(&graph, &assessments);
    assert_eq!(report.unknown_skills, vec!["ghost-a", "ghost-b"]);
    assert_eq!(report.domain("D1").unwrap().average, 1.0);
}

#[test]
fn sub_areas_and_groups_aggregate_their_own_skills() {
    let graph = load(REFERENCE_TAXONOMY);
    let assessments = map(&[
        ("d2a-1", AssessmentLevel::NeedsWork),
        ("d2a-2", AssessmentLevel::Solid),
        ("d2b-1", AssessmentLevel::Developing),
    ]);
    let report = compute_health(&graph, &assessments);

    assert_eq!(report.sub_area("d2a").unwrap().average, 2.0);
    assert_eq!(report.sub_area("d2b").unwrap().average, 2.0);
    assert_eq!(report.sub_area("d2b").unwrap().assessed_count, 1);
    assert_eq!(report.skill_group("d2a-g1").unwrap().assessed_count, 2);

    let d2 = report.domain("d2").unwrap();
    assert_eq!(d2.assessed_count, 3);
    assert_eq!(d2.total_count, 10);
    assert_eq!(d2.average, 2.0);
}

#[test]
fn every_taxonomy_node_is_present() {
    let graph = load(REFERENCE_TAXONOMY);
    let report = compute_health(&graph, &AssessmentMap::new());
    assert_eq!(report.domains.len(), 9);
    assert_eq!(report.sub_areas.len(), 47);
    assert_eq!(report.skill_groups.len(), 47);
    assert!(report.domains.values().all(|s| s.health_pct == 0.0));
}

#[test]
fn recomputation_reflects_the_current_map() {
    let graph = load(CHAIN_TAXONOMY);
    let mut assessments = map(&[("D1-s1", AssessmentLevel::NeedsWork)]);
    let before = compute_health(&graph, &assessments);
    assessments.insert("D1-s1".into(), AssessmentLevel::Solid);
    let after = compute_health(&graph, &assessments);
    assert_eq!(before.domain("D1").unwrap().average, 1.0);
    assert_eq!(after.domain("D1").unwrap().average, 3.0);
}

#[test]
fn domain_averages_skip_unassessed_domains() {
    let graph = load(CHAIN_TAXONOMY);
    let report = compute_health(
        &graph,
        &map(&[("D2-s1", AssessmentLevel::Developing), ("D2-s2", AssessmentLevel::Solid)]),
    );
    let averages = domain_averages(&report);
    assert_eq!(averages.len(), 1);
    assert_eq!(averages.get("D2"), Some(&2.5));
}

#[test]
fn report_serializes_for_the_presentation_layer() {
    let graph = load(CHAIN_TAXONOMY);
    let report = compute_health(&graph, &map(&[("D1-s1", AssessmentLevel::Solid)]));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["domains"]["D1"]["assessedCount"], 1);
    assert_eq!(json["subAreas"]["D1-a"]["healthPct"], 1.0);
}

#[test]
fn node_health_matches_the_full_report() {
    use skillweave_core::NodeId;
    use skillweave_health::node_health;

    let graph = load(REFERENCE_TAXONOMY);
    let assessments = map(&[
        ("d5a-1", AssessmentLevel::NeedsWork),
        ("d5b-2", AssessmentLevel::Solid),
        ("d6a-1", AssessmentLevel::Solid),
    ]);
    let report = compute_health(&graph, &assessments);
    let d5 = graph.resolve("d5").unwrap();
    assert_eq!(
        node_health(&graph, &d5, &assessments).unwrap(),
        *report.domain("d5").unwrap()
    );

    let skill = graph.resolve("d5a-1").unwrap();
    let stats = node_health(&graph, &skill, &assessments).unwrap();
    assert_eq!(stats.average, 1.0);
    assert_eq!(stats.total_count, 1);

    let ghost = NodeId::Skill("ghost".into());
    assert!(node_health(&graph, &ghost, &assessments).is_err());
}
