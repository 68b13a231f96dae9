use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use skillweave_core::errors::EngineResult;
use skillweave_core::{
    AssessmentMap, DomainId, HealthReport, HealthStats, NodeId, SkillGroupId, SubAreaId,
};
use skillweave_observability::health_span;
use skillweave_taxonomy::TaxonomyGraph;

/// Running score total for one aggregation node.
#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    sum: f64,
    count: usize,
}

impl Bucket {
    fn add(&mut self, score: f64) {
        self.sum += score;
        self.count += 1;
    }
}

/// Compute health for every domain, sub-area, and skill group.
///
/// Level-0 entries are skipped. Ids unknown to the taxonomy are reported in
/// `unknown_skills` and otherwise ignored. Every taxonomy node appears in the
/// output, so "unassessed" stays distinguishable via `assessed_count == 0`.
pub fn compute_health(graph: &TaxonomyGraph, assessments: &AssessmentMap) -> HealthReport {
    let span = health_span!(assessments.len());
    let _guard = span.enter();

    let mut buckets: HashMap<&str, Bucket> = HashMap::new();
    let mut unknown_skills = Vec::new();

    for (skill_id, level) in assessments {
        if !level.is_assessed() {
            continue;
        }
        let Some(skill) = graph.skill(skill_id) else {
            unknown_skills.push(skill_id.clone());
            continue;
        };
        let score = level.score();
        for owner in [
            skill.domain.as_str(),
            skill.sub_area.as_str(),
            skill.skill_group.as_str(),
        ] {
            buckets.entry(owner).or_default().add(score);
        }
    }

    if !unknown_skills.is_empty() {
        unknown_skills.sort();
        debug!(count = unknown_skills.len(), "ignored assessments for unknown skills");
    }

    let stats_for = |raw: &str, id: NodeId| -> HealthStats {
        let total = graph.skills_in(&id).map_or(0, <[_]>::len);
        let bucket = buckets.get(raw).copied().unwrap_or_default();
        HealthStats::from_sum(bucket.sum, bucket.count, total)
    };

    let domains: BTreeMap<DomainId, HealthStats> = graph
        .domains()
        .iter()
        .map(|id| (id.clone(), stats_for(id.as_str(), id.clone().into())))
        .collect();
    let sub_areas: BTreeMap<SubAreaId, HealthStats> = graph
        .sub_areas()
        .iter()
        .map(|id| (id.clone(), stats_for(id.as_str(), id.clone().into())))
        .collect();
    let skill_groups: BTreeMap<SkillGroupId, HealthStats> = graph
        .skill_groups()
        .iter()
        .map(|id| (id.clone(), stats_for(id.as_str(), id.clone().into())))
        .collect();

    HealthReport {
        domains,
        sub_areas,
        skill_groups,
        unknown_skills,
    }
}

/// Average score per assessed domain. Unassessed domains are omitted.
pub fn domain_averages(report: &HealthReport) -> BTreeMap<DomainId, f64> {
    report
        .assessed_domains()
        .map(|(id, stats)| (id.clone(), stats.average))
        .collect()
}

/// Health of a single node of any kind, computed from its member skills.
///
/// For a skill this is its own level. Cheaper than a full report when only
/// one node matters.
pub fn node_health(
    graph: &TaxonomyGraph,
    id: &NodeId,
    assessments: &AssessmentMap,
) -> EngineResult<HealthStats> {
    let members = graph.skills_in(id)?;
    let mut bucket = Bucket::default();
    for skill in members {
        if let Some(level) = assessments.get(skill.as_str()).filter(|l| l.is_assessed()) {
            bucket.add(level.score());
        }
    }
    Ok(HealthStats::from_sum(bucket.sum, bucket.count, members.len()))
}
