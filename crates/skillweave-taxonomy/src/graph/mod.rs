//! The immutable taxonomy graph.
//!
//! Domains and skills are petgraph nodes; sub-areas and skill groups are pure
//! containment records. Edges always point prerequisite → dependent.

pub mod dag_enforcement;
pub mod edge;

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use dashmap::DashMap;
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, info};

use skillweave_core::config::TaxonomyConfig;
use skillweave_core::errors::{EngineError, EngineResult, GraphIntegrityError};
use skillweave_core::node::{DomainNode, SkillGroupNode, SkillNode, SubAreaNode};
use skillweave_core::{DomainId, Node, NodeId, NodeKind, SkillGroupId, SkillId, SubAreaId};
use skillweave_observability::taxonomy_span;

use crate::source::TaxonomySource;
use edge::{DependencyEdge, DependencyLink, EdgeKind};

pub(crate) type DependencyGraph = DiGraph<NodeId, DependencyEdge>;

/// Static taxonomy plus the prerequisite DAG over skills and over domains.
///
/// Safe to share across threads behind an `Arc`; the only interior
/// mutability is the closure memo, which never changes an answer.
#[derive(Debug)]
pub struct TaxonomyGraph {
    version: Option<String>,
    /// Raw id → node record. Ids are unique across all kinds.
    nodes: HashMap<String, Node>,
    domains: Vec<DomainId>,
    sub_areas: Vec<SubAreaId>,
    skill_groups: Vec<SkillGroupId>,
    skills: Vec<SkillId>,
    /// Aggregate raw id → member skills in declaration order.
    members: HashMap<String, Vec<SkillId>>,
    pub(crate) graph: DependencyGraph,
    index: HashMap<NodeId, NodeIndex>,
    pub(crate) ancestors_memo: DashMap<NodeIndex, Arc<BTreeSet<NodeId>>>,
    pub(crate) descendants_memo: DashMap<NodeIndex, Arc<BTreeSet<NodeId>>>,
}

impl TaxonomyGraph {
    /// Parse a JSON taxonomy source and build the graph.
    pub fn from_json(json: &str, config: &TaxonomyConfig) -> EngineResult<Self> {
        let source: TaxonomySource =
            serde_json::from_str(json).map_err(|e| EngineError::TaxonomySource {
                reason: e.to_string(),
            })?;
        Self::build(source, config)
    }

    /// Build and validate the graph. Any cycle, dangling reference, duplicate
    /// id, or malformed edge aborts construction.
    pub fn build(source: TaxonomySource, config: &TaxonomyConfig) -> EngineResult<Self> {
        let span = taxonomy_span!(source.domains.len());
        let _guard = span.enter();

        let mut taxonomy = Self {
            version: source.version.clone(),
            nodes: HashMap::new(),
            domains: Vec::new(),
            sub_areas: Vec::new(),
            skill_groups: Vec::new(),
            skills: Vec::new(),
            members: HashMap::new(),
            graph: DiGraph::new(),
            index: HashMap::new(),
            ancestors_memo: DashMap::new(),
            descendants_memo: DashMap::new(),
        };

        taxonomy.register_nodes(&source)?;
        taxonomy.add_skill_edges(&source, config)?;
        taxonomy.add_domain_edges(&source, config)?;
        taxonomy.lift_skill_edges();
        dag_enforcement::ensure_acyclic(&taxonomy.graph)?;

        info!(
            domains = taxonomy.domains.len(),
            sub_areas = taxonomy.sub_areas.len(),
            skills = taxonomy.skills.len(),
            edges = taxonomy.graph.edge_count(),
            "taxonomy graph built"
        );
        Ok(taxonomy)
    }

    fn insert_node(&mut self, node: Node) -> Result<(), GraphIntegrityError> {
        let raw = node.raw_id().to_string();
        if self.nodes.contains_key(&raw) {
            return Err(GraphIntegrityError::DuplicateId { id: raw });
        }
        if node.kind().bears_edges() {
            let id = node.id();
            let idx = self.graph.add_node(id.clone());
            self.index.insert(id, idx);
        }
        self.nodes.insert(raw, node);
        Ok(())
    }

    fn register_nodes(&mut self, source: &TaxonomySource) -> Result<(), GraphIntegrityError> {
        for domain in &source.domains {
            let domain_id = DomainId::new(domain.id.as_str());
            self.insert_node(Node::Domain(DomainNode {
                id: domain_id.clone(),
                label: domain.label.clone(),
            }))?;
            self.domains.push(domain_id.clone());

            for sub_area in &domain.sub_areas {
                let sub_area_id = SubAreaId::new(sub_area.id.as_str());
                self.insert_node(Node::SubArea(SubAreaNode {
                    id: sub_area_id.clone(),
                    label: sub_area.label.clone(),
                    domain: domain_id.clone(),
                }))?;
                self.sub_areas.push(sub_area_id.clone());

                for group in &sub_area.skill_groups {
                    let group_id = SkillGroupId::new(group.id.as_str());
                    self.insert_node(Node::SkillGroup(SkillGroupNode {
                        id: group_id.clone(),
                        label: group.label.clone(),
                        sub_area: sub_area_id.clone(),
                        domain: domain_id.clone(),
                    }))?;
                    self.skill_groups.push(group_id.clone());

                    for skill in &group.skills {
                        let skill_id = SkillId::new(skill.id.as_str());
                        self.insert_node(Node::Skill(SkillNode {
                            id: skill_id.clone(),
                            label: skill.label.clone(),
                            skill_group: group_id.clone(),
                            sub_area: sub_area_id.clone(),
                            domain: domain_id.clone(),
                        }))?;
                        self.skills.push(skill_id.clone());
                        for owner in [domain_id.as_str(), sub_area_id.as_str(), group_id.as_str()] {
                            self.members
                                .entry(owner.to_string())
                                .or_default()
                                .push(skill_id.clone());
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn add_skill_edges(
        &mut self,
        source: &TaxonomySource,
        config: &TaxonomyConfig,
    ) -> Result<(), GraphIntegrityError> {
        let skills = source
            .domains
            .iter()
            .flat_map(|d| &d.sub_areas)
            .flat_map(|s| &s.skill_groups)
            .flat_map(|g| &g.skills);
        for skill in skills {
            for prerequisite in &skill.prerequisites {
                self.connect(
                    prerequisite.skill(),
                    &skill.id,
                    NodeKind::Skill,
                    prerequisite.kind(),
                    prerequisite.weight(),
                    config,
                )?;
            }
        }
        Ok(())
    }

    fn add_domain_edges(
        &mut self,
        source: &TaxonomySource,
        config: &TaxonomyConfig,
    ) -> Result<(), GraphIntegrityError> {
        for edge in &source.domain_edges {
            self.connect(
                &edge.from,
                &edge.to,
                NodeKind::Domain,
                edge.kind,
                edge.weight,
                config,
            )?;
        }
        Ok(())
    }

    /// Aggregate cross-domain skill prerequisites into domain edges.
    ///
    /// A declared domain edge wins over anything lifted onto the same pair.
    /// Lifted pairs keep the strongest skill weight. A lifted edge that would
    /// close a domain cycle is skipped; the skill graph still carries it.
    fn lift_skill_edges(&mut self) {
        let declared: HashSet<(NodeIndex, NodeIndex)> = self
            .graph
            .edge_references()
            .filter(|edge| {
                self.graph
                    .node_weight(edge.source())
                    .is_some_and(|id| id.kind() == NodeKind::Domain)
            })
            .map(|edge| (edge.source(), edge.target()))
            .collect();

        let lifted: Vec<(NodeIndex, NodeIndex, DependencyEdge)> = self
            .graph
            .edge_references()
            .filter_map(|edge| {
                let prerequisite = self.graph.node_weight(edge.source())?;
                let dependent = self.graph.node_weight(edge.target())?;
                if prerequisite.kind() != NodeKind::Skill {
                    return None;
                }
                let from = self.nodes.get(prerequisite.as_str())?.domain().clone();
                let to = self.nodes.get(dependent.as_str())?.domain().clone();
                if from == to {
                    return None;
                }
                let a = self.index_of(&NodeId::Domain(from))?;
                let b = self.index_of(&NodeId::Domain(to))?;
                (!declared.contains(&(a, b))).then_some((a, b, *edge.weight()))
            })
            .collect();

        for (a, b, edge) in lifted {
            if self.graph.find_edge(a, b).is_none() && has_path_connecting(&self.graph, b, a, None) {
                debug!(
                    from = %self.graph[a],
                    to = %self.graph[b],
                    "lifted domain edge would close a cycle, skipped"
                );
                continue;
            }
            self.upsert_edge(a, b, edge);
        }
    }

    /// Add `from → to` after checking both ends exist and share `kind`.
    /// A repeated edge keeps the stronger weight.
    fn connect(
        &mut self,
        from: &str,
        to: &str,
        kind: NodeKind,
        edge_kind: EdgeKind,
        weight: Option<f64>,
        config: &TaxonomyConfig,
    ) -> Result<(), GraphIntegrityError> {
        let dangling = || GraphIntegrityError::DanglingReference {
            from: from.to_string(),
            to: to.to_string(),
        };
        let from_node = self.nodes.get(from).ok_or_else(dangling)?;
        let to_node = self.nodes.get(to).ok_or_else(dangling)?;
        if from_node.kind() != kind || to_node.kind() != kind {
            return Err(GraphIntegrityError::MixedEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if from == to {
            return Err(GraphIntegrityError::SelfLoop {
                id: from.to_string(),
            });
        }

        let weight = weight.unwrap_or_else(|| edge_kind.default_weight(config));
        if !(weight > 0.0 && weight <= 1.0) {
            return Err(GraphIntegrityError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        let (Some(&a), Some(&b)) = (
            self.index.get(&from_node.id()),
            self.index.get(&to_node.id()),
        ) else {
            return Err(dangling());
        };
        self.upsert_edge(
            a,
            b,
            DependencyEdge {
                kind: edge_kind,
                weight,
            },
        );
        Ok(())
    }

    fn upsert_edge(&mut self, a: NodeIndex, b: NodeIndex, edge: DependencyEdge) {
        match self.graph.find_edge(a, b) {
            Some(existing) => {
                if let Some(current) = self.graph.edge_weight_mut(existing) {
                    if edge.weight > current.weight {
                        *current = edge;
                    }
                }
            }
            None => {
                self.graph.add_edge(a, b, edge);
            }
        }
    }

    // ── Lookups ──────────────────────────────────────────────────────────

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Resolve a raw id string to its tagged id.
    pub fn resolve(&self, raw_id: &str) -> Option<NodeId> {
        self.nodes.get(raw_id).map(Node::id)
    }

    /// Node record for a raw id of any kind.
    pub fn node_by_raw(&self, raw_id: &str) -> Option<&Node> {
        self.nodes.get(raw_id)
    }

    /// Node record for a tagged id. A kind mismatch is treated as unknown.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes
            .get(id.as_str())
            .filter(|node| node.kind() == id.kind())
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    pub(crate) fn require(&self, id: &NodeId) -> EngineResult<&Node> {
        self.node(id)
            .ok_or_else(|| EngineError::unknown_node(id.as_str()))
    }

    pub(crate) fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Skill record for a raw skill id.
    pub fn skill(&self, raw_id: &str) -> Option<&SkillNode> {
        match self.nodes.get(raw_id) {
            Some(Node::Skill(skill)) => Some(skill),
            _ => None,
        }
    }

    pub fn domains(&self) -> &[DomainId] {
        &self.domains
    }

    pub fn sub_areas(&self) -> &[SubAreaId] {
        &self.sub_areas
    }

    pub fn skill_groups(&self) -> &[SkillGroupId] {
        &self.skill_groups
    }

    pub fn skills(&self) -> &[SkillId] {
        &self.skills
    }

    /// Skills contained by `id`. A skill contains only itself.
    pub fn skills_in(&self, id: &NodeId) -> EngineResult<&[SkillId]> {
        match self.require(id)? {
            Node::Skill(skill) => Ok(std::slice::from_ref(&skill.id)),
            _ => Ok(self
                .members
                .get(id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[])),
        }
    }

    /// Owning domain of any node. A domain owns itself.
    pub fn domain_of(&self, id: &NodeId) -> EngineResult<&DomainId> {
        Ok(self.require(id)?.domain())
    }

    /// Owning sub-area of any node; `None` for domains.
    pub fn sub_area_of(&self, id: &NodeId) -> EngineResult<Option<&SubAreaId>> {
        Ok(self.require(id)?.sub_area())
    }

    /// Display label of a node, falling back to its raw id.
    pub fn label_of<'a>(&'a self, raw_id: &'a str) -> &'a str {
        self.nodes.get(raw_id).map_or(raw_id, Node::label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All edges whose endpoints are of `kind` (domains or skills).
    pub fn edges_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = DependencyLink<'_>> {
        self.graph.edge_references().filter_map(move |edge| {
            let prerequisite = self.graph.node_weight(edge.source())?;
            let dependent = self.graph.node_weight(edge.target())?;
            (prerequisite.kind() == kind).then_some(DependencyLink {
                prerequisite,
                dependent,
                edge: edge.weight(),
            })
        })
    }

    pub fn domain_edges(&self) -> impl Iterator<Item = DependencyLink<'_>> {
        self.edges_of_kind(NodeKind::Domain)
    }

    pub fn skill_edges(&self) -> impl Iterator<Item = DependencyLink<'_>> {
        self.edges_of_kind(NodeKind::Skill)
    }
}
