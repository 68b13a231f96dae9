//! Tagged taxonomy node records.
//!
//! Containment is stored on each record, so resolving a node's domain or
//! sub-area never requires walking the hierarchy.

use serde::{Deserialize, Serialize};

use crate::ids::{DomainId, NodeId, NodeKind, SkillGroupId, SkillId, SubAreaId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainNode {
    pub id: DomainId,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAreaNode {
    pub id: SubAreaId,
    pub label: Option<String>,
    pub domain: DomainId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroupNode {
    pub id: SkillGroupId,
    pub label: Option<String>,
    pub sub_area: SubAreaId,
    pub domain: DomainId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: SkillId,
    pub label: Option<String>,
    pub skill_group: SkillGroupId,
    pub sub_area: SubAreaId,
    pub domain: DomainId,
}

/// Any node of the four-level taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
    Domain(DomainNode),
    SubArea(SubAreaNode),
    SkillGroup(SkillGroupNode),
    Skill(SkillNode),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Domain(_) => NodeKind::Domain,
            Self::SubArea(_) => NodeKind::SubArea,
            Self::SkillGroup(_) => NodeKind::SkillGroup,
            Self::Skill(_) => NodeKind::Skill,
        }
    }

    pub fn id(&self) -> NodeId {
        match self {
            Self::Domain(n) => NodeId::Domain(n.id.clone()),
            Self::SubArea(n) => NodeId::SubArea(n.id.clone()),
            Self::SkillGroup(n) => NodeId::SkillGroup(n.id.clone()),
            Self::Skill(n) => NodeId::Skill(n.id.clone()),
        }
    }

    pub fn raw_id(&self) -> &str {
        match self {
            Self::Domain(n) => n.id.as_str(),
            Self::SubArea(n) => n.id.as_str(),
            Self::SkillGroup(n) => n.id.as_str(),
            Self::Skill(n) => n.id.as_str(),
        }
    }

    /// Human-readable label, falling back to the id.
    pub fn label(&self) -> &str {
        let label = match self {
            Self::Domain(n) => n.label.as_deref(),
            Self::SubArea(n) => n.label.as_deref(),
            Self::SkillGroup(n) => n.label.as_deref(),
            Self::Skill(n) => n.label.as_deref(),
        };
        label.unwrap_or_else(|| self.raw_id())
    }

    /// Owning domain. A domain owns itself.
    pub fn domain(&self) -> &DomainId {
        match self {
            Self::Domain(n) => &n.id,
            Self::SubArea(n) => &n.domain,
            Self::SkillGroup(n) => &n.domain,
            Self::Skill(n) => &n.domain,
        }
    }

    /// Owning sub-area. `None` for domains; a sub-area owns itself.
    pub fn sub_area(&self) -> Option<&SubAreaId> {
        match self {
            Self::Domain(_) => None,
            Self::SubArea(n) => Some(&n.id),
            Self::SkillGroup(n) => Some(&n.sub_area),
            Self::Skill(n) => Some(&n.sub_area),
        }
    }
}
