//! Serde model of the versioned taxonomy source.
//!
//! Containment is expressed by nesting, so owning ids never need to be
//! repeated on each skill.

use serde::{Deserialize, Serialize};

use crate::graph::edge::EdgeKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomySource {
    #[serde(default)]
    pub version: Option<String>,
    pub domains: Vec<DomainSource>,
    /// Aggregated prerequisite edges between domains.
    #[serde(default)]
    pub domain_edges: Vec<DomainEdgeSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSource {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub sub_areas: Vec<SubAreaSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAreaSource {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroupSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroupSource {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSource {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub prerequisites: Vec<PrerequisiteRef>,
}

/// A prerequisite given either as a bare skill id or with edge details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrerequisiteRef {
    Id(String),
    Detailed {
        skill: String,
        #[serde(default)]
        kind: EdgeKind,
        #[serde(default)]
        weight: Option<f64>,
    },
}

impl PrerequisiteRef {
    pub fn skill(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Detailed { skill, .. } => skill,
        }
    }

    pub fn kind(&self) -> EdgeKind {
        match self {
            Self::Id(_) => EdgeKind::Primary,
            Self::Detailed { kind, .. } => *kind,
        }
    }

    pub fn weight(&self) -> Option<f64> {
        match self {
            Self::Id(_) => None,
            Self::Detailed { weight, .. } => *weight,
        }
    }
}

/// `from` is a prerequisite of `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEdgeSource {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub kind: EdgeKind,
    #[serde(default)]
    pub weight: Option<f64>,
}
