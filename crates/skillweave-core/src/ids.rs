//! Typed identifiers for every level of the taxonomy.
//!
//! Each level gets its own newtype so a domain id can never be passed where a
//! skill id is expected. [`NodeId`] is the tagged union used by traversal code.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

macro_rules! taxonomy_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[ts(export)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

taxonomy_id!(
    /// Identifier of a top-level domain.
    DomainId
);
taxonomy_id!(
    /// Identifier of a sub-area inside a domain.
    SubAreaId
);
taxonomy_id!(
    /// Identifier of a skill group inside a sub-area.
    SkillGroupId
);
taxonomy_id!(
    /// Identifier of an assessable skill.
    SkillId
);

/// Discriminator for the four taxonomy levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum NodeKind {
    Domain,
    SubArea,
    SkillGroup,
    Skill,
}

impl NodeKind {
    /// Only domains and skills carry dependency edges.
    pub fn bears_edges(self) -> bool {
        matches!(self, Self::Domain | Self::Skill)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::SubArea => "sub-area",
            Self::SkillGroup => "skill group",
            Self::Skill => "skill",
        }
    }
}

/// A reference to any taxonomy node, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
#[ts(export)]
pub enum NodeId {
    Domain(DomainId),
    SubArea(SubAreaId),
    SkillGroup(SkillGroupId),
    Skill(SkillId),
}

impl NodeId {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Domain(_) => NodeKind::Domain,
            Self::SubArea(_) => NodeKind::SubArea,
            Self::SkillGroup(_) => NodeKind::SkillGroup,
            Self::Skill(_) => NodeKind::Skill,
        }
    }

    /// The untagged identifier string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Domain(id) => id.as_str(),
            Self::SubArea(id) => id.as_str(),
            Self::SkillGroup(id) => id.as_str(),
            Self::Skill(id) => id.as_str(),
        }
    }

    pub fn as_domain(&self) -> Option<&DomainId> {
        match self {
            Self::Domain(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_skill(&self) -> Option<&SkillId> {
        match self {
            Self::Skill(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind().as_str(), self.as_str())
    }
}

impl From<DomainId> for NodeId {
    fn from(id: DomainId) -> Self {
        Self::Domain(id)
    }
}

impl From<SubAreaId> for NodeId {
    fn from(id: SubAreaId) -> Self {
        Self::SubArea(id)
    }
}

impl From<SkillGroupId> for NodeId {
    fn from(id: SkillGroupId) -> Self {
        Self::SkillGroup(id)
    }
}

impl From<SkillId> for NodeId {
    fn from(id: SkillId) -> Self {
        Self::Skill(id)
    }
}
