use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Four-value ordered assessment scale.
///
/// `NotAssessed` (0) means "not yet evaluated" and is excluded from every
/// average. It is not the same as being evaluated and scoring lowest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export, type = "0 | 1 | 2 | 3")]
pub enum AssessmentLevel {
    #[default]
    NotAssessed = 0,
    NeedsWork = 1,
    Developing = 2,
    Solid = 3,
}

impl AssessmentLevel {
    /// Numeric score on the 0–3 scale.
    pub fn score(self) -> f64 {
        f64::from(self as u8)
    }

    pub fn is_assessed(self) -> bool {
        self != Self::NotAssessed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotAssessed => "not assessed",
            Self::NeedsWork => "needs work",
            Self::Developing => "developing",
            Self::Solid => "solid",
        }
    }
}

impl TryFrom<u8> for AssessmentLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotAssessed),
            1 => Ok(Self::NeedsWork),
            2 => Ok(Self::Developing),
            3 => Ok(Self::Solid),
            other => Err(format!("assessment level out of range 0..=3: {other}")),
        }
    }
}

impl From<AssessmentLevel> for u8 {
    fn from(level: AssessmentLevel) -> Self {
        level as u8
    }
}

impl fmt::Display for AssessmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse map of skill id → assessment level.
///
/// Keys are raw skill ids as supplied by the assessment store; ids that do not
/// exist in the taxonomy are tolerated and ignored by the engine.
pub type AssessmentMap = HashMap<String, AssessmentLevel>;

/// An immutable, timestamped copy of a full assessment map.
///
/// Created by the persistence layer; the engine only reads snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    #[ts(type = "Record<string, number>")]
    pub assessments: AssessmentMap,
}

impl Snapshot {
    pub fn new(timestamp: DateTime<Utc>, assessments: AssessmentMap) -> Self {
        Self {
            timestamp,
            assessments,
        }
    }
}
