//! # skillweave-core
//!
//! Foundation crate for the skillweave dependency engine.
//! Defines the taxonomy identifiers, the tagged node model, assessment
//! levels, derived result types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod assessment;
pub mod config;
pub mod constants;
pub mod errors;
pub mod ids;
pub mod models;
pub mod node;

// Re-export the most commonly used types at the crate root.
pub use assessment::{AssessmentLevel, AssessmentMap, Snapshot};
pub use config::EngineConfig;
pub use errors::{EngineError, EngineResult, GraphIntegrityError};
pub use ids::{DomainId, NodeId, NodeKind, SkillGroupId, SkillId, SubAreaId};
pub use models::{
    CascadeDirection, CascadeResult, HealthReport, HealthStats, LeverageScore, RiskFinding,
    RiskType,
};
pub use node::Node;
