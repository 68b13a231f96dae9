//! # skillweave-engine
//!
//! One handle over the taxonomy graph and configuration exposing the four
//! engine operations: health, cascade, bottleneck, and risk detection.

mod engine;

pub use engine::SkillEngine;
pub use skillweave_core::{
    AssessmentLevel, AssessmentMap, CascadeDirection, CascadeResult, EngineConfig, EngineError,
    EngineResult, HealthReport, LeverageScore, RiskFinding, RiskType, Snapshot,
};
