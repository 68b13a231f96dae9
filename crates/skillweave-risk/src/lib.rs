//! # skillweave-risk
//!
//! Typed risk findings from the current assessment map and an ordered
//! history of snapshots. Four independent passes run on every call and the
//! combined list is returned most severe first.

pub mod detection;
pub mod detector;
pub mod narrative;
pub mod suppression;

pub use detector::{detect, History};
pub use suppression::Suppression;
