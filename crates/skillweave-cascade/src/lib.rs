//! # skillweave-cascade
//!
//! Propagation of a hypothetical change through the prerequisite graph, and
//! the leverage ranking that picks the single highest-value intervention.

pub mod bottleneck;
pub mod simulator;

pub use bottleneck::{find_bottleneck, rank_leverage};
pub use simulator::{simulate, try_simulate};
