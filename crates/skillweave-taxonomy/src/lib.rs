//! # skillweave-taxonomy
//!
//! The static taxonomy (domains → sub-areas → skill groups → skills) and the
//! prerequisite DAG between skills and between domains. Built once, shared
//! read-only by every other component.

pub mod graph;
pub mod source;
pub mod traversal;

pub use graph::edge::{DependencyEdge, DependencyLink, EdgeKind};
pub use graph::TaxonomyGraph;
pub use source::TaxonomySource;
pub use traversal::{Direction, Neighbor};
