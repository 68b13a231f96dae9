//! # skillweave-health
//!
//! Turns a sparse `{skill → level}` map into per-domain, per-sub-area, and
//! per-skill-group [`HealthStats`](skillweave_core::HealthStats). Pure and
//! recomputed on every call.

pub mod aggregator;

pub use aggregator::{compute_health, domain_averages, node_health};
