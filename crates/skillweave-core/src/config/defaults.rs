//! Named defaults for every tunable engine parameter.
//!
//! None of these are clinically validated; they are starting points that
//! deployments override through `EngineConfig`.

/// Weight of a primary (direct) prerequisite edge.
pub const DEFAULT_PRIMARY_EDGE_WEIGHT: f64 = 1.0;
/// Weight of a secondary (weaker, often cross-domain) prerequisite edge.
pub const DEFAULT_SECONDARY_EDGE_WEIGHT: f64 = 0.5;

/// Fraction of cascade impact lost at every hop (retention = 1 - decay).
pub const DEFAULT_CASCADE_HOP_DECAY: f64 = 0.4;
/// Impact below which a node is neither reported nor expanded.
pub const DEFAULT_CASCADE_MATERIALITY_THRESHOLD: f64 = 0.05;
/// Hard hop limit for cascade traversal.
pub const DEFAULT_CASCADE_MAX_DEPTH: usize = 4;

/// Health percentage at or above which a domain counts as solid.
pub const DEFAULT_SOLID_THRESHOLD: f64 = 0.83;
/// Leverage above which the bottleneck is surfaced as a risk finding.
pub const DEFAULT_BOTTLENECK_SIGNIFICANCE: f64 = 0.5;

/// Score gap a dependent may lead its prerequisite by before it is an inversion.
pub const DEFAULT_INVERSION_TOLERANCE: f64 = 0.5;
/// Average-score decline that counts as a regression.
pub const DEFAULT_REGRESSION_TOLERANCE: f64 = 0.15;
/// Score range under which a domain counts as stalled.
pub const DEFAULT_STALLING_TOLERANCE: f64 = 0.1;
/// Minimum snapshot span (days) before stalling is considered.
pub const DEFAULT_STALLING_MIN_SPAN_DAYS: i64 = 28;
/// Minimum observations (snapshots + current) for stalling.
pub const DEFAULT_STALLING_MIN_POINTS: usize = 3;

pub const DEFAULT_LOG_LEVEL: &str = "info";
