/// skillweave version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highest score on the assessment scale (`Solid`).
pub const MAX_LEVEL_SCORE: f64 = 3.0;

/// Float comparison slack used when ranking scores.
pub const SCORE_EPSILON: f64 = 1e-9;
