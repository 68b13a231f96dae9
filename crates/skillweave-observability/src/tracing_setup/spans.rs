//! Span definitions per operation: taxonomy load, health, cascade, bottleneck, risk.
//!
//! Callers must depend on `tracing` directly; the macros expand to `tracing::info_span!`.

/// Create a taxonomy-load span.
#[macro_export]
macro_rules! taxonomy_span {
    ($domain_count:expr) => {
        tracing::info_span!("skillweave.taxonomy", domain_count = $domain_count)
    };
}

/// Create a health aggregation span.
#[macro_export]
macro_rules! health_span {
    ($assessed:expr) => {
        tracing::info_span!("skillweave.health", assessed = $assessed)
    };
}

/// Create a cascade simulation span.
#[macro_export]
macro_rules! cascade_span {
    ($source:expr, $direction:expr) => {
        tracing::info_span!("skillweave.cascade", source = %$source, direction = %$direction)
    };
}

/// Create a bottleneck analysis span.
#[macro_export]
macro_rules! bottleneck_span {
    ($domain_count:expr) => {
        tracing::info_span!("skillweave.bottleneck", domain_count = $domain_count)
    };
}

/// Create a risk detection span.
#[macro_export]
macro_rules! risk_span {
    ($snapshot_count:expr) => {
        tracing::info_span!("skillweave.risk", snapshot_count = $snapshot_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TAXONOMY: &str = "skillweave.taxonomy";
    pub const HEALTH: &str = "skillweave.health";
    pub const CASCADE: &str = "skillweave.cascade";
    pub const BOTTLENECK: &str = "skillweave.bottleneck";
    pub const RISK: &str = "skillweave.risk";
}
