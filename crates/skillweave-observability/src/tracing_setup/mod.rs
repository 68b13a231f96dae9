//! Global subscriber installation.

pub mod spans;

use skillweave_core::config::ObservabilityConfig;
use skillweave_core::errors::{EngineError, EngineResult};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter directive.
pub const ENV_FILTER_VAR: &str = "SKILLWEAVE_LOG";

/// Install the global `tracing` subscriber.
///
/// Returns `Ok(true)` when this call installed it and `Ok(false)` when a
/// global subscriber was already set, so repeated calls are harmless.
pub fn init_tracing(config: &ObservabilityConfig) -> EngineResult<bool> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };
    Ok(installed.is_ok())
}

/// Resolve the filter: `SKILLWEAVE_LOG` wins over the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EngineResult<EnvFilter> {
    match std::env::var(ENV_FILTER_VAR) {
        Ok(directive) if !directive.trim().is_empty() => parse_directive(&directive),
        _ => parse_directive(&config.log_level),
    }
}

fn parse_directive(directive: &str) -> EngineResult<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| EngineError::InvalidConfig {
        reason: format!("observability.log_level {directive:?}: {e}"),
    })
}
