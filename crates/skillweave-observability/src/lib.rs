//! # skillweave-observability
//!
//! Subscriber installation and the span macros every engine operation runs under.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, ENV_FILTER_VAR};
