mod graph_integrity_error;

pub use graph_integrity_error::GraphIntegrityError;

/// Convenience alias used across every skillweave crate.
pub type EngineResult<T> = Result<T, EngineError>;

/// Top-level engine error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("taxonomy integrity violation: {0}")]
    GraphIntegrity(#[from] GraphIntegrityError),

    #[error("unknown taxonomy node: {id}")]
    UnknownNode { id: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("malformed taxonomy source: {reason}")]
    TaxonomySource { reason: String },
}

impl EngineError {
    pub fn unknown_node(id: impl Into<String>) -> Self {
        Self::UnknownNode { id: id.into() }
    }

    /// Whether the error aborts startup rather than being recoverable per call.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::UnknownNode { .. })
    }
}
