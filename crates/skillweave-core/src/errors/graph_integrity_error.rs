/// Malformed taxonomy input. Always fatal at load time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphIntegrityError {
    #[error("cycle detected in prerequisite graph: {path}")]
    Cycle { path: String },

    #[error("dangling edge reference: {from} -> {to}")]
    DanglingReference { from: String, to: String },

    #[error("duplicate node id: {id}")]
    DuplicateId { id: String },

    #[error("node lists itself as a prerequisite: {id}")]
    SelfLoop { id: String },

    #[error("edge weight out of range (0, 1]: {from} -> {to} = {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("edge joins incompatible node kinds: {from} -> {to}")]
    MixedEdge { from: String, to: String },
}
