use crate::graph::VertexId;

/// Errors surfaced by graph construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("invalid graph capacity {0}: must be at least 1")]
    InvalidCapacity(usize),

    #[error("vertex {vertex} out of range (graph has {count} vertices)")]
    VertexOutOfRange { vertex: VertexId, count: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
