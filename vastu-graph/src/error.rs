//! Error types for vastu-graph

use crate::config::ConfigLoadError;
use crate::graph::NodeId;

/// Result type alias
pub type Result<T> = std::result::Result<T, MergeError>;

/// Spatial merge error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MergeError {
    /// One graph is directed and the other is not
    #[error("Merging a directed graph and an undirected graph is ambiguous")]
    DirectednessMismatch,

    /// One graph is a multigraph and the other is not
    #[error("Merging a multigraph and a graph is ambiguous")]
    MultigraphMismatch,

    /// Both a merging-node list and an unmerged-node list were given
    #[error("Cannot provide both merging nodes and unmerged nodes")]
    ConflictingNodeSelection,

    /// Merge parameters out of range
    #[error("Invalid merge configuration: {0}")]
    InvalidConfig(String),

    /// A referenced node does not exist
    #[error("Node not found: {0}")]
    UnknownNode(NodeId),

    /// Nearest-edge lookup on a graph without edges
    #[error("Graph has no edges to merge points onto")]
    EmptyGraph,

    /// A geometry operation broke its contract
    #[error("Geometry inconsistency: {0}")]
    GeometryInconsistency(String),
}

impl MergeError {
    /// Errors raised by input validation, before the graph is touched.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DirectednessMismatch
                | Self::MultigraphMismatch
                | Self::ConflictingNodeSelection
                | Self::InvalidConfig(_)
        )
    }
}

impl From<ConfigLoadError> for MergeError {
    fn from(err: ConfigLoadError) -> Self {
        match err {
            ConfigLoadError::Validation(msg) => Self::InvalidConfig(msg),
            other => Self::InvalidConfig(other.to_string()),
        }
    }
}
