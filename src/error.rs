use thiserror::Error;

use crate::{Edge, Node};

/// Errors reported by the checked (`try_*`) mutators of a graph.
///
/// The unchecked mutators treat the same situations as documented no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The vertex is not part of the graph
    #[error("vertex {0} does not exist")]
    MissingVertex(Node),

    /// Both endpoints exist but the edge does not
    #[error("edge {0} does not exist")]
    MissingEdge(Edge),
}

/// Shorthand for results of checked graph operations
pub type GraphResult<T> = Result<T, GraphError>;
