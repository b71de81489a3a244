//! Graph-specific error types.

use sg_core::{NodeId, SgError};

/// Layout and edge-set consistency errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node's ID does not match the slot it is stored in.
    SlotMismatch { node: NodeId, slot: usize },

    /// The name index points somewhere other than the node carrying that name.
    NameIndexMismatch { name: String },

    /// A node has a NaN or infinite coordinate.
    NonFiniteCoordinate { name: String },

    /// An edge refers to a node that is not in the layout.
    DanglingEdge { a: NodeId, b: NodeId },

    /// An edge joins a node to itself.
    SelfLoop { node: NodeId },

    /// An edge is not stored as (low, high).
    UnnormalizedEdge { a: NodeId, b: NodeId },

    /// A stop reference is outside the layout or not a stop node.
    UnknownStop { node: NodeId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::SlotMismatch { node, slot } => {
                write!(f, "Node {} is stored in slot {}", node, slot)
            }
            GraphError::NameIndexMismatch { name } => {
                write!(f, "Name index for '{}' points at another node", name)
            }
            GraphError::NonFiniteCoordinate { name } => {
                write!(f, "Node '{}' has a non-finite coordinate", name)
            }
            GraphError::DanglingEdge { a, b } => {
                write!(f, "Edge ({}, {}) refers to a node outside the layout", a, b)
            }
            GraphError::SelfLoop { node } => {
                write!(f, "Edge joins node {} to itself", node)
            }
            GraphError::UnnormalizedEdge { a, b } => {
                write!(f, "Edge ({}, {}) is not stored low-to-high", a, b)
            }
            GraphError::UnknownStop { node } => {
                write!(f, "Stop reference {} is not a stop node in the layout", node)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for SgError {
    fn from(err: GraphError) -> Self {
        SgError::Invariant {
            what: err.to_string(),
        }
    }
}
