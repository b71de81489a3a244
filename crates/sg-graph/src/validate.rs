//! Layout and edge-set consistency checks.

use std::collections::BTreeSet;

use sg_core::{Category, NodeId, SgResult};

use crate::edges::Edge;
use crate::error::GraphError;
use crate::layout::Layout;

/// IDs match slots, the name index is consistent, coordinates are finite.
pub(crate) fn validate_layout(layout: &Layout) -> SgResult<()> {
    for (slot, node) in layout.nodes.iter().enumerate() {
        if node.id.slot() != slot {
            return Err(GraphError::SlotMismatch { node: node.id, slot }.into());
        }
        if layout.by_name.get(&node.name) != Some(&node.id) {
            return Err(GraphError::NameIndexMismatch {
                name: node.name.clone(),
            }
            .into());
        }
        if !node.pos.is_finite() {
            return Err(GraphError::NonFiniteCoordinate {
                name: node.name.clone(),
            }
            .into());
        }
    }

    if layout.by_name.len() != layout.nodes.len() {
        let name = layout
            .by_name
            .keys()
            .find(|name| layout.get(name).is_none_or(|n| &n.name != *name))
            .cloned()
            .unwrap_or_default();
        return Err(GraphError::NameIndexMismatch { name }.into());
    }

    Ok(())
}

/// Every stop reference is a stop node of the layout.
pub(crate) fn validate_stops(layout: &Layout, stops: &[NodeId]) -> SgResult<()> {
    for &id in stops {
        match layout.node(id) {
            Some(node) if node.category == Category::Stop => {}
            _ => return Err(GraphError::UnknownStop { node: id }.into()),
        }
    }
    Ok(())
}

/// Endpoints exist, edges are stored low-to-high, no self-loops.
pub(crate) fn validate_edges(layout: &Layout, edges: &BTreeSet<Edge>) -> SgResult<()> {
    for &(a, b) in edges {
        if a == b {
            return Err(GraphError::SelfLoop { node: a }.into());
        }
        if a > b {
            return Err(GraphError::UnnormalizedEdge { a, b }.into());
        }
        if layout.node(a).is_none() || layout.node(b).is_none() {
            return Err(GraphError::DanglingEdge { a, b }.into());
        }
    }
    Ok(())
}
