//! Edge synthesis.
//!
//! Two independent rules, unioned into one set:
//! - proximity: any two nodes that are neither origin nor restricted and lie
//!   strictly closer than `link_radius`
//! - stop adjacency: a restricted node and a generated stop in the same
//!   column, exactly `restricted_offset` apart vertically

use std::collections::BTreeSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sg_core::{Category, NodeId, Real, SgResult, ensure_positive};
use tracing::debug;

use crate::layout::{Layout, Node};

/// Undirected edge stored as (low ID, high ID).
pub type Edge = (NodeId, NodeId);

/// Thresholds for edge synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Proximity edges need a distance strictly below this.
    pub link_radius: Real,
    /// Exact vertical gap between a restricted node and its stop.
    pub restricted_offset: Real,
    /// Scan proximity pairs on the rayon pool from this many eligible nodes.
    pub parallel_min_nodes: usize,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            link_radius: 1.1,
            restricted_offset: 1.0,
            parallel_min_nodes: 512,
        }
    }
}

impl EdgeConfig {
    pub fn validate(&self) -> SgResult<()> {
        ensure_positive(self.link_radius, "edges.link_radius")?;
        ensure_positive(self.restricted_offset, "edges.restricted_offset")?;
        Ok(())
    }
}

/// Order an endpoint pair as (low, high).
pub fn normalize(a: NodeId, b: NodeId) -> Edge {
    if a <= b { (a, b) } else { (b, a) }
}

/// Proximity edges among nodes that are neither origin nor restricted.
pub fn proximity_edges(layout: &Layout, cfg: &EdgeConfig) -> BTreeSet<Edge> {
    let eligible: Vec<&Node> = layout
        .nodes()
        .iter()
        .filter(|n| n.category.links_by_proximity())
        .collect();

    let row = |i: usize| -> Vec<Edge> {
        let a = eligible[i];
        eligible[i + 1..]
            .iter()
            .filter(|b| a.pos.distance(b.pos) < cfg.link_radius)
            .map(|b| normalize(a.id, b.id))
            .collect()
    };

    if eligible.len() >= cfg.parallel_min_nodes {
        debug!(nodes = eligible.len(), "scanning proximity pairs in parallel");
        (0..eligible.len())
            .into_par_iter()
            .flat_map_iter(row)
            .collect()
    } else {
        (0..eligible.len()).flat_map(row).collect()
    }
}

/// Edges from restricted nodes to the generated stop directly above or below.
pub fn stop_adjacency_edges(layout: &Layout, stops: &[NodeId], cfg: &EdgeConfig) -> BTreeSet<Edge> {
    let restricted: Vec<&Node> = layout.of_category(Category::Restricted).collect();
    let mut edges = BTreeSet::new();

    for stop in stops.iter().filter_map(|&id| layout.node(id)) {
        for p in &restricted {
            if p.pos.x == stop.pos.x && (p.pos.y - stop.pos.y).abs() == cfg.restricted_offset {
                edges.insert(normalize(p.id, stop.id));
            }
        }
    }
    edges
}

/// Union of both edge rules over the final layout.
pub fn synthesize_edges(layout: &Layout, stops: &[NodeId], cfg: &EdgeConfig) -> BTreeSet<Edge> {
    let mut edges = proximity_edges(layout, cfg);
    let proximity = edges.len();
    edges.extend(stop_adjacency_edges(layout, stops, cfg));
    debug!(
        proximity,
        stop_adjacency = edges.len() - proximity,
        "edge rules applied"
    );
    edges
}
