//! The frozen schematic graph.

use std::collections::BTreeSet;

use petgraph::graph::{NodeIndex, UnGraph};
use sg_core::{NodeId, SgResult};

use crate::edges::{Edge, normalize};
use crate::layout::{Layout, Node};
use crate::validate;

/// Final layout plus its undirected edge set.
///
/// Every edge endpoint is a node of the layout, and every layout node is part
/// of the graph, isolated or not. The layout can no longer change once it is
/// wrapped here.
#[derive(Debug, Clone)]
pub struct SchematicGraph {
    layout: Layout,
    stops: Vec<NodeId>,
    edges: BTreeSet<Edge>,
}

impl SchematicGraph {
    /// Assemble a graph from synthesis output, checking the renderer contract.
    pub fn from_parts(layout: Layout, stops: Vec<NodeId>, edges: BTreeSet<Edge>) -> SgResult<Self> {
        validate::validate_layout(&layout)?;
        validate::validate_stops(&layout, &stops)?;
        validate::validate_edges(&layout, &edges)?;
        Ok(Self {
            layout,
            stops,
            edges,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Stops generated during synthesis, in creation order.
    pub fn stops(&self) -> &[NodeId] {
        &self.stops
    }

    pub fn stop_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.stops.iter().filter_map(|&id| self.layout.node(id))
    }

    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges as name pairs, ordered by node ID.
    pub fn edge_names(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges.iter().filter_map(|&(a, b)| {
            let a = self.layout.node(a)?;
            let b = self.layout.node(b)?;
            Some((a.name.as_str(), b.name.as_str()))
        })
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.layout.id_of(a), self.layout.id_of(b)) {
            (Some(a), Some(b)) => self.edges.contains(&normalize(a, b)),
            _ => false,
        }
    }

    /// Names of the nodes sharing an edge with `name`.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        let Some(id) = self.layout.id_of(name) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter_map(|&(a, b)| match (a == id, b == id) {
                (true, _) => Some(b),
                (_, true) => Some(a),
                _ => None,
            })
            .filter_map(|other| self.layout.node(other))
            .map(|n| n.name.as_str())
            .collect()
    }

    pub fn degree(&self, name: &str) -> usize {
        self.neighbors(name).len()
    }

    /// Convert to a petgraph undirected graph weighted by node name.
    ///
    /// Node indices follow layout order, so `NodeIndex::new(id.slot())` is the
    /// node with that ID.
    pub fn to_petgraph(&self) -> UnGraph<String, ()> {
        let mut g = UnGraph::with_capacity(self.layout.len(), self.edges.len());
        for node in self.layout.nodes() {
            g.add_node(node.name.clone());
        }
        for &(a, b) in &self.edges {
            g.add_edge(NodeIndex::new(a.slot()), NodeIndex::new(b.slot()), ());
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::Point2;

    fn sample() -> SchematicGraph {
        let mut layout = Layout::new();
        layout.insert("Z1", Point2::new(0.0, 0.0));
        layout.insert("S01", Point2::new(0.0, 1.0));
        layout.insert("O1", Point2::new(5.0, 5.0));
        let z1 = layout.id_of("Z1").unwrap();
        let s01 = layout.id_of("S01").unwrap();
        let edges = BTreeSet::from([normalize(s01, z1)]);
        SchematicGraph::from_parts(layout, vec![s01], edges).unwrap()
    }

    #[test]
    fn accessors() {
        let graph = sample();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("Z1", "S01"));
        assert!(graph.has_edge("S01", "Z1"));
        assert!(!graph.has_edge("Z1", "O1"));
        assert!(!graph.has_edge("Z1", "missing"));
        assert_eq!(graph.neighbors("S01"), vec!["Z1"]);
        assert_eq!(graph.degree("O1"), 0);
        assert_eq!(graph.stop_nodes().count(), 1);
        assert_eq!(graph.edge_names().collect::<Vec<_>>(), vec![("Z1", "S01")]);
    }

    #[test]
    fn petgraph_keeps_isolated_nodes() {
        let g = sample().to_petgraph();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g[NodeIndex::new(2)], "O1");
    }

    #[test]
    fn from_parts_rejects_dangling_edges() {
        let mut layout = Layout::new();
        layout.insert("P", Point2::new(0.0, 0.0));
        let edges = BTreeSet::from([(NodeId::from_index(0), NodeId::from_index(9))]);
        assert!(SchematicGraph::from_parts(layout, Vec::new(), edges).is_err());
    }
}
