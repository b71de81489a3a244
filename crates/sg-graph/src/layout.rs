//! Layout storage: the name -> coordinate mapping behind both topology and
//! rendering position.

use std::collections::HashMap;

use sg_core::{Category, NodeId, Point2, Real};

/// A named, categorized point in the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub category: Category,
    pub pos: Point2,
}

/// Insertion-ordered mapping from node name to position.
///
/// Node IDs are insertion slots, so `nodes()[id.slot()]` is always the node
/// with that ID. Names are unique; inserting an existing name moves that node
/// and keeps its slot.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub(crate) nodes: Vec<Node>,
    pub(crate) by_name: HashMap<String, NodeId>,
}

impl Layout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.id_of(name).and_then(|id| self.node(id))
    }

    pub fn position(&self, name: &str) -> Option<Point2> {
        self.get(name).map(|n| n.pos)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Insert a node, or move an existing node with the same name.
    ///
    /// Returns the previous position when the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, pos: Point2) -> Option<Point2> {
        self.upsert(name.into(), pos).1
    }

    pub(crate) fn upsert(&mut self, name: String, pos: Point2) -> (NodeId, Option<Point2>) {
        if let Some(&id) = self.by_name.get(&name) {
            let node = &mut self.nodes[id.slot()];
            return (id, Some(std::mem::replace(&mut node.pos, pos)));
        }

        let id = NodeId::from_index(self.nodes.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.nodes.push(Node {
            id,
            category: Category::from_name(&name),
            name,
            pos,
        });
        (id, None)
    }

    /// True if some node sits within `tol` of `pos` on both axes.
    pub fn any_near(&self, pos: Point2, tol: Real) -> bool {
        self.nodes.iter().any(|n| n.pos.near(pos, tol))
    }

    /// Nodes of one category, in insertion order.
    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.category == category)
    }

    pub fn anchors(&self) -> impl Iterator<Item = &Node> + '_ {
        self.of_category(Category::Anchor)
    }

    /// Node count per category, in `Category::ALL` order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&c| (c, self.of_category(c).count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_slots_in_order() {
        let mut layout = Layout::new();
        assert!(layout.insert("Z1", Point2::new(0.0, 0.0)).is_none());
        assert!(layout.insert("A1", Point2::new(1.0, 0.0)).is_none());

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.id_of("Z1").unwrap().index(), 0);
        assert_eq!(layout.id_of("A1").unwrap().index(), 1);
        assert_eq!(layout.get("A1").unwrap().category, Category::Restricted);
    }

    #[test]
    fn reinsert_overwrites_in_place() {
        let mut layout = Layout::new();
        layout.insert("P", Point2::new(0.0, 0.0));
        layout.insert("Q", Point2::new(5.0, 5.0));
        let prev = layout.insert("P", Point2::new(2.0, 3.0));

        assert_eq!(prev, Some(Point2::new(0.0, 0.0)));
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.nodes()[0].name, "P");
        assert_eq!(layout.position("P"), Some(Point2::new(2.0, 3.0)));
    }

    #[test]
    fn any_near_uses_tolerance() {
        let mut layout = Layout::new();
        layout.insert("P", Point2::new(1.0, 1.0));
        assert!(layout.any_near(Point2::new(1.009, 1.0), 0.01));
        assert!(!layout.any_near(Point2::new(1.011, 1.0), 0.01));
    }

    #[test]
    fn category_counts_cover_all_categories() {
        let mut layout = Layout::new();
        for name in ["Z1", "Z2", "B1", "O1", "X1"] {
            layout.insert(name, Point2::new(0.0, 0.0));
        }
        let counts = layout.category_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.contains(&(Category::Anchor, 2)));
        assert!(counts.contains(&(Category::Stop, 0)));
        assert_eq!(layout.anchors().count(), 2);
    }
}
