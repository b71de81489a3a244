//! Render-ready export of a schematic graph.
//!
//! Renderers get positions, the per-node classification they style by, and
//! edges as name pairs. Actual colors, sizes and drawing are up to them.

use serde::{Deserialize, Serialize};
use sg_core::Category;
use sg_graph::SchematicGraph;

use crate::error::AppResult;

/// Marker shape class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Square,
    Circle,
}

/// Fill class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeTone {
    Highlight,
    Default,
}

impl NodeShape {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Restricted => NodeShape::Square,
            _ => NodeShape::Circle,
        }
    }
}

impl NodeTone {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Anchor | Category::Stop | Category::Origin => NodeTone::Highlight,
            Category::Restricted | Category::Ordinary => NodeTone::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub category: Category,
    pub shape: NodeShape,
    pub tone: NodeTone,
    /// Created by stop synthesis rather than supplied by the source.
    pub synthesized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderExport {
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
}

impl RenderExport {
    pub fn from_graph(graph: &SchematicGraph) -> Self {
        let mut synthesized = vec![false; graph.layout().len()];
        for id in graph.stops() {
            synthesized[id.slot()] = true;
        }

        let nodes = graph
            .layout()
            .nodes()
            .iter()
            .map(|n| ExportNode {
                name: n.name.clone(),
                x: n.pos.x,
                y: n.pos.y,
                category: n.category,
                shape: NodeShape::for_category(n.category),
                tone: NodeTone::for_category(n.category),
                synthesized: synthesized[n.id.slot()],
            })
            .collect();

        let edges = graph
            .edge_names()
            .map(|(a, b)| ExportEdge {
                source: a.to_string(),
                target: b.to_string(),
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Edge list as `source,target` CSV with a header row.
pub fn edges_csv(graph: &SchematicGraph) -> String {
    let mut csv = String::from("source,target\n");
    for (a, b) in graph.edge_names() {
        csv.push_str(&format!("{},{}\n", a, b));
    }
    csv
}
