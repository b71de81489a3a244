//! sg-graph: layout and connectivity synthesis for stopgraph.
//!
//! Provides:
//! - Layout storage (name -> categorized node) and an incremental builder
//! - Stop-point synthesis along axis-aligned anchor spans
//! - Edge synthesis (proximity mesh + restricted-to-stop adjacency)
//! - The frozen `SchematicGraph` handed to renderers
//!
//! # Example
//!
//! ```
//! use sg_core::Point2;
//! use sg_graph::{LayoutBuilder, SynthConfig, synthesize};
//!
//! let mut builder = LayoutBuilder::new();
//! builder.add_point("Z1", Point2::new(0.0, 0.0));
//! builder.add_point("Z2", Point2::new(0.0, 3.0));
//! let layout = builder.build().unwrap();
//!
//! let graph = synthesize(layout, &SynthConfig::default()).unwrap();
//! assert_eq!(graph.layout().len(), 4);
//! assert!(graph.has_edge("Z1", "S01"));
//! assert!(graph.has_edge("S02", "Z2"));
//! ```

pub mod builder;
pub mod config;
pub mod edges;
pub mod error;
pub mod graph;
pub mod layout;
pub mod stops;
pub mod synth;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::LayoutBuilder;
pub use config::SynthConfig;
pub use edges::{Edge, EdgeConfig, synthesize_edges};
pub use error::GraphError;
pub use graph::SchematicGraph;
pub use layout::{Layout, Node};
pub use stops::{StopConfig, stop_name, synthesize_stops};
pub use synth::synthesize;
