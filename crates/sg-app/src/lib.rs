//! Shared application service layer for stopgraph.
//!
//! Frontends go through this crate to load configuration, pull records from
//! a source, synthesize the schematic graph, and export it for rendering.

pub mod config;
pub mod error;
pub mod export;
pub mod graph_service;

// Re-export key types for convenience
pub use config::{AppConfig, load_config, load_config_or_default};
pub use error::{AppError, AppResult};
pub use export::{ExportEdge, ExportNode, NodeShape, NodeTone, RenderExport, edges_csv};
pub use graph_service::{GraphRun, GraphSummary, StageTiming, build_graph, load_layout, summarize};
