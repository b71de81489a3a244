//! Layout -> graph pipeline.

use sg_core::SgResult;
use tracing::info;

use crate::config::SynthConfig;
use crate::edges::synthesize_edges;
use crate::graph::SchematicGraph;
use crate::layout::Layout;
use crate::stops::synthesize_stops;
use crate::validate;

/// Add stop points to `layout`, derive the edge set, and freeze the result.
///
/// Either the whole graph is returned or nothing is.
pub fn synthesize(mut layout: Layout, cfg: &SynthConfig) -> SgResult<SchematicGraph> {
    cfg.validate()?;
    validate::validate_layout(&layout)?;

    let input_nodes = layout.len();
    let stops = synthesize_stops(&mut layout, &cfg.stops)?;
    let edges = synthesize_edges(&layout, &stops, &cfg.edges);

    info!(
        input_nodes,
        stops = stops.len(),
        edges = edges.len(),
        "schematic graph synthesized"
    );

    SchematicGraph::from_parts(layout, stops, edges)
}
