//! Graph service: source -> layout -> schematic graph.

use std::time::Instant;

use sg_core::Category;
use sg_graph::{Layout, SchematicGraph, synthesize};
use sg_source::{PointSource, build_layout};
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppResult;

/// Wall-clock time spent in each stage, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageTiming {
    pub fetch_s: f64,
    pub build_s: f64,
    pub synth_s: f64,
    pub total_s: f64,
}

/// Outcome of one pipeline invocation.
#[derive(Debug, Clone)]
pub struct GraphRun {
    pub graph: SchematicGraph,
    /// Records delivered by the source, including repeated names.
    pub record_count: usize,
    pub timing: StageTiming,
}

/// Counts for display.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary {
    pub node_count: usize,
    pub stop_count: usize,
    pub edge_count: usize,
    pub isolated_count: usize,
    pub by_category: Vec<(Category, usize)>,
}

/// Fetch records and build the input layout, without synthesis.
pub fn load_layout(source: &dyn PointSource) -> AppResult<Layout> {
    let records = source.fetch()?;
    Ok(build_layout(&records)?)
}

/// Run the full pipeline against `source`.
pub fn build_graph(source: &dyn PointSource, config: &AppConfig) -> AppResult<GraphRun> {
    config.validate()?;
    let start = Instant::now();

    let records = source.fetch()?;
    let fetch_s = start.elapsed().as_secs_f64();

    let layout = build_layout(&records)?;
    let build_s = start.elapsed().as_secs_f64() - fetch_s;

    let graph = synthesize(layout, &config.synth)?;
    let total_s = start.elapsed().as_secs_f64();
    let synth_s = total_s - fetch_s - build_s;

    info!(
        source = %source.name(),
        records = records.len(),
        nodes = graph.layout().len(),
        edges = graph.edge_count(),
        "graph built"
    );

    Ok(GraphRun {
        graph,
        record_count: records.len(),
        timing: StageTiming {
            fetch_s,
            build_s,
            synth_s,
            total_s,
        },
    })
}

pub fn summarize(graph: &SchematicGraph) -> GraphSummary {
    let layout = graph.layout();
    let mut connected = vec![false; layout.len()];
    for &(a, b) in graph.edges() {
        connected[a.slot()] = true;
        connected[b.slot()] = true;
    }

    GraphSummary {
        node_count: layout.len(),
        stop_count: graph.stops().len(),
        edge_count: graph.edge_count(),
        isolated_count: connected.iter().filter(|&&c| !c).count(),
        by_category: layout.category_counts(),
    }
}
