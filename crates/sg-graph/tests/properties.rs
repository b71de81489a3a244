//! Property tests for stop and edge synthesis.

use proptest::prelude::*;
use sg_core::{Category, POSITION_TOLERANCE, Point2};
use sg_graph::{Layout, LayoutBuilder, SchematicGraph, SynthConfig, synthesize};

/// Points on a half-unit grid so that axis-aligned anchor spans are common.
fn arb_points() -> impl Strategy<Value = Vec<(char, f64, f64)>> {
    let prefix = prop::sample::select(vec!['Z', 'Z', 'Z', 'A', 'F', 'L', 'O', 'M', 'P']);
    prop::collection::vec((prefix, -8i32..8, -8i32..8), 0..24).prop_map(|pts| {
        pts.into_iter()
            .map(|(c, x, y)| (c, x as f64 * 0.5, y as f64 * 0.5))
            .collect()
    })
}

fn build(points: &[(char, f64, f64)]) -> Layout {
    let mut builder = LayoutBuilder::new();
    for (i, &(c, x, y)) in points.iter().enumerate() {
        builder.add_point(format!("{c}{i}"), Point2::new(x, y));
    }
    builder.build().unwrap()
}

fn run(points: &[(char, f64, f64)]) -> SchematicGraph {
    synthesize(build(points), &SynthConfig::default()).unwrap()
}

proptest! {
    #[test]
    fn stops_never_crowd_other_nodes(points in arb_points()) {
        let graph = run(&points);
        let layout = graph.layout();
        for stop in graph.stop_nodes() {
            for other in layout.nodes() {
                if other.id != stop.id {
                    prop_assert!(!stop.pos.near(other.pos, POSITION_TOLERANCE));
                }
            }
        }
    }

    #[test]
    fn input_nodes_are_untouched(points in arb_points()) {
        let input = build(&points);
        let graph = synthesize(input.clone(), &SynthConfig::default()).unwrap();

        prop_assert!(graph.layout().len() >= input.len());
        prop_assert_eq!(graph.layout().len(), input.len() + graph.stops().len());
        for node in input.nodes() {
            let after = graph.layout().get(&node.name).unwrap();
            prop_assert_eq!(after.id, node.id);
            prop_assert_eq!(after.pos, node.pos);
        }
    }

    #[test]
    fn edge_set_is_deterministic(points in arb_points()) {
        let first = run(&points);
        let second = run(&points);
        prop_assert_eq!(first.edges(), second.edges());

        let mut parallel_cfg = SynthConfig::default();
        parallel_cfg.edges.parallel_min_nodes = 0;
        let parallel = synthesize(build(&points), &parallel_cfg).unwrap();
        prop_assert_eq!(first.edges(), parallel.edges());
    }

    #[test]
    fn origin_nodes_stay_isolated(points in arb_points()) {
        let graph = run(&points);
        let layout = graph.layout();
        for &(a, b) in graph.edges() {
            prop_assert_ne!(layout.node(a).unwrap().category, Category::Origin);
            prop_assert_ne!(layout.node(b).unwrap().category, Category::Origin);
        }
    }

    #[test]
    fn restricted_edges_are_vertical_stop_links(points in arb_points()) {
        let graph = run(&points);
        let layout = graph.layout();
        for &(a, b) in graph.edges() {
            let (a, b) = (layout.node(a).unwrap(), layout.node(b).unwrap());
            for (p, other) in [(a, b), (b, a)] {
                if p.category == Category::Restricted {
                    prop_assert!(graph.stops().contains(&other.id));
                    prop_assert_eq!(p.pos.x, other.pos.x);
                    prop_assert_eq!((p.pos.y - other.pos.y).abs(), 1.0);
                }
            }
        }
    }
}
