// tests/layout_properties.rs

use proptest::prelude::*;

use dagview::config::ConfigFile;
use dagview::dag::{CanvasBox, DagGraph, JobSpec, LayoutNormalizer, resolve_direction};
use dagview::types::Point;

fn jobs_from(points: &[(f64, f64)]) -> Vec<JobSpec> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| JobSpec {
            id: Some(format!("n{i}")),
            raw_position: Some(Point::new(x, y)),
            ..JobSpec::default()
        })
        .collect()
}

fn normalized(points: &[(f64, f64)]) -> (CanvasBox, DagGraph) {
    let cfg = ConfigFile::default();
    let canvas = CanvasBox::from_config(&cfg.canvas);
    let mut graph = DagGraph::from_jobs(&jobs_from(points), &cfg.colors.edge);
    LayoutNormalizer::new(canvas).normalize_layout(&mut graph);
    (canvas, graph)
}

fn coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6..1.0e6f64,
        Just(f64::MAX),
        Just(f64::MIN),
        Just(0.0),
    ]
}

proptest! {
    #[test]
    fn every_node_lands_inside_the_canvas(
        points in proptest::collection::vec((coord(), coord()), 1..40)
    ) {
        let (canvas, graph) = normalized(&points);

        prop_assert_eq!(graph.len(), points.len());
        for node in graph.nodes() {
            prop_assert!(node.canvas_position.is_finite());
            prop_assert!(
                canvas.contains(node.canvas_position),
                "{:?} outside canvas", node.canvas_position
            );
        }
    }

    #[test]
    fn horizontal_order_is_preserved(
        points in proptest::collection::vec((-1.0e4..1.0e4f64, -1.0e4..1.0e4f64), 2..30)
    ) {
        let (_, graph) = normalized(&points);
        let nodes: Vec<_> = graph.nodes().collect();

        for a in &nodes {
            for b in &nodes {
                if a.raw_position.x <= b.raw_position.x {
                    prop_assert!(a.canvas_position.x <= b.canvas_position.x);
                }
                if a.raw_position.y <= b.raw_position.y {
                    prop_assert!(a.canvas_position.y <= b.canvas_position.y);
                }
            }
        }
    }

    #[test]
    fn single_column_stays_finite(
        x in -1.0e6..1.0e6f64,
        ys in proptest::collection::vec(-1.0e6..1.0e6f64, 1..20)
    ) {
        let points: Vec<_> = ys.iter().map(|&y| (x, y)).collect();
        let (canvas, graph) = normalized(&points);

        let first_x = graph.nodes().next().unwrap().canvas_position.x;
        for node in graph.nodes() {
            prop_assert!(node.canvas_position.is_finite());
            prop_assert!(canvas.contains(node.canvas_position));
            prop_assert_eq!(node.canvas_position.x, first_x);
        }
    }

    #[test]
    fn shallower_endpoint_is_always_the_source(
        a_depth in -5i64..5,
        b_depth in -5i64..5,
    ) {
        let (from, to) = resolve_direction(("a", a_depth), ("b", b_depth));
        let (from_rev, to_rev) = resolve_direction(("b", b_depth), ("a", a_depth));

        prop_assert_eq!((from, to), (from_rev, to_rev));
        if a_depth < b_depth {
            prop_assert_eq!((from, to), ("a", "b"));
        } else if b_depth < a_depth {
            prop_assert_eq!((from, to), ("b", "a"));
        } else {
            prop_assert_eq!((from, to), ("a", "b"));
        }
    }
}

#[test]
fn extreme_corners_map_to_the_canvas_edges() {
    let (_, graph) = normalized(&[(0.0, 0.0), (100.0, 50.0)]);

    assert_eq!(graph.node("n0").unwrap().canvas_position, Point::new(-550.0, -200.0));
    assert_eq!(graph.node("n1").unwrap().canvas_position, Point::new(548.0, 200.0));
}

#[test]
fn single_node_uses_raw_offsets() {
    let (_, graph) = normalized(&[(500.0, 30.0)]);

    assert_eq!(graph.node("n0").unwrap().canvas_position, Point::new(-50.0, 30.0));
}
