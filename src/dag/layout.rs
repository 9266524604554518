// src/dag/layout.rs

//! Layout normalization.
//!
//! Node coordinates arrive pre-computed in an arbitrary space. This module
//! maps them into a fixed canvas box centred on the origin:
//!
//! - x: `[min_x, max_x] -> [-W/2 - c, W/2 - c]`
//! - y: `[min_y, max_y] -> [-H/2, H/2]`
//!
//! followed by a clamp into `[-W/2, W/2] x [-H/2, H/2]`. An axis with a zero
//! range keeps the raw offset instead of dividing by zero.

use std::cmp::Ordering;

use tracing::debug;

use crate::config::CanvasSection;
use crate::dag::graph::DagGraph;
use crate::types::Point;

/// Bounding box over raw node positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Single pass over the points. `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }

        Some(bounds)
    }
}

/// The fixed canvas every node must stay inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBox {
    pub width: f64,
    pub height: f64,
    pub center_offset: f64,
}

impl CanvasBox {
    pub fn from_config(canvas: &CanvasSection) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            center_offset: canvas.center_offset,
        }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x.abs() <= self.half_width() && p.y.abs() <= self.half_height()
    }

    pub fn clamp(&self, p: Point) -> Point {
        let hw = self.half_width();
        let hh = self.half_height();
        Point::new(clamp_finite(p.x, hw), clamp_finite(p.y, hh))
    }
}

/// Clamp into `[-half, half]`, sending NaN to the origin.
fn clamp_finite(v: f64, half: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(-half, half) }
}

/// Position of `v` inside `[min, max]` as a fraction, or `None` for a
/// zero-width range.
///
/// Works on halved values so that `max - min` cannot overflow for extreme
/// but finite inputs.
fn unit_fraction(v: f64, min: f64, max: f64) -> Option<f64> {
    let span = max * 0.5 - min * 0.5;
    if span == 0.0 {
        return None;
    }
    Some(((v * 0.5 - min * 0.5) / span).clamp(0.0, 1.0))
}

/// Maps raw layout coordinates into canvas space.
#[derive(Debug, Clone, Copy)]
pub struct LayoutNormalizer {
    canvas: CanvasBox,
}

impl LayoutNormalizer {
    pub fn new(canvas: CanvasBox) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> CanvasBox {
        self.canvas
    }

    /// Canvas position of one raw point under the given bounds.
    pub fn normalize_point(&self, raw: Point, bounds: &Bounds) -> Point {
        let w = self.canvas.width;
        let h = self.canvas.height;

        let x = match unit_fraction(raw.x, bounds.min_x, bounds.max_x) {
            Some(t) => t * w - w / 2.0 - self.canvas.center_offset,
            None => raw.x - w / 2.0,
        };
        let y = match unit_fraction(raw.y, bounds.min_y, bounds.max_y) {
            Some(t) => t * h - h / 2.0,
            None => raw.y,
        };

        self.canvas.clamp(Point::new(x, y))
    }

    /// Compute the bounds of the graph and write every node's canvas
    /// position. Returns `None` for an empty graph.
    pub fn normalize_layout(&self, graph: &mut DagGraph) -> Option<Bounds> {
        let bounds = Bounds::from_points(graph.nodes().map(|n| n.raw_position))?;

        for node in graph.nodes_mut() {
            node.canvas_position = self.normalize_point(node.raw_position, &bounds);
        }

        debug!(
            min_x = bounds.min_x,
            max_x = bounds.max_x,
            min_y = bounds.min_y,
            max_y = bounds.max_y,
            nodes = graph.len(),
            "normalized layout into canvas"
        );

        Some(bounds)
    }
}

/// Orient an edge between two nodes given as `(id, depth)`.
///
/// The endpoint with the smaller depth is the source. Equal depths fall back
/// to lexicographic order of the ids so the result is stable.
pub fn resolve_direction<'a>(a: (&'a str, i64), b: (&'a str, i64)) -> (&'a str, &'a str) {
    match a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)) {
        Ordering::Greater => (b.0, a.0),
        Ordering::Less | Ordering::Equal => (a.0, b.0),
    }
}
