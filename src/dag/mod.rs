// src/dag/mod.rs

//! Workflow graph representation and layout.
//!
//! - [`node`] holds the input job description and the per-node / per-edge
//!   view model.
//! - [`graph`] builds the node and edge set from a job list, dropping
//!   malformed nodes and dangling successors.
//! - [`layout`] maps raw coordinates into the fixed canvas box and resolves
//!   edge direction from execution depth.

pub mod graph;
pub mod layout;
pub mod node;

pub use graph::DagGraph;
pub use layout::{Bounds, CanvasBox, LayoutNormalizer, resolve_direction};
pub use node::{GraphEdge, GraphNode, JobSpec, parse_workflow};
