// src/render/mod.rs

//! Output side of the view: everything handed to the external drawing
//! primitive.
//!
//! - [`descriptor`] builds the node/edge descriptor, the label style and the
//!   tooltip markup callback.
//! - [`surface`] tracks which tooltip display elements currently exist, so
//!   progress updates can be applied as targeted text changes.
//! - [`progress`] formats map/reduce progress counters.
//! - [`backend`] provides the `RenderBackend` trait the async runtime talks
//!   to, plus a JSON-lines implementation used by the binary.

pub mod backend;
pub mod descriptor;
pub mod progress;
pub mod surface;

pub use backend::{JsonLinesBackend, RenderBackend};
pub use descriptor::{
    EdgeDescriptor, LabelSpec, LabelStyle, NodeDescriptor, RenderDescriptor, TooltipContent,
    TooltipRenderer,
};
pub use progress::{MAP_PROGRESS, REDUCE_PROGRESS, task_progress_string};
pub use surface::{ElementKey, TooltipSurface};
