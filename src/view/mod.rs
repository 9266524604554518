// src/view/mod.rs

//! Live view of a workflow graph.
//!
//! This module ties together:
//! - the loaded graph and its normalized layout
//! - the synchronizer that applies status / progress events
//! - tooltip pin arbitration for pointer input
//! - tab navigation
//!
//! The pure, synchronous view lives in [`core`]; the async shell that pulls
//! events from a channel and drives a [`RenderBackend`](crate::render::RenderBackend)
//! is implemented in [`runtime`].

use serde::Serialize;

use crate::dag::JobSpec;
use crate::render::RenderDescriptor;
use crate::types::{NodeId, Point};

pub mod core;
pub mod event;
pub mod runtime;
pub mod state;
pub mod sync;
pub mod tab;
pub mod tooltip;

pub use self::core::DagView;
pub use event::{JobUpdate, PointerEvent, StatusEvent, StatusKind};
pub use runtime::Runtime;
pub use state::ViewState;
pub use sync::Synchronizer;
pub use tab::{TabHost, TabView};
pub use tooltip::TooltipArbiter;

/// Events flowing into the view, one at a time.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// A new workflow run replaces whatever was loaded before.
    WorkflowLoaded(Vec<JobSpec>),
    /// A job status or progress notification from the host's event bus.
    Status(StatusEvent),
    /// Pointer input on the canvas, a label or the tooltip.
    Pointer(PointerEvent),
    /// The host switched to the tab with this container name.
    TabSelected(String),
    /// Stop processing (e.g. Ctrl-C).
    Shutdown,
}

/// Instruction for the external drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum RenderCommand {
    /// Draw the whole graph from scratch.
    Draw(RenderDescriptor),
    /// Re-plot already drawn elements with their current properties.
    Replot,
    SetEdgeColor { from: NodeId, to: NodeId, color: String },
    RestyleLabel { node: NodeId, class: String },
    ResizeLabels { width: f64 },
    MoveNode { node: NodeId, position: Point },
    /// Targeted text update of an existing tooltip element.
    SetText { element: String, text: String },
    ShowTooltip { node: NodeId, markup: String, offset: Point },
    HideTooltip,
}

/// Result of handling a single [`ViewEvent`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStep {
    /// Commands for the drawing primitive, in order.
    pub commands: Vec<RenderCommand>,
    /// Whether the outer loop should keep running.
    pub keep_running: bool,
}

impl ViewStep {
    pub fn new(commands: Vec<RenderCommand>) -> Self {
        Self {
            commands,
            keep_running: true,
        }
    }

    /// Nothing to draw.
    pub fn idle() -> Self {
        Self::new(Vec::new())
    }

    pub fn stop() -> Self {
        Self {
            commands: Vec::new(),
            keep_running: false,
        }
    }

    /// Whether this step asks for a full re-render (draw or replot).
    pub fn requires_rerender(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, RenderCommand::Replot | RenderCommand::Draw(_)))
    }
}
