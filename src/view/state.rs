// src/view/state.rs

use crate::dag::Bounds;
use crate::types::NodeId;

/// Mutable view state for one rendered graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Raw-coordinate bounds computed when the graph was loaded. Never
    /// recomputed afterwards, not even when nodes are dragged.
    pub bounds: Option<Bounds>,
    /// While set, hover input does not show or hide the tooltip.
    pub tooltip_pinned: bool,
    /// Last node explicitly selected.
    pub selected_node_id: Option<NodeId>,
    /// Node whose tooltip is currently visible (at most one).
    pub tooltip_node: Option<NodeId>,
    /// Node currently being dragged.
    pub dragging: Option<NodeId>,
    /// Canvas zoom factor as last reported by a wheel event.
    pub scale: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            bounds: None,
            tooltip_pinned: false,
            selected_node_id: None,
            tooltip_node: None,
            dragging: None,
            scale: 1.0,
        }
    }
}

impl ViewState {
    /// Fresh state for a newly loaded graph.
    pub fn for_bounds(bounds: Option<Bounds>) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_node.is_some()
    }
}
