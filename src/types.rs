use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical node identifier (the stage / job name).
pub type NodeId = String;

/// Execution state of a stage as shown in the view.
///
/// - `Pending`: loaded but nothing has been heard about it yet.
/// - `Running`: started or reporting progress.
/// - `Finished` / `Failed`: terminal, but still overwritable by a later
///   terminal event (last write wins).
/// - `Selected`: explicitly picked in the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeStatus {
    #[default]
    Pending,
    Running,
    Finished,
    Failed,
    Selected,
}

impl NodeStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeStatus::Finished | NodeStatus::Failed)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeStatus::Pending => "PENDING",
            NodeStatus::Running => "RUNNING",
            NodeStatus::Finished => "FINISHED",
            NodeStatus::Failed => "FAILED",
            NodeStatus::Selected => "SELECTED",
        };
        f.write_str(s)
    }
}

/// A 2-D position, either in raw layout space or in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
