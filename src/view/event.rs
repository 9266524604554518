// src/view/event.rs

//! Inbound event types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{NodeId, Point};

/// Type tag of a status event as sent by the upstream event bus.
///
/// Anything not listed is kept as `Unknown` and ignored by the view, so new
/// upstream event types do not break the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusKind {
    JobStarted,
    JobProgress,
    JobFinished,
    JobFailed,
    JobSelected,
    Unknown(String),
}

impl StatusKind {
    pub fn as_str(&self) -> &str {
        match self {
            StatusKind::JobStarted => "JOB_STARTED",
            StatusKind::JobProgress => "JOB_PROGRESS",
            StatusKind::JobFinished => "JOB_FINISHED",
            StatusKind::JobFailed => "JOB_FAILED",
            StatusKind::JobSelected => "jobSelected",
            StatusKind::Unknown(other) => other,
        }
    }
}

impl From<&str> for StatusKind {
    fn from(s: &str) -> Self {
        match s {
            "JOB_STARTED" => StatusKind::JobStarted,
            "JOB_PROGRESS" => StatusKind::JobProgress,
            "JOB_FINISHED" => StatusKind::JobFinished,
            "JOB_FAILED" => StatusKind::JobFailed,
            "jobSelected" => StatusKind::JobSelected,
            other => StatusKind::Unknown(other.to_string()),
        }
    }
}

impl From<String> for StatusKind {
    fn from(s: String) -> Self {
        StatusKind::from(s.as_str())
    }
}

impl From<StatusKind> for String {
    fn from(kind: StatusKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job payload of a status event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    /// Node id of the stage.
    pub name: NodeId,
    #[serde(default)]
    pub job_id: Option<String>,
    /// Completed fraction of map tasks, `0.0..=1.0`.
    #[serde(default)]
    pub map_progress: Option<f64>,
    #[serde(default)]
    pub total_mappers: Option<u64>,
    #[serde(default)]
    pub reduce_progress: Option<f64>,
    #[serde(default)]
    pub total_reducers: Option<u64>,
}

/// `{type, job}` notification from the host's event bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    #[serde(rename = "type")]
    pub kind: StatusKind,
    pub job: JobUpdate,
}

impl StatusEvent {
    pub fn new(kind: impl Into<StatusKind>, name: impl Into<NodeId>) -> Self {
        Self {
            kind: kind.into(),
            job: JobUpdate {
                name: name.into(),
                ..JobUpdate::default()
            },
        }
    }
}

/// Pointer input relevant to tooltip arbitration and dragging.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered a node.
    Over(NodeId),
    /// Pointer moved while over a node.
    Move(NodeId),
    /// Pointer left the node it was over.
    Out,
    /// Click on a node label.
    LabelClick(NodeId),
    /// Click on the tooltip's close affordance.
    CloseClick,
    /// Press on the canvas background (start of a pan).
    CanvasPress,
    /// Zoom / scroll input; `scale` is the resulting canvas scale factor.
    Wheel { scale: f64 },
    /// A node is being dragged to `position` (canvas space).
    NodeDrag { node: NodeId, position: Point },
    DragEnd,
    DragCancel,
}
