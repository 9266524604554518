// src/view/sync.rs

//! Applies status and progress events to the loaded graph.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ColorSection;
use crate::dag::DagGraph;
use crate::render::{
    ElementKey, LabelStyle, MAP_PROGRESS, REDUCE_PROGRESS, TooltipSurface, task_progress_string,
};
use crate::types::NodeStatus;
use crate::view::event::{JobUpdate, StatusEvent, StatusKind};
use crate::view::state::ViewState;
use crate::view::{RenderCommand, ViewStep};

/// Per-event view mutation.
///
/// Per node:
/// - `JOB_STARTED` -> Running
/// - `JOB_PROGRESS` -> Running, but only out of Pending
/// - `JOB_FINISHED` / `JOB_FAILED` -> terminal, outgoing edges recolored
/// - `jobSelected` -> Selected, edges untouched
///
/// Terminal events are last-write-wins: a `JOB_FAILED` after a
/// `JOB_FINISHED` (or vice versa) overwrites both status and edge colors.
pub struct Synchronizer<'a> {
    graph: &'a mut DagGraph,
    state: &'a mut ViewState,
    surface: &'a mut TooltipSurface,
    colors: &'a ColorSection,
}

impl<'a> Synchronizer<'a> {
    pub fn new(
        graph: &'a mut DagGraph,
        state: &'a mut ViewState,
        surface: &'a mut TooltipSurface,
        colors: &'a ColorSection,
    ) -> Self {
        Self {
            graph,
            state,
            surface,
            colors,
        }
    }

    /// Apply one event and return the resulting render commands.
    pub fn apply_event(&mut self, event: &StatusEvent) -> ViewStep {
        if let StatusKind::Unknown(kind) = &event.kind {
            debug!(event = %kind, node = %event.job.name, "ignoring unknown event type");
            return ViewStep::idle();
        }

        let id = event.job.name.as_str();
        if !self.graph.contains(id) {
            warn!(event = %event.kind, node = %id, "event for unknown node; ignoring");
            return ViewStep::idle();
        }

        let mut commands = self.apply_progress(&event.job);

        let (next, recolor) = match &event.kind {
            StatusKind::JobFinished => (NodeStatus::Finished, Some(self.colors.completed.as_str())),
            StatusKind::JobFailed => (NodeStatus::Failed, Some(self.colors.failed.as_str())),
            StatusKind::JobSelected => (NodeStatus::Selected, None),
            StatusKind::JobStarted => (NodeStatus::Running, None),
            StatusKind::JobProgress => {
                if self.status_of(id) != Some(NodeStatus::Pending) {
                    return ViewStep::new(commands);
                }
                (NodeStatus::Running, None)
            }
            StatusKind::Unknown(_) => return ViewStep::idle(),
        };

        if let Some(node) = self.graph.node_mut(id) {
            if node.status.is_terminal() && next.is_terminal() && node.status != next {
                debug!(node = %id, from = %node.status, to = %next, "terminal status overwritten");
            } else if node.status != next {
                debug!(node = %id, from = %node.status, to = %next, "status transition");
            }
            node.status = next;
        }

        if matches!(event.kind, StatusKind::JobSelected) {
            self.state.selected_node_id = Some(id.to_string());
        }

        commands.push(RenderCommand::RestyleLabel {
            node: id.to_string(),
            class: LabelStyle::status_class(event.kind.as_str()),
        });

        if let Some(color) = recolor {
            for edge in self.graph.recolor_outgoing(id, color) {
                commands.push(RenderCommand::SetEdgeColor {
                    from: edge.from,
                    to: edge.to,
                    color: edge.color,
                });
            }
            commands.push(RenderCommand::Replot);
        }

        ViewStep::new(commands)
    }

    fn status_of(&self, id: &str) -> Option<NodeStatus> {
        self.graph.node(id).map(|n| n.status)
    }

    /// Store formatted progress strings on the node and update any tooltip
    /// element that already shows them.
    fn apply_progress(&mut self, job: &JobUpdate) -> Vec<RenderCommand> {
        let mut commands = Vec::new();

        let Some(node) = self.graph.node_mut(&job.name) else {
            return commands;
        };

        if let Some(job_id) = &job.job_id {
            node.attributes
                .entry("jobId".to_string())
                .or_insert_with(|| Value::String(job_id.clone()));
        }
        let job_id = job.job_id.clone().or_else(|| node.job_id());

        let updates = [
            (MAP_PROGRESS, job.map_progress, job.total_mappers),
            (REDUCE_PROGRESS, job.reduce_progress, job.total_reducers),
        ];

        for (key, progress, total) in updates {
            let Some(fraction) = progress else {
                continue;
            };

            let text = task_progress_string(total, fraction);
            node.attributes
                .insert(key.to_string(), Value::String(text.clone()));

            let Some(job_id) = &job_id else {
                continue;
            };
            let element = ElementKey::new(job_id.clone(), key);
            if self.surface.set_text(&element, &text) {
                commands.push(RenderCommand::SetText {
                    element: element.to_string(),
                    text,
                });
            } else {
                debug!(element = %element, "no tooltip element yet; progress stored only");
            }
        }

        commands
    }
}
