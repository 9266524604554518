// src/view/tooltip.rs

//! Tooltip pin arbitration.
//!
//! Hover input shows and hides the tooltip unless it is pinned. The pin is
//! toggled by clicking a node label and dropped by the close affordance,
//! canvas presses, zoom input and navigation away. Dragging a node pins the
//! (hidden) tooltip for the duration of the drag only.

use tracing::{debug, warn};

use crate::dag::{CanvasBox, DagGraph};
use crate::render::{LabelStyle, TooltipRenderer, TooltipSurface};
use crate::types::{NodeId, Point};
use crate::view::RenderCommand;
use crate::view::event::PointerEvent;
use crate::view::state::ViewState;

/// Routes pointer input through the single "is pinned" guard.
pub struct TooltipArbiter<'a> {
    graph: &'a mut DagGraph,
    state: &'a mut ViewState,
    surface: &'a mut TooltipSurface,
    renderer: &'a TooltipRenderer,
    labels: &'a LabelStyle,
    canvas: CanvasBox,
}

impl<'a> TooltipArbiter<'a> {
    pub fn new(
        graph: &'a mut DagGraph,
        state: &'a mut ViewState,
        surface: &'a mut TooltipSurface,
        renderer: &'a TooltipRenderer,
        labels: &'a LabelStyle,
        canvas: CanvasBox,
    ) -> Self {
        Self {
            graph,
            state,
            surface,
            renderer,
            labels,
            canvas,
        }
    }

    pub fn dispatch(&mut self, event: PointerEvent) -> Vec<RenderCommand> {
        match event {
            PointerEvent::Over(_) | PointerEvent::Move(_) | PointerEvent::Out
                if self.state.tooltip_pinned =>
            {
                Vec::new()
            }
            PointerEvent::Over(node) => self.show(&node),
            PointerEvent::Move(node) => {
                if self.state.tooltip_node.as_deref() == Some(node.as_str()) {
                    Vec::new()
                } else {
                    self.show(&node)
                }
            }
            PointerEvent::Out => self.hide(),
            PointerEvent::LabelClick(node) => self.toggle_pin(&node),
            PointerEvent::CloseClick | PointerEvent::CanvasPress => self.unpin_and_hide(),
            PointerEvent::Wheel { scale } => self.zoom(scale),
            PointerEvent::NodeDrag { node, position } => self.drag(node, position),
            PointerEvent::DragEnd | PointerEvent::DragCancel => {
                if let Some(node) = self.state.dragging.take() {
                    debug!(node = %node, "drag finished; releasing tooltip pin");
                }
                self.state.tooltip_pinned = false;
                Vec::new()
            }
        }
    }

    /// Label click: pin the tooltip on this node, or release an existing pin.
    pub fn toggle_pin(&mut self, node: &str) -> Vec<RenderCommand> {
        if self.graph.contains(node) {
            self.state.selected_node_id = Some(node.to_string());
        }

        if self.state.tooltip_pinned {
            return self.unpin_and_hide();
        }

        let mut commands = Vec::new();
        if self.state.tooltip_node.as_deref() != Some(node) {
            commands = self.show(node);
            if self.state.tooltip_node.as_deref() != Some(node) {
                return commands;
            }
        }

        debug!(node = %node, "tooltip pinned");
        self.state.tooltip_pinned = true;
        commands
    }

    /// Drop the pin and hide, whatever the current state.
    pub fn unpin_and_hide(&mut self) -> Vec<RenderCommand> {
        self.state.tooltip_pinned = false;
        self.hide()
    }

    fn show(&mut self, id: &str) -> Vec<RenderCommand> {
        let Some(node) = self.graph.node(id) else {
            warn!(node = %id, "pointer over unknown node; ignoring");
            return Vec::new();
        };

        let content = self.renderer.render(node);
        self.surface
            .replace(content.node.clone(), content.elements.iter().cloned());
        self.state.tooltip_node = Some(content.node.clone());

        vec![RenderCommand::ShowTooltip {
            node: content.node,
            markup: content.markup,
            offset: self.renderer.offset(),
        }]
    }

    fn hide(&mut self) -> Vec<RenderCommand> {
        match self.state.tooltip_node.take() {
            Some(_) => vec![RenderCommand::HideTooltip],
            None => Vec::new(),
        }
    }

    fn zoom(&mut self, scale: f64) -> Vec<RenderCommand> {
        let mut commands = self.unpin_and_hide();
        if scale.is_finite() && scale > 0.0 {
            self.state.scale = scale;
            commands.push(RenderCommand::ResizeLabels {
                width: self.labels.placed_width(scale),
            });
        }
        commands
    }

    fn drag(&mut self, id: NodeId, position: Point) -> Vec<RenderCommand> {
        let mut commands = self.hide();
        self.state.tooltip_pinned = true;

        let Some(node) = self.graph.node_mut(&id) else {
            warn!(node = %id, "drag of unknown node; ignoring");
            return commands;
        };

        let clamped = self.canvas.clamp(position);
        node.canvas_position = clamped;
        self.state.dragging = Some(id.clone());

        commands.push(RenderCommand::MoveNode {
            node: id,
            position: clamped,
        });
        commands.push(RenderCommand::Replot);
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFile;
    use crate::dag::JobSpec;

    struct Fixture {
        graph: DagGraph,
        state: ViewState,
        surface: TooltipSurface,
        renderer: TooltipRenderer,
        labels: LabelStyle,
        canvas: CanvasBox,
    }

    impl Fixture {
        fn new() -> Self {
            let cfg = ConfigFile::default();
            let jobs = vec![JobSpec {
                id: Some("n".to_string()),
                raw_position: Some(Point::new(0.0, 0.0)),
                ..JobSpec::default()
            }];
            Self {
                graph: DagGraph::from_jobs(&jobs, &cfg.colors.edge),
                state: ViewState::default(),
                surface: TooltipSurface::new(),
                renderer: TooltipRenderer::from_config(&cfg),
                labels: LabelStyle::from_config(&cfg),
                canvas: CanvasBox::from_config(&cfg.canvas),
            }
        }

        fn arbiter(&mut self) -> TooltipArbiter<'_> {
            TooltipArbiter::new(
                &mut self.graph,
                &mut self.state,
                &mut self.surface,
                &self.renderer,
                &self.labels,
                self.canvas,
            )
        }
    }

    #[test]
    fn zoom_out_keeps_minimum_label_width() {
        let mut fx = Fixture::new();
        let commands = fx.arbiter().dispatch(PointerEvent::Wheel { scale: 0.5 });

        assert_eq!(commands, vec![RenderCommand::ResizeLabels { width: 20.0 }]);
        assert_eq!(fx.state.scale, 0.5);
    }

    #[test]
    fn nonsense_scale_only_unpins() {
        let mut fx = Fixture::new();
        fx.arbiter().toggle_pin("n");

        let commands = fx.arbiter().dispatch(PointerEvent::Wheel { scale: f64::NAN });

        assert_eq!(commands, vec![RenderCommand::HideTooltip]);
        assert!(!fx.state.tooltip_pinned);
        assert_eq!(fx.state.scale, 1.0);
    }

    #[test]
    fn showing_replaces_surface_owner() {
        let mut fx = Fixture::new();
        fx.arbiter().dispatch(PointerEvent::Over("n".to_string()));
        assert_eq!(fx.surface.owner(), Some("n"));

        fx.arbiter().dispatch(PointerEvent::Out);
        assert!(fx.state.tooltip_node.is_none());
        assert_eq!(fx.surface.owner(), Some("n"));
    }

    #[test]
    fn clicking_unknown_label_does_not_pin() {
        let mut fx = Fixture::new();
        let commands = fx.arbiter().toggle_pin("ghost");

        assert!(commands.is_empty());
        assert!(!fx.state.tooltip_pinned);
        assert!(fx.state.selected_node_id.is_none());
    }

    #[test]
    fn label_click_records_selection() {
        let mut fx = Fixture::new();
        fx.arbiter().toggle_pin("n");
        assert_eq!(fx.state.selected_node_id.as_deref(), Some("n"));
    }
}
