// src/view/core.rs

//! Pure, synchronous view core.
//!
//! [`DagView`] consumes [`ViewEvent`]s one at a time and produces:
//! - updated graph and view state
//! - a list of [`RenderCommand`]s describing what the drawing primitive
//!   should do next
//!
//! It has no channels, no Tokio types and performs no IO, so every
//! behaviour can be unit tested directly.

use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::dag::{Bounds, CanvasBox, DagGraph, JobSpec, LayoutNormalizer};
use crate::render::{LabelStyle, RenderDescriptor, TooltipRenderer, TooltipSurface};
use crate::view::event::{PointerEvent, StatusEvent};
use crate::view::state::ViewState;
use crate::view::sync::Synchronizer;
use crate::view::tab::{TabHost, TabView};
use crate::view::tooltip::TooltipArbiter;
use crate::view::{RenderCommand, ViewEvent, ViewStep};

/// The DAG tab of the dashboard.
#[derive(Debug)]
pub struct DagView {
    config: ConfigFile,
    normalizer: LayoutNormalizer,
    renderer: TooltipRenderer,
    labels: LabelStyle,
    graph: DagGraph,
    state: ViewState,
    surface: TooltipSurface,
    tabs: TabHost,
}

impl TabView for DagView {
    fn div_name(&self) -> &str {
        "dagView"
    }

    fn tab_name(&self) -> &str {
        "Dag"
    }
}

impl DagView {
    pub fn new(config: ConfigFile) -> Self {
        let normalizer = LayoutNormalizer::new(CanvasBox::from_config(&config.canvas));
        let renderer = TooltipRenderer::from_config(&config);
        let labels = LabelStyle::from_config(&config);

        let mut view = Self {
            config,
            normalizer,
            renderer,
            labels,
            graph: DagGraph::default(),
            state: ViewState::default(),
            surface: TooltipSurface::new(),
            tabs: TabHost::new(),
        };

        let mut tabs = std::mem::take(&mut view.tabs);
        view.add_to(&mut tabs);
        view.tabs = tabs;
        view
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn graph(&self) -> &DagGraph {
        &self.graph
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn surface(&self) -> &TooltipSurface {
        &self.surface
    }

    pub fn tabs(&self) -> &TabHost {
        &self.tabs
    }

    /// Register another dashboard tab next to this one.
    pub fn add_tab(&mut self, view: &dyn TabView) -> bool {
        view.add_to(&mut self.tabs)
    }

    /// Full descriptor of the current graph.
    pub fn descriptor(&self) -> RenderDescriptor {
        RenderDescriptor::from_graph(&self.graph, &self.config)
    }

    /// Replace the current graph with a new workflow run.
    ///
    /// Bounds are computed here and nowhere else; pin, selection and the
    /// tooltip surface are discarded with the old graph.
    pub fn load(&mut self, jobs: &[JobSpec]) -> ViewStep {
        let mut graph = DagGraph::from_jobs(jobs, &self.config.colors.edge);
        let bounds = self.normalize_layout(&mut graph);

        info!(
            nodes = graph.len(),
            edges = graph.edges().len(),
            skipped = jobs.len() - graph.len(),
            "workflow graph loaded"
        );

        self.graph = graph;
        self.state = ViewState::for_bounds(bounds);
        self.surface.clear();

        ViewStep::new(vec![RenderCommand::Draw(self.descriptor())])
    }

    /// Compute canvas positions for every node of `graph`.
    pub fn normalize_layout(&self, graph: &mut DagGraph) -> Option<Bounds> {
        self.normalizer.normalize_layout(graph)
    }

    /// Apply one status / progress event.
    pub fn apply_event(&mut self, event: &StatusEvent) -> ViewStep {
        Synchronizer::new(
            &mut self.graph,
            &mut self.state,
            &mut self.surface,
            &self.config.colors,
        )
        .apply_event(event)
    }

    /// Route pointer input through tooltip arbitration.
    pub fn pointer(&mut self, event: PointerEvent) -> ViewStep {
        ViewStep::new(self.arbiter().dispatch(event))
    }

    /// Label click on `node`.
    pub fn toggle_pin(&mut self, node: &str) -> ViewStep {
        ViewStep::new(self.arbiter().toggle_pin(node))
    }

    /// Activate a dashboard tab. Leaving the DAG tab drops any pinned
    /// tooltip.
    pub fn select_tab(&mut self, div_name: &str) -> ViewStep {
        let Some(switch) = self.tabs.show(div_name) else {
            return ViewStep::idle();
        };

        if switch.leaves(self.div_name()) {
            debug!(to = %switch.to, "navigated away from dag view");
            return ViewStep::new(self.arbiter().unpin_and_hide());
        }
        ViewStep::idle()
    }

    /// Handle a single event.
    pub fn step(&mut self, event: ViewEvent) -> ViewStep {
        match event {
            ViewEvent::WorkflowLoaded(jobs) => self.load(&jobs),
            ViewEvent::Status(ev) => self.apply_event(&ev),
            ViewEvent::Pointer(ev) => self.pointer(ev),
            ViewEvent::TabSelected(div) => self.select_tab(&div),
            ViewEvent::Shutdown => ViewStep::stop(),
        }
    }

    fn arbiter(&mut self) -> TooltipArbiter<'_> {
        TooltipArbiter::new(
            &mut self.graph,
            &mut self.state,
            &mut self.surface,
            &self.renderer,
            &self.labels,
            self.normalizer.canvas(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeStatus, Point};

    fn job(id: &str, x: f64, y: f64, depth: i64, succ: &[&str]) -> JobSpec {
        JobSpec {
            id: Some(id.to_string()),
            raw_position: Some(Point::new(x, y)),
            depth,
            successor_ids: succ.iter().map(|s| s.to_string()).collect(),
            ..JobSpec::default()
        }
    }

    fn loaded() -> DagView {
        let mut view = DagView::new(ConfigFile::default());
        view.load(&[
            job("stage1", 0.0, 0.0, 0, &["stage2"]),
            job("stage2", 100.0, 50.0, 1, &[]),
            job("stage3", 50.0, 25.0, 1, &[]),
        ]);
        view
    }

    #[test]
    fn load_emits_draw_and_sets_bounds() {
        let mut view = DagView::new(ConfigFile::default());
        let step = view.load(&[job("a", 0.0, 0.0, 0, &[]), job("b", 10.0, 4.0, 1, &[])]);

        assert!(step.requires_rerender());
        let bounds = view.state().bounds.unwrap();
        assert_eq!((bounds.min_x, bounds.max_x), (0.0, 10.0));
        assert_eq!((bounds.min_y, bounds.max_y), (0.0, 4.0));
    }

    #[test]
    fn reload_discards_previous_run() {
        let mut view = loaded();
        view.pointer(PointerEvent::Over("stage1".to_string()));
        view.toggle_pin("stage1");
        view.apply_event(&StatusEvent::new("JOB_FINISHED", "stage1"));

        view.load(&[job("fresh", 3.0, 3.0, 0, &[])]);

        assert_eq!(view.graph().len(), 1);
        assert!(!view.state().tooltip_pinned);
        assert!(view.state().tooltip_node.is_none());
        assert!(view.surface().owner().is_none());
        assert_eq!(view.graph().node("fresh").unwrap().status, NodeStatus::Pending);
    }

    #[test]
    fn dragging_moves_node_but_keeps_bounds() {
        let mut view = loaded();
        let before = view.state().bounds;

        let step = view.pointer(PointerEvent::NodeDrag {
            node: "stage3".to_string(),
            position: Point::new(10_000.0, 12.0),
        });

        assert!(view.state().tooltip_pinned);
        assert!(step.requires_rerender());
        assert_eq!(
            view.graph().node("stage3").unwrap().canvas_position,
            Point::new(550.0, 12.0)
        );
        assert_eq!(view.state().bounds, before);

        view.pointer(PointerEvent::DragEnd);
        assert!(!view.state().tooltip_pinned);
        assert!(view.state().dragging.is_none());
    }

    #[test]
    fn drag_end_does_not_restore_click_pin() {
        let mut view = loaded();
        view.pointer(PointerEvent::Over("stage1".to_string()));
        view.toggle_pin("stage1");
        assert!(view.state().tooltip_pinned);

        view.pointer(PointerEvent::NodeDrag {
            node: "stage1".to_string(),
            position: Point::new(0.0, 0.0),
        });
        assert!(view.state().tooltip_node.is_none());

        view.pointer(PointerEvent::DragCancel);
        assert!(!view.state().tooltip_pinned);
    }

    #[test]
    fn leaving_dag_tab_unpins() {
        struct Chord;
        impl TabView for Chord {
            fn div_name(&self) -> &str {
                "chordView"
            }
            fn tab_name(&self) -> &str {
                "Chord"
            }
        }

        let mut view = loaded();
        assert!(view.add_tab(&Chord));
        view.pointer(PointerEvent::Over("stage2".to_string()));
        view.toggle_pin("stage2");

        let step = view.step(ViewEvent::TabSelected("chordView".to_string()));

        assert_eq!(step.commands, vec![RenderCommand::HideTooltip]);
        assert!(!view.state().tooltip_pinned);
        assert_eq!(view.tabs().active(), Some("chordView"));
    }

    #[test]
    fn wheel_unpins_and_resizes_labels() {
        let mut view = loaded();
        view.toggle_pin("stage1");
        assert!(view.state().tooltip_pinned);

        let step = view.pointer(PointerEvent::Wheel { scale: 1.5 });

        assert!(!view.state().tooltip_pinned);
        assert_eq!(
            step.commands,
            vec![
                RenderCommand::HideTooltip,
                RenderCommand::ResizeLabels { width: 30.0 },
            ]
        );
    }

    #[test]
    fn shutdown_stops() {
        let mut view = loaded();
        assert!(!view.step(ViewEvent::Shutdown).keep_running);
    }
}
