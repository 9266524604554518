// src/view/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::Result;
use crate::render::RenderBackend;

use super::core::DagView;
use super::{RenderCommand, ViewEvent};

/// Feeds `ViewEvent`s into a [`DagView`] strictly one at a time and hands
/// the resulting commands to a `RenderBackend`.
///
/// This is a pure IO shell around `DagView`, which contains all the view
/// semantics. Each event is fully applied (and its commands delivered)
/// before the next one is received.
pub struct Runtime<B: RenderBackend> {
    view: DagView,
    event_rx: mpsc::Receiver<ViewEvent>,
    backend: B,
}

impl<B: RenderBackend> fmt::Debug for Runtime<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl<B: RenderBackend> Runtime<B> {
    pub fn new(view: DagView, event_rx: mpsc::Receiver<ViewEvent>, backend: B) -> Self {
        Self {
            view,
            event_rx,
            backend,
        }
    }

    /// Main event loop.
    ///
    /// Stops on `ViewEvent::Shutdown` or when every sender is gone, and
    /// returns the view so callers can inspect the final state.
    pub async fn run(mut self) -> Result<DagView> {
        info!("dagview runtime started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("view event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            let step = self.view.step(event);
            self.deliver(step.commands).await?;

            if !step.keep_running {
                info!("shutdown requested; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(self.view)
    }

    async fn deliver(&mut self, commands: Vec<RenderCommand>) -> Result<()> {
        if commands.is_empty() {
            return Ok(());
        }

        debug!(count = commands.len(), "delivering render commands");
        self.backend.apply(commands).await
    }
}
