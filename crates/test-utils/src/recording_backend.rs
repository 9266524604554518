use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use dagview::errors::Result;
use dagview::render::RenderBackend;
use dagview::view::RenderCommand;

/// A render backend that records every command batch it is handed.
///
/// Clones share the same log, so a test can keep one handle while the
/// runtime owns the other.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    batches: Arc<Mutex<Vec<Vec<RenderCommand>>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batches(&self) -> Vec<Vec<RenderCommand>> {
        self.batches.lock().unwrap().clone()
    }

    /// All recorded commands, flattened in delivery order.
    pub fn commands(&self) -> Vec<RenderCommand> {
        self.batches().into_iter().flatten().collect()
    }
}

impl RenderBackend for RecordingBackend {
    fn apply(
        &mut self,
        commands: Vec<RenderCommand>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let batches = Arc::clone(&self.batches);
        Box::pin(async move {
            batches.lock().unwrap().push(commands);
            Ok(())
        })
    }
}
