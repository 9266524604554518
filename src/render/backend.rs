// src/render/backend.rs

//! Pluggable render backend abstraction.
//!
//! The runtime talks to a `RenderBackend` instead of a concrete drawing
//! surface. This makes it easy to swap in a recording backend in tests.
//!
//! - `JsonLinesBackend` is the implementation used by the `dagview` binary.
//!   It writes every command as one JSON object per line.
//! - Tests can provide their own `RenderBackend` that, for example, records
//!   which commands were issued.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;

use crate::errors::Result;
use crate::view::RenderCommand;

/// Trait abstracting where render commands go.
pub trait RenderBackend: Send {
    /// Apply the commands produced by one view step, in order.
    fn apply(
        &mut self,
        commands: Vec<RenderCommand>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Writes each command as a JSON line.
pub struct JsonLinesBackend<W: Write + Send> {
    out: W,
}

impl JsonLinesBackend<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> JsonLinesBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_commands(&mut self, commands: &[RenderCommand]) -> Result<()> {
        for command in commands {
            serde_json::to_writer(&mut self.out, command)?;
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> RenderBackend for JsonLinesBackend<W> {
    fn apply(
        &mut self,
        commands: Vec<RenderCommand>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move { self.write_commands(&commands) })
    }
}
