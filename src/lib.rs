// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod render;
pub mod types;
pub mod view;

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::dag::parse_workflow;
use crate::render::JsonLinesBackend;
use crate::view::{DagView, Runtime, StatusEvent, ViewEvent};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - workflow parsing and the initial draw
/// - (optional) event replay from a JSON-lines file
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;

    let workflow = std::fs::read_to_string(&args.workflow)
        .with_context(|| format!("reading workflow {}", args.workflow.display()))?;
    let jobs = parse_workflow(&workflow)?;

    let mut view = DagView::new(cfg);

    if args.dry_run {
        view.load(&jobs);
        println!("{}", serde_json::to_string_pretty(&view.descriptor())?);
        debug!("dry-run complete (descriptor only)");
        return Ok(());
    }

    let (tx, rx) = mpsc::channel::<ViewEvent>(64);
    tx.send(ViewEvent::WorkflowLoaded(jobs)).await?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(ViewEvent::Shutdown).await;
        });
    }

    if let Some(path) = args.events.clone() {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = replay_events(&path, &tx).await {
                warn!(error = %e, "event replay aborted");
            }
            let _ = tx.send(ViewEvent::Shutdown).await;
        });
    }
    drop(tx);

    let runtime = Runtime::new(view, rx, JsonLinesBackend::stdout());
    let view = runtime.run().await?;

    info!(
        nodes = view.graph().len(),
        selected = ?view.state().selected_node_id,
        "dagview finished"
    );
    Ok(())
}

/// Send every well-formed line of `path` as a status event, in file order.
async fn replay_events(path: &Path, tx: &mpsc::Sender<ViewEvent>) -> Result<()> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("opening events file {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<StatusEvent>(&line) {
            Ok(event) => tx.send(ViewEvent::Status(event)).await?,
            Err(e) => warn!(line = line_no, error = %e, "skipping malformed status event"),
        }
    }

    debug!(lines = line_no, "event replay finished");
    Ok(())
}
