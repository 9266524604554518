// tests/runtime_recording.rs

mod common;
use crate::common::builders::WorkflowBuilder;
use crate::common::{init_tracing, map_progress, with_timeout};

use std::error::Error;

use tokio::sync::mpsc;

use dagview::config::ConfigFile;
use dagview::types::NodeStatus;
use dagview::view::{DagView, PointerEvent, RenderCommand, Runtime, StatusEvent, ViewEvent};
use dagview_test_utils::recording_backend::RecordingBackend;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn runtime_applies_events_in_order_and_stops_on_shutdown() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::channel(16);
    let backend = RecordingBackend::new();
    let runtime = Runtime::new(DagView::new(ConfigFile::default()), rx, backend.clone());

    tx.send(ViewEvent::WorkflowLoaded(WorkflowBuilder::two_stage())).await?;
    tx.send(ViewEvent::Status(StatusEvent::new("JOB_STARTED", "stage1"))).await?;
    tx.send(ViewEvent::Status(map_progress("stage1", "job_stage1", 1.0, 2))).await?;
    tx.send(ViewEvent::Status(StatusEvent::new("JOB_FINISHED", "stage1"))).await?;
    tx.send(ViewEvent::Shutdown).await?;
    tx.send(ViewEvent::Status(StatusEvent::new("JOB_FAILED", "stage2"))).await?;

    let view = with_timeout(runtime.run()).await?;

    assert_eq!(view.graph().node("stage1").unwrap().status, NodeStatus::Finished);
    // Events after shutdown are never applied.
    assert_eq!(view.graph().node("stage2").unwrap().status, NodeStatus::Pending);

    let batches = backend.batches();
    assert!(matches!(batches[0].as_slice(), [RenderCommand::Draw(_)]));
    assert_eq!(batches.last().unwrap().last(), Some(&RenderCommand::Replot));

    Ok(())
}

#[tokio::test]
async fn runtime_exits_when_all_senders_are_gone() -> TestResult {
    let (tx, rx) = mpsc::channel(4);
    let backend = RecordingBackend::new();
    let runtime = Runtime::new(DagView::new(ConfigFile::default()), rx, backend.clone());

    tx.send(ViewEvent::WorkflowLoaded(WorkflowBuilder::two_stage())).await?;
    tx.send(ViewEvent::Pointer(PointerEvent::Over("stage2".to_string()))).await?;
    drop(tx);

    let view = with_timeout(runtime.run()).await?;

    assert_eq!(view.state().tooltip_node.as_deref(), Some("stage2"));
    assert_eq!(backend.batches().len(), 2);
    Ok(())
}

#[tokio::test]
async fn idle_steps_are_not_delivered() -> TestResult {
    let (tx, rx) = mpsc::channel(4);
    let backend = RecordingBackend::new();
    let runtime = Runtime::new(DagView::new(ConfigFile::default()), rx, backend.clone());

    tx.send(ViewEvent::WorkflowLoaded(WorkflowBuilder::two_stage())).await?;
    tx.send(ViewEvent::Status(StatusEvent::new("SOMETHING_NEW", "stage1"))).await?;
    tx.send(ViewEvent::Status(StatusEvent::new("JOB_FINISHED", "nobody"))).await?;
    tx.send(ViewEvent::Shutdown).await?;

    with_timeout(runtime.run()).await?;

    assert_eq!(backend.batches().len(), 1);
    Ok(())
}
