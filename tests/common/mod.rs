#![allow(dead_code)]

pub use dagview_test_utils::builders;
pub use dagview_test_utils::init_tracing;

use dagview::config::ConfigFile;
use dagview::view::{DagView, StatusEvent};

/// Run a future with a 5-second timeout.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}

/// A view with the default config and the two-stage workflow loaded.
pub fn two_stage_view() -> DagView {
    let mut view = DagView::new(ConfigFile::default());
    view.load(&builders::WorkflowBuilder::two_stage());
    view
}

/// A `JOB_PROGRESS` event carrying map progress for `node`.
pub fn map_progress(node: &str, job_id: &str, fraction: f64, total: u64) -> StatusEvent {
    let mut event = StatusEvent::new("JOB_PROGRESS", node);
    event.job.job_id = Some(job_id.to_string());
    event.job.map_progress = Some(fraction);
    event.job.total_mappers = Some(total);
    event
}
