// tests/cli_run.rs

mod common;
use crate::common::{init_tracing, with_timeout};

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

use dagview::cli::CliArgs;

const WORKFLOW: &str = r#"[
    {"id": "stage1", "rawPosition": {"x": 0, "y": 0}, "successorIds": ["stage2"],
     "attributes": {"jobId": "job_1"}},
    {"id": "stage2", "rawPosition": {"x": 10, "y": 10}, "depth": 1}
]"#;

fn workflow_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{WORKFLOW}").unwrap();
    file
}

fn args(dir: &TempDir, workflow: PathBuf, events: Option<PathBuf>, dry_run: bool) -> CliArgs {
    CliArgs {
        config: dir.path().join("Dagview.toml"),
        workflow,
        events,
        log_level: None,
        dry_run,
    }
}

#[tokio::test]
async fn dry_run_succeeds_without_config_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let workflow = workflow_file();

    let result = dagview::run(args(&dir, workflow.path().to_path_buf(), None, true)).await;

    assert!(result.is_ok(), "{result:?}");
}

#[tokio::test]
async fn replaying_events_runs_to_completion() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let workflow = workflow_file();

    let mut events = NamedTempFile::new().unwrap();
    writeln!(events, r#"{{"type":"JOB_STARTED","job":{{"name":"stage1"}}}}"#).unwrap();
    writeln!(events, "not json").unwrap();
    writeln!(events).unwrap();
    writeln!(events, r#"{{"type":"JOB_FINISHED","job":{{"name":"stage1"}}}}"#).unwrap();

    let result = with_timeout(dagview::run(args(
        &dir,
        workflow.path().to_path_buf(),
        Some(events.path().to_path_buf()),
        false,
    )))
    .await;

    assert!(result.is_ok(), "{result:?}");
}

#[tokio::test]
async fn missing_workflow_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    let result = dagview::run(args(&dir, dir.path().join("absent.json"), None, true)).await;

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("reading workflow"));
}
