#![allow(dead_code)]

use std::collections::BTreeMap;

use serde_json::Value;
use dagview::config::{ConfigFile, RawConfigFile};
use dagview::dag::JobSpec;
use dagview::types::Point;

/// Builder for a single `JobSpec`.
pub struct JobSpecBuilder {
    job: JobSpec,
}

impl JobSpecBuilder {
    /// A well-formed job at `(x, y)`, depth 0, with a `jobId` attribute of
    /// `job_<id>`.
    pub fn new(id: &str, x: f64, y: f64) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert("jobId".to_string(), Value::from(format!("job_{id}")));

        Self {
            job: JobSpec {
                id: Some(id.to_string()),
                label: None,
                raw_position: Some(Point::new(x, y)),
                depth: 0,
                successor_ids: vec![],
                attributes,
            },
        }
    }

    pub fn depth(mut self, depth: i64) -> Self {
        self.job.depth = depth;
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.job.label = Some(label.to_string());
        self
    }

    pub fn then(mut self, successor: &str) -> Self {
        self.job.successor_ids.push(successor.to_string());
        self
    }

    pub fn attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.job.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn without_job_id(mut self) -> Self {
        self.job.attributes.remove("jobId");
        self
    }

    pub fn without_position(mut self) -> Self {
        self.job.raw_position = None;
        self
    }

    pub fn build(self) -> JobSpec {
        self.job
    }
}

/// Builder for a whole node list.
#[derive(Default)]
pub struct WorkflowBuilder {
    jobs: Vec<JobSpec>,
}

impl WorkflowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job(mut self, job: JobSpecBuilder) -> Self {
        self.jobs.push(job.build());
        self
    }

    pub fn build(self) -> Vec<JobSpec> {
        self.jobs
    }

    /// `stage1 -> stage2`, plus an unconnected `stage3` between them.
    pub fn two_stage() -> Vec<JobSpec> {
        Self::new()
            .job(JobSpecBuilder::new("stage1", 0.0, 0.0).then("stage2"))
            .job(JobSpecBuilder::new("stage2", 100.0, 50.0).depth(1))
            .job(JobSpecBuilder::new("stage3", 50.0, 25.0).depth(1))
            .build()
    }
}

/// Builder for `ConfigFile`, validated on `build()`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn canvas(mut self, width: f64, height: f64) -> Self {
        self.config.canvas.width = width;
        self.config.canvas.height = height;
        self
    }

    pub fn center_offset(mut self, offset: f64) -> Self {
        self.config.canvas.center_offset = offset;
        self
    }

    pub fn allow(mut self, keys: &[&str]) -> Self {
        self.config.tooltip.allow_list = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn job_link(mut self, template: &str) -> Self {
        self.config.tooltip.job_link = Some(template.to_string());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
