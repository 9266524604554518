// src/dag/node.rs

//! Input job description and the node / edge view model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::Result;
use crate::types::{NodeId, NodeStatus, Point};

/// One entry of the initial node list supplied by the host.
///
/// `id` and `raw_position` are optional here so that a malformed entry can
/// be reported and skipped instead of failing the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    #[serde(default)]
    pub id: Option<NodeId>,

    /// Display name. Defaults to the 1-based position in the list.
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub raw_position: Option<Point>,

    /// Execution-order level; only used to orient edges.
    #[serde(default)]
    pub depth: i64,

    #[serde(default)]
    pub successor_ids: Vec<NodeId>,

    /// Open set of display attributes (job id, aliases, features, ...).
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

/// Parse a JSON array of [`JobSpec`]s.
///
/// Only a document that is not an array is an error. An entry of the wrong
/// shape is reported and skipped; it still counts towards the 1-based
/// default labels of the entries after it.
pub fn parse_workflow(json: &str) -> Result<Vec<JobSpec>> {
    let entries: Vec<Value> = serde_json::from_str(json)?;
    let mut jobs = Vec::with_capacity(entries.len());

    for (position, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<JobSpec>(entry) {
            Ok(mut job) => {
                job.label.get_or_insert_with(|| (position + 1).to_string());
                jobs.push(job);
            }
            Err(e) => {
                warn!(position, error = %e, "malformed job entry; excluding from canvas");
            }
        }
    }

    Ok(jobs)
}

/// A stage as held by the view.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub raw_position: Point,
    /// Set by the layout normalizer; afterwards only moved by dragging.
    pub canvas_position: Point,
    pub depth: i64,
    pub attributes: BTreeMap<String, Value>,
    pub status: NodeStatus,
    /// Declared successors, restricted to ids that exist in the graph.
    pub successor_ids: Vec<NodeId>,
}

impl GraphNode {
    /// The `jobId` attribute rendered as text, if present.
    pub fn job_id(&self) -> Option<String> {
        self.attributes.get("jobId").map(display_value)
    }

    pub fn attribute_text(&self, key: &str) -> Option<String> {
        self.attributes.get(key).map(display_value)
    }
}

/// A resolved dependency edge. `from` is always the lower-depth endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub color: String,
}

/// Render an attribute value as plain display text.
///
/// Strings are shown without quotes and arrays are comma-joined.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
