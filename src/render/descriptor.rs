// src/render/descriptor.rs

//! Descriptor handed to the external graph-drawing primitive, together with
//! the two callbacks it needs: label creation and tooltip content.

use serde::Serialize;

use crate::config::ConfigFile;
use crate::dag::{DagGraph, GraphEdge, GraphNode};
use crate::render::surface::ElementKey;
use crate::types::{NodeId, NodeStatus, Point};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub id: NodeId,
    pub display_name: String,
    pub canvas_position: Point,
    pub adjacencies: Vec<NodeId>,
    pub status: NodeStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeDescriptor {
    pub from: NodeId,
    pub to: NodeId,
    pub color: String,
}

impl From<&GraphEdge> for EdgeDescriptor {
    fn from(edge: &GraphEdge) -> Self {
        Self {
            from: edge.from.clone(),
            to: edge.to.clone(),
            color: edge.color.clone(),
        }
    }
}

/// Everything the drawing primitive needs for a full plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDescriptor {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<NodeDescriptor>,
    pub edges: Vec<EdgeDescriptor>,
    pub label_style: LabelStyle,
    /// One label per node, in node order.
    pub labels: Vec<LabelSpec>,
}

impl RenderDescriptor {
    pub fn from_graph(graph: &DagGraph, cfg: &ConfigFile) -> Self {
        let nodes = graph
            .nodes()
            .map(|n| NodeDescriptor {
                id: n.id.clone(),
                display_name: n.label.clone(),
                canvas_position: n.canvas_position,
                adjacencies: n.successor_ids.clone(),
                status: n.status,
            })
            .collect();

        let label_style = LabelStyle::from_config(cfg);
        let labels = graph.nodes().map(|n| label_style.create_label(n)).collect();

        Self {
            width: cfg.canvas.width,
            height: cfg.canvas.height,
            nodes,
            edges: graph.edges().iter().map(EdgeDescriptor::from).collect(),
            label_style,
            labels,
        }
    }
}

/// Fixed label dimensions and typography.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    pub width: f64,
    pub height: f64,
    pub font_size: String,
    pub color: String,
}

/// A label as created for one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSpec {
    pub node: NodeId,
    pub text: String,
    pub class: String,
    pub width: f64,
    pub font_size: String,
    pub color: String,
}

impl LabelStyle {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            width: cfg.canvas.node_width,
            height: cfg.canvas.node_height,
            font_size: cfg.label.font_size.clone(),
            color: cfg.label.color.clone(),
        }
    }

    /// Label-creation callback.
    pub fn create_label(&self, node: &GraphNode) -> LabelSpec {
        LabelSpec {
            node: node.id.clone(),
            text: node.label.clone(),
            class: "node".to_string(),
            width: self.width,
            font_size: self.font_size.clone(),
            color: self.color.clone(),
        }
    }

    /// Label width after placement at the given canvas zoom factor. Labels
    /// grow when zoomed in but never shrink below the node width.
    pub fn placed_width(&self, scale: f64) -> f64 {
        if scale.is_finite() {
            self.width * scale.max(1.0)
        } else {
            self.width
        }
    }

    /// CSS class applied to a label after a status event.
    pub fn status_class(event_type: &str) -> String {
        format!("node {event_type}")
    }
}

/// Rendered tooltip for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub node: NodeId,
    pub markup: String,
    /// Addressable attribute elements created by this markup.
    pub elements: Vec<(ElementKey, String)>,
}

/// Tooltip-content callback over an allow-list of attribute keys.
#[derive(Debug, Clone)]
pub struct TooltipRenderer {
    allow_list: Vec<String>,
    job_link: Option<String>,
    offset: Point,
}

impl TooltipRenderer {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            allow_list: cfg.tooltip.allow_list.clone(),
            job_link: cfg.tooltip.job_link.clone(),
            offset: Point::new(cfg.tooltip.offset_x, cfg.tooltip.offset_y),
        }
    }

    /// Pointer offset at which the tooltip is placed.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Build the markup for `node`.
    ///
    /// One list item per allow-listed attribute present on the node, in
    /// allow-list order. `jobId` is a link when a template is configured;
    /// every other value sits in an element addressable by
    /// `ElementKey(jobId, key)`. Nodes without a `jobId` get no addressable
    /// elements.
    pub fn render(&self, node: &GraphNode) -> TooltipContent {
        let job_id = node.job_id();
        let mut elements = Vec::new();

        let mut html = format!(
            "<div class=\"tip-title\">{}</div><div class=\"closetip\">&#10006;</div><div class=\"tip-text\"><ul>",
            escape_html(&node.label)
        );

        for key in &self.allow_list {
            let Some(value) = node.attribute_text(key) else {
                continue;
            };

            if key == "jobId" {
                match &self.job_link {
                    Some(template) => {
                        let href = template.replace("{jobId}", &value);
                        html.push_str(&format!(
                            "<li><b>{}</b>: <a href=\"{}\" target=\"_blank\">{}</a></li>",
                            escape_html(key),
                            escape_html(&href),
                            escape_html(&value)
                        ));
                    }
                    None => {
                        html.push_str(&format!(
                            "<li><b>{}</b>: {}</li>",
                            escape_html(key),
                            escape_html(&value)
                        ));
                    }
                }
                continue;
            }

            match &job_id {
                Some(job_id) => {
                    let element = ElementKey::new(job_id.clone(), key.clone());
                    html.push_str(&format!(
                        "<li><b>{}</b>: <span id=\"{}\">{}</span></li>",
                        escape_html(key),
                        escape_html(&element.to_string()),
                        escape_html(&value)
                    ));
                    elements.push((element, value));
                }
                None => {
                    html.push_str(&format!(
                        "<li><b>{}</b>: <span>{}</span></li>",
                        escape_html(key),
                        escape_html(&value)
                    ));
                }
            }
        }

        html.push_str("</ul></div>");

        TooltipContent {
            node: node.id.clone(),
            markup: html,
            elements,
        }
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
