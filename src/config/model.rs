// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [canvas]
/// width = 1100.0
/// height = 400.0
///
/// [colors]
/// completed = "#aaa"
/// failed = "#c00"
///
/// [tooltip]
/// allow_list = ["jobId", "map progress"]
/// job_link = "http://jobtracker:50030/jobdetails.jsp?jobid={jobId}"
/// ```
///
/// All sections are optional and default to the values the dashboard has
/// always used.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub canvas: CanvasSection,

    #[serde(default)]
    pub colors: ColorSection,

    #[serde(default)]
    pub tooltip: TooltipSection,

    #[serde(default)]
    pub label: LabelSection,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`
/// (see `config::validate`) or [`ConfigFile::default`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub canvas: CanvasSection,
    pub colors: ColorSection,
    pub tooltip: TooltipSection,
    pub label: LabelSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            canvas: raw.canvas,
            colors: raw.colors,
            tooltip: raw.tooltip,
            label: raw.label,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(RawConfigFile::default())
    }
}

/// `[canvas]` section: the fixed box nodes are normalized into.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasSection {
    /// Canvas width `W`.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Canvas height `H`.
    #[serde(default = "default_height")]
    pub height: f64,

    /// Horizontal centering constant `c`: x is mapped onto
    /// `[-W/2 - c, W/2 - c]` before clamping.
    #[serde(default = "default_center_offset")]
    pub center_offset: f64,

    #[serde(default = "default_node_width")]
    pub node_width: f64,

    #[serde(default = "default_node_height")]
    pub node_height: f64,
}

fn default_width() -> f64 {
    1100.0
}

fn default_height() -> f64 {
    400.0
}

fn default_center_offset() -> f64 {
    2.0
}

fn default_node_width() -> f64 {
    20.0
}

fn default_node_height() -> f64 {
    20.0
}

impl Default for CanvasSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            center_offset: default_center_offset(),
            node_width: default_node_width(),
            node_height: default_node_height(),
        }
    }
}

/// `[colors]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorSection {
    /// Color every edge starts with.
    #[serde(default = "default_edge_color")]
    pub edge: String,

    /// Applied to a node's outgoing edges on `JOB_FINISHED`.
    #[serde(default = "default_completed_color")]
    pub completed: String,

    /// Applied to a node's outgoing edges on `JOB_FAILED`.
    #[serde(default = "default_failed_color")]
    pub failed: String,
}

fn default_edge_color() -> String {
    "#23A4FF".to_string()
}

fn default_completed_color() -> String {
    "#aaa".to_string()
}

fn default_failed_color() -> String {
    "#c00".to_string()
}

impl Default for ColorSection {
    fn default() -> Self {
        Self {
            edge: default_edge_color(),
            completed: default_completed_color(),
            failed: default_failed_color(),
        }
    }
}

/// `[tooltip]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TooltipSection {
    #[serde(default = "default_tip_offset")]
    pub offset_x: f64,

    #[serde(default = "default_tip_offset")]
    pub offset_y: f64,

    /// Attribute keys shown in the tooltip, in display order.
    #[serde(default = "default_allow_list")]
    pub allow_list: Vec<String>,

    /// Optional link template for the `jobId` attribute. The `{jobId}`
    /// placeholder is replaced with the attribute value.
    #[serde(default)]
    pub job_link: Option<String>,
}

fn default_tip_offset() -> f64 {
    20.0
}

fn default_allow_list() -> Vec<String> {
    ["jobId", "aliases", "features", "map progress", "reduce progress"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for TooltipSection {
    fn default() -> Self {
        Self {
            offset_x: default_tip_offset(),
            offset_y: default_tip_offset(),
            allow_list: default_allow_list(),
            job_link: None,
        }
    }
}

/// `[label]` section: typography for node labels.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelSection {
    #[serde(default = "default_font_size")]
    pub font_size: String,

    #[serde(default = "default_label_color")]
    pub color: String,
}

fn default_font_size() -> String {
    "0.8em".to_string()
}

fn default_label_color() -> String {
    "black".to_string()
}

impl Default for LabelSection {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            color: default_label_color(),
        }
    }
}
