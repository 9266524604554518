// src/config/validate.rs

use std::collections::HashSet;

use regex::Regex;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DagViewError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DagViewError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_canvas(cfg)?;
    validate_colors(cfg)?;
    validate_tooltip(cfg)?;
    Ok(())
}

fn validate_canvas(cfg: &RawConfigFile) -> Result<()> {
    let canvas = &cfg.canvas;

    for (name, value) in [
        ("width", canvas.width),
        ("height", canvas.height),
        ("node_width", canvas.node_width),
        ("node_height", canvas.node_height),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(DagViewError::ConfigError(format!(
                "[canvas].{name} must be a positive number (got {value})"
            )));
        }
    }

    let c = canvas.center_offset;
    if !c.is_finite() || c < 0.0 || c >= canvas.width / 2.0 {
        return Err(DagViewError::ConfigError(format!(
            "[canvas].center_offset must be >= 0 and < width / 2 (got {c})"
        )));
    }

    Ok(())
}

fn validate_colors(cfg: &RawConfigFile) -> Result<()> {
    let hex = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
        .map_err(|e| DagViewError::Other(e.into()))?;

    for (name, value) in [
        ("edge", &cfg.colors.edge),
        ("completed", &cfg.colors.completed),
        ("failed", &cfg.colors.failed),
    ] {
        if !hex.is_match(value) {
            return Err(DagViewError::ConfigError(format!(
                "[colors].{name} must be a #rgb or #rrggbb color (got '{value}')"
            )));
        }
    }

    Ok(())
}

fn validate_tooltip(cfg: &RawConfigFile) -> Result<()> {
    let tooltip = &cfg.tooltip;

    if tooltip.allow_list.is_empty() {
        return Err(DagViewError::ConfigError(
            "[tooltip].allow_list must name at least one attribute".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for key in &tooltip.allow_list {
        if !seen.insert(key.as_str()) {
            return Err(DagViewError::ConfigError(format!(
                "[tooltip].allow_list contains '{key}' more than once"
            )));
        }
    }

    if let Some(link) = &tooltip.job_link {
        if !link.contains("{jobId}") {
            return Err(DagViewError::ConfigError(format!(
                "[tooltip].job_link must contain the {{jobId}} placeholder (got '{link}')"
            )));
        }
    }

    Ok(())
}
