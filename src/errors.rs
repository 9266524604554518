// src/errors.rs

//! Errors surfaced at the I/O and configuration boundaries.
//!
//! Bad node data and unexpected events are never errors; they are logged
//! where they are encountered and skipped.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DagViewError {
    /// A config file parsed but failed validation.
    #[error("invalid view config: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("config is not valid TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Workflow file or render command (de)serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DagViewError>;
