// src/render/surface.rs

//! Display elements created by the most recently rendered tooltip.
//!
//! Only one tooltip exists at a time. Its elements outlive a hide (the host
//! keeps the markup around, just invisible) and are replaced wholesale when
//! another node's tooltip is rendered.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::NodeId;

/// Composite key of an attribute element: `(jobId, attribute name)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ElementKey {
    pub job_id: String,
    pub attribute: String,
}

impl ElementKey {
    pub fn new(job_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            attribute: attribute.into(),
        }
    }
}

/// Renders as the element id used in the tooltip markup.
impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.job_id, self.attribute)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TooltipSurface {
    owner: Option<NodeId>,
    elements: BTreeMap<ElementKey, String>,
}

impl TooltipSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node whose tooltip markup is currently on the surface.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Replace the surface with a freshly rendered tooltip.
    pub fn replace(&mut self, owner: NodeId, elements: impl IntoIterator<Item = (ElementKey, String)>) {
        self.owner = Some(owner);
        self.elements = elements.into_iter().collect();
    }

    pub fn contains(&self, key: &ElementKey) -> bool {
        self.elements.contains_key(key)
    }

    pub fn text(&self, key: &ElementKey) -> Option<&str> {
        self.elements.get(key).map(String::as_str)
    }

    /// Update an existing element. Returns `false` (and does nothing) when
    /// no such element exists.
    pub fn set_text(&mut self, key: &ElementKey, text: &str) -> bool {
        match self.elements.get_mut(key) {
            Some(existing) => {
                existing.clear();
                existing.push_str(text);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.owner = None;
        self.elements.clear();
    }
}
