// src/view/tab.rs

//! Tab container capability shared by dashboard views.
//!
//! A view only names its container and tab; adding and showing the
//! container is implemented once here and reached through the trait's
//! provided methods.

use tracing::{debug, warn};

/// A dashboard view that lives in its own tab.
pub trait TabView {
    /// Id of the container element holding the view.
    fn div_name(&self) -> &str;

    /// Human-readable tab title.
    fn tab_name(&self) -> &str;

    /// Register this view's container with the host. Returns `false` when it
    /// was already registered.
    fn add_to(&self, host: &mut TabHost) -> bool {
        host.add(self.div_name(), self.tab_name())
    }

    /// Make this view's tab the active one.
    fn show_in(&self, host: &mut TabHost) -> Option<TabSwitch> {
        host.show(self.div_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TabEntry {
    div_name: String,
    tab_name: String,
}

/// Outcome of activating a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSwitch {
    pub from: Option<String>,
    pub to: String,
}

impl TabSwitch {
    /// Whether this switch navigated away from the given container.
    pub fn leaves(&self, div_name: &str) -> bool {
        self.from.as_deref() == Some(div_name) && self.to != div_name
    }
}

/// Registered tabs and the currently active one.
#[derive(Debug, Clone, Default)]
pub struct TabHost {
    tabs: Vec<TabEntry>,
    active: Option<String>,
}

impl TabHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, div_name: &str, tab_name: &str) -> bool {
        if self.tabs.iter().any(|t| t.div_name == div_name) {
            return false;
        }

        self.tabs.push(TabEntry {
            div_name: div_name.to_string(),
            tab_name: tab_name.to_string(),
        });
        if self.active.is_none() {
            self.active = Some(div_name.to_string());
        }
        debug!(div = %div_name, tab = %tab_name, "registered tab");
        true
    }

    /// Activate the tab with this container. `None` for an unknown tab.
    pub fn show(&mut self, div_name: &str) -> Option<TabSwitch> {
        if !self.tabs.iter().any(|t| t.div_name == div_name) {
            warn!(div = %div_name, "request to show unknown tab; ignoring");
            return None;
        }

        let from = self.active.replace(div_name.to_string());
        Some(TabSwitch {
            from,
            to: div_name.to_string(),
        })
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn tab_names(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|t| t.tab_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Chord;

    impl TabView for Chord {
        fn div_name(&self) -> &str {
            "chordView"
        }

        fn tab_name(&self) -> &str {
            "Chord"
        }
    }

    #[test]
    fn first_registered_tab_is_active() {
        let mut host = TabHost::new();
        assert!(host.add("dagView", "Dag"));
        assert!(Chord.add_to(&mut host));
        assert!(!Chord.add_to(&mut host));

        assert_eq!(host.active(), Some("dagView"));
        assert_eq!(host.tab_names().collect::<Vec<_>>(), vec!["Dag", "Chord"]);
    }

    #[test]
    fn switching_reports_departure() {
        let mut host = TabHost::new();
        host.add("dagView", "Dag");
        Chord.add_to(&mut host);

        let switch = Chord.show_in(&mut host).unwrap();
        assert!(switch.leaves("dagView"));
        assert_eq!(host.active(), Some("chordView"));

        let back = host.show("dagView").unwrap();
        assert!(!back.leaves("dagView"));
        assert!(host.show("nowhere").is_none());
    }
}
