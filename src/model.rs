// src/model.rs
//! The tab snapshot model — read-only input handed to the pipeline.
//!
//! A snapshot is ephemeral: identities are valid only for the duration of
//! one collection call. Absent or malformed fields degrade to empty strings
//! downstream rather than failing the run.

use serde::Deserialize;

/// One open tab as captured by the browser at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TabSnapshot {
    /// Tab URL. Absent or empty for tabs still loading or restored lazily.
    #[serde(default)]
    pub url: Option<String>,
    /// Tab title. Absent when the page never set one.
    #[serde(default)]
    pub title: Option<String>,
    /// Whether the tab is pinned in the window's tab strip.
    #[serde(default)]
    pub pinned: bool,
}

impl TabSnapshot {
    /// The tab's URL, or `""` when absent.
    pub fn url_str(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// The tab's title, or `""` when absent.
    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// The tab list of a single browser window.
///
/// Accepts both shapes snapshot tools produce: a bare JSON array of tabs,
/// or an object wrapping it as `{"tabs": [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WindowSnapshot {
    Tabs(Vec<TabSnapshot>),
    Window { tabs: Vec<TabSnapshot> },
}

impl WindowSnapshot {
    /// Consumes the snapshot, yielding the tab list in window order.
    pub fn into_tabs(self) -> Vec<TabSnapshot> {
        match self {
            WindowSnapshot::Tabs(tabs) => tabs,
            WindowSnapshot::Window { tabs } => tabs,
        }
    }
}
