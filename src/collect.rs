// src/collect.rs
//! The collection pipeline: filter → dedupe → sort → format.
//!
//! Pure apart from its inputs: a snapshot goes in, text and counters come
//! out. The stages run in a fixed order and never fail — absent or
//! malformed tab fields degrade to empty strings.

use crate::classify::{is_google_search_url, is_internal_url};
use crate::config::ExportConfig;
use crate::format::{format_line, join_entries};
use crate::model::TabSnapshot;
use crate::sort::sort_tabs;
use crate::stats::ExportStats;
use std::collections::HashSet;

/// The outcome of one pipeline run, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Formatted entries joined by blank-line separators.
    pub text: String,
    /// Counters describing what the run kept and dropped.
    pub stats: ExportStats,
}

/// Runs the full pipeline over one window snapshot.
///
/// Filters apply per tab in a fixed sequence, short-circuiting on the first
/// match: empty URL (silently excluded), pinned (silently excluded unless
/// `include_pinned`), internal page, Google search page. Dedupe then keeps
/// the first occurrence of each exact URL string, the selected sort mode
/// orders the survivors, and the formatter renders them.
pub fn collect_and_format(config: &ExportConfig, tabs: Vec<TabSnapshot>) -> ExportResult {
    let mut stats = ExportStats {
        total: tabs.len(),
        ..Default::default()
    };

    let mut retained: Vec<TabSnapshot> = Vec::with_capacity(tabs.len());
    for tab in tabs {
        let url = tab.url_str();
        if url.is_empty() {
            continue;
        }
        if !config.include_pinned && tab.pinned {
            continue;
        }
        if config.skip_internal && is_internal_url(url) {
            stats.skipped_internal += 1;
            continue;
        }
        if config.skip_google && is_google_search_url(url) {
            stats.skipped_google += 1;
            continue;
        }
        retained.push(tab);
    }

    if config.dedupe {
        let mut seen: HashSet<String> = HashSet::with_capacity(retained.len());
        retained.retain(|tab| {
            if seen.insert(tab.url_str().to_string()) {
                true
            } else {
                stats.duplicates_removed += 1;
                false
            }
        });
    }

    let ordered = sort_tabs(retained, config.sort_mode);

    let lines: Vec<String> = ordered
        .iter()
        .map(|tab| format_line(tab.title.as_deref(), tab.url_str()))
        .collect();
    stats.exported = lines.len();

    log::debug!(
        "Pipeline run: {} seen, {} exported, {} internal, {} google, {} duplicates",
        stats.total,
        stats.exported,
        stats.skipped_internal,
        stats.skipped_google,
        stats.duplicates_removed,
    );

    ExportResult {
        text: join_entries(&lines),
        stats,
    }
}
