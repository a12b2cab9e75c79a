// src/lib.rs
//! tabs2text library — exports a browser window's open tabs as formatted text.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `Result`
//! - **Configuration** — `CommandLineInput`, `RunConfig`, `ExportConfig`
//! - **Domain model** — `TabSnapshot`, `WindowSnapshot`
//! - **Pipeline** — `collect_and_format`, `ExportResult`, `ExportStats`
//! - **Classification & formatting** — `is_internal_url`,
//!   `is_google_search_url`, `format_line`, `SortMode`
//! - **Output** — `OutputPlan`, `DeliveryTarget`, `deliver`,
//!   `copy_to_clipboard`

// Internal modules — must match what's in main.rs
mod classify;
mod collect;
mod config;
mod constants;
mod error;
mod format;
mod model;
mod output;
mod pipeline;
mod sort;
mod source;
mod stats;

// --- Error Handling ---
pub use crate::error::{AppError, Result};

// --- Configuration ---
pub use crate::config::{CommandLineInput, ExportConfig, RunConfig, SnapshotInput};

// --- Domain Model ---
pub use crate::model::{TabSnapshot, WindowSnapshot};

// --- Pipeline ---
pub use crate::collect::{collect_and_format, ExportResult};
pub use crate::pipeline::{ExportComposer, ExportDelivery, TabSource};
pub use crate::source::{parse_snapshot, SnapshotFileSource};
pub use crate::stats::ExportStats;

// --- Classification, Sorting, Formatting ---
pub use crate::classify::{is_google_search_url, is_internal_url};
pub use crate::format::{format_line, join_entries};
pub use crate::sort::{sort_key, sort_tabs, SortMode};

// --- Output ---
pub use crate::output::{
    copy_to_clipboard, default_export_filename, deliver, resolve_export_path, DeliveryTarget,
    OutputPlan, OutputReport,
};
