// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Planning is pure: a run builds an `OutputPlan` of delivery targets.
//! Execution is confined to `writer` and `clipboard`, which perform the
//! actual I/O and report per-operation outcomes.

mod clipboard;
mod paths;
mod types;
mod writer;

// Re-export the public interface
#[allow(unused_imports)] // Used by lib crate
pub use clipboard::copy_to_clipboard;
#[allow(unused_imports)] // Used by lib crate
pub use paths::{default_export_filename, resolve_export_path};
#[allow(unused_imports)] // Used by lib crate
pub use types::{
    CompletedOperation, DeliveryTarget, ExecutionStats, FailedOperation, OutputPlan, OutputReport,
};
pub use writer::deliver;
