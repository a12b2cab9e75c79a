// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of the tab-export
//! pipeline.
//!
//! Each trait describes a single capability, enabling testing each stage in
//! isolation.

use crate::collect::ExportResult;
use crate::error::AppError;
use crate::model::TabSnapshot;
use crate::output::OutputReport;

pub use crate::source::TabSource;

/// Transforms a window snapshot into formatted text plus statistics.
pub trait ExportComposer {
    fn compose(&self, tabs: Vec<TabSnapshot>) -> ExportResult;
}

/// Delivers an export result to its destinations.
pub trait ExportDelivery {
    fn deliver(&self, result: &ExportResult) -> Result<OutputReport, AppError>;
}
