// src/output/types.rs
//! Type definitions for output operations.
//!
//! Immutable types for planning and executing output operations: a plan is
//! built up front, executed once, and summarized in a report.

use std::path::PathBuf;

/// Represents a complete output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    /// List of operations to perform
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    /// Creates a new empty output plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation to the plan.
    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }
}

/// Represents a single output operation.
#[derive(Debug, Clone)]
pub enum DeliveryTarget {
    /// Write content to a file
    WriteFile { path: PathBuf, content: String },
    /// Copy content to clipboard
    CopyToClipboard { content: String },
    /// Print to stdout
    PrintToStdout { content: String },
}

/// Result of executing an output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    /// Successfully completed operations
    pub completed: Vec<CompletedOperation>,
    /// Failed operations with errors
    pub failed: Vec<FailedOperation>,
    /// Execution statistics
    pub stats: ExecutionStats,
}

impl OutputReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a completed operation to the report.
    pub fn with_completed(mut self, operation: CompletedOperation) -> Self {
        self.stats.operations_completed += 1;
        self.stats.bytes_written += operation.bytes_written;
        self.completed.push(operation);
        self
    }

    /// Adds a failed operation to the report.
    pub fn with_failed(mut self, operation: FailedOperation) -> Self {
        self.stats.operations_failed += 1;
        self.failed.push(operation);
        self
    }

    /// Checks if all operations succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Whether the only failures are clipboard failures.
    ///
    /// Clipboard failure is non-fatal to a run: the caller surfaces it in
    /// the diagnostics instead of discarding the pipeline output.
    pub fn only_clipboard_failed(&self) -> bool {
        !self.failed.is_empty()
            && self
                .failed
                .iter()
                .all(|f| matches!(f.operation, DeliveryTarget::CopyToClipboard { .. }))
    }
}

/// A successfully completed operation.
#[derive(Debug, Clone)]
pub struct CompletedOperation {
    pub operation: DeliveryTarget,
    pub bytes_written: usize,
    #[allow(dead_code)] // Used in performance monitoring
    pub duration_ms: u64,
}

/// A failed operation with error information.
#[derive(Debug, Clone)]
pub struct FailedOperation {
    pub operation: DeliveryTarget,
    pub error: String,
}

/// Execution statistics.
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    pub operations_completed: usize,
    pub operations_failed: usize,
    pub bytes_written: usize,
    pub total_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(operation: DeliveryTarget) -> FailedOperation {
        FailedOperation {
            operation,
            error: "boom".to_string(),
        }
    }

    #[test]
    fn clipboard_miss_alone_is_only_clipboard_failed() {
        let report = OutputReport::new().with_failed(failed(DeliveryTarget::CopyToClipboard {
            content: "x".to_string(),
        }));

        assert!(!report.is_success());
        assert!(report.only_clipboard_failed());
    }

    #[test]
    fn clipboard_miss_mixed_with_file_failure_is_not() {
        let report = OutputReport::new()
            .with_failed(failed(DeliveryTarget::CopyToClipboard {
                content: "x".to_string(),
            }))
            .with_failed(failed(DeliveryTarget::WriteFile {
                path: "/tmp/tabs.txt".into(),
                content: "x".to_string(),
            }));

        assert!(!report.only_clipboard_failed());
    }

    #[test]
    fn all_green_report_is_not_only_clipboard_failed() {
        let report = OutputReport::new();
        assert!(report.is_success());
        assert!(!report.only_clipboard_failed());
    }
}
