// src/output/writer.rs
//! Executes output operations by performing actual I/O.
//!
//! This module is the only place where file and stdout I/O occur, keeping
//! the rest of the codebase pure and testable.

use super::clipboard::copy_to_clipboard;
use super::types::*;
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Delivers the output plan, performing all I/O operations.
///
/// Each operation runs to completion regardless of earlier failures; the
/// report records both outcomes so the caller can decide what is fatal.
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let mut report = OutputReport::new();
    let start_time = Instant::now();

    log::info!(
        "Executing output plan with {} operations",
        plan.operations.len()
    );

    for operation in plan.operations {
        let op_start = Instant::now();
        match execute_operation(&operation) {
            Ok(bytes_written) => {
                let duration_ms = op_start.elapsed().as_millis() as u64;
                report = report.with_completed(CompletedOperation {
                    operation,
                    bytes_written,
                    duration_ms,
                });
            }
            Err(e) => {
                log::error!("Operation failed: {}", e);
                report = report.with_failed(FailedOperation {
                    operation,
                    error: e.to_string(),
                });
            }
        }
    }

    report.stats.total_duration_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "Output plan execution complete: {} succeeded, {} failed in {}ms",
        report.stats.operations_completed,
        report.stats.operations_failed,
        report.stats.total_duration_ms
    );

    Ok(report)
}

/// Executes a single output operation.
fn execute_operation(operation: &DeliveryTarget) -> Result<usize, AppError> {
    match operation {
        DeliveryTarget::WriteFile { path, content } => write_file(path, content),
        DeliveryTarget::CopyToClipboard { content } => {
            copy_to_clipboard(content)?;
            Ok(content.len())
        }
        DeliveryTarget::PrintToStdout { content } => {
            print_to_stdout(content)?;
            Ok(content.len())
        }
    }
}

/// Writes content to a file as UTF-8.
fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;

    log::info!("Wrote file: {}", path.display());
    Ok(content.len())
}

/// Prints content to stdout.
fn print_to_stdout(content: &str) -> Result<(), AppError> {
    print!("{}", content);
    std::io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_file_and_reports_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/tabs.txt");
        let plan = OutputPlan::new().with_operation(DeliveryTarget::WriteFile {
            path: path.clone(),
            content: "\"A\": https://a.com".to_string(),
        });

        let report = deliver(plan).unwrap();

        assert!(report.is_success());
        assert_eq!(report.stats.bytes_written, 18);
        assert_eq!(fs::read_to_string(path).unwrap(), "\"A\": https://a.com");
    }

    #[test]
    fn failed_write_lands_in_report_not_error() {
        let plan = OutputPlan::new().with_operation(DeliveryTarget::WriteFile {
            path: "/proc/definitely/not/writable.txt".into(),
            content: "x".to_string(),
        });

        let report = deliver(plan).unwrap();

        assert!(!report.is_success());
        assert!(!report.only_clipboard_failed());
        assert_eq!(report.failed.len(), 1);
    }

    #[test]
    fn empty_plan_is_a_successful_noop() {
        let report = deliver(OutputPlan::new()).unwrap();
        assert!(report.is_success());
        assert_eq!(report.stats.operations_completed, 0);
    }
}
