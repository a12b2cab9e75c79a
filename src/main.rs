// src/main.rs

// Modules defined in the crate
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

// Specific imports
use crate::collect::{collect_and_format, ExportResult};
use crate::config::{CommandLineInput, RunConfig};
use crate::error::AppError;
use crate::model::TabSnapshot;
use crate::pipeline::{ExportComposer, ExportDelivery, TabSource};
use crate::source::SnapshotFileSource;
use chrono::Local;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use output::{deliver, DeliveryTarget, OutputPlan, OutputReport};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("tabs2text.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage export pipeline: query → compose → deliver.
async fn execute_pipeline(config: &RunConfig) -> Result<(), AppError> {
    let exporter = TabExporter::new(config);

    let tabs = exporter.query().await?;
    let result = exporter.compose(tabs);
    let report = exporter.deliver(&result)?;
    exporter.report_completion(&result, &report);

    Ok(())
}

/// Orchestrates the querying, composition, and delivery of one export run.
struct TabExporter<'a> {
    config: &'a RunConfig,
}

impl<'a> TabExporter<'a> {
    fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Delivers the export to configured outputs (file, clipboard, stdout).
    ///
    /// A clipboard-only failure is not an error here: the run keeps its
    /// output and the failure is surfaced in the diagnostics instead.
    fn deliver_export(&self, result: &ExportResult) -> Result<OutputReport, AppError> {
        let mut plan = OutputPlan::new();

        if self.config.pipe {
            plan = plan.with_operation(DeliveryTarget::PrintToStdout {
                content: result.text.clone(),
            });
        } else {
            if let Some(requested) = &self.config.output_file {
                let path = output::resolve_export_path(requested, Local::now());
                plan = plan.with_operation(DeliveryTarget::WriteFile {
                    path,
                    content: result.text.clone(),
                });
            }

            if self.config.clipboard {
                plan = plan.with_operation(DeliveryTarget::CopyToClipboard {
                    content: result.text.clone(),
                });
            }
        }

        let report = deliver(plan)?;

        if !report.is_success() && !report.only_clipboard_failed() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }

        Ok(report)
    }

    /// Reports completion to the user with the diagnostics summary and
    /// delivery confirmations.
    fn report_completion(&self, result: &ExportResult, report: &OutputReport) {
        if self.config.pipe {
            return;
        }

        for line in completion_lines(result, report) {
            println!("{}", line);
        }
    }
}

/// The user-facing completion lines for one run.
///
/// When the clipboard was the only sink and it failed, the export text is
/// printed ahead of the summary so the run's output is never lost; the
/// failure itself is appended to the diagnostics.
fn completion_lines(result: &ExportResult, report: &OutputReport) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.failed.is_empty() && report.completed.is_empty() && !result.text.is_empty() {
        lines.push(result.text.clone());
        lines.push(String::new());
    }

    let mut summary = result.stats.summary();
    for failed in &report.failed {
        // only_clipboard_failed held, so these are all clipboard misses
        summary.push_str(&format!(" \u{2022} Clipboard copy failed: {}", failed.error));
    }
    lines.push(summary);

    for completed in &report.completed {
        match &completed.operation {
            DeliveryTarget::WriteFile { path, .. } => {
                lines.push(format!("✓ Tabs saved to {}", path.display()));
            }
            DeliveryTarget::CopyToClipboard { .. } => {
                lines.push("✓ Tabs copied to clipboard".to_string());
            }
            _ => {}
        }
    }

    if report.completed.is_empty() && report.failed.is_empty() {
        lines.push("✓ Export generated (no output file or clipboard requested).".to_string());
    }

    lines
}

#[async_trait::async_trait]
impl TabSource for TabExporter<'_> {
    async fn query(&self) -> Result<Vec<TabSnapshot>, AppError> {
        let source = SnapshotFileSource::new(self.config.snapshot.clone());
        source.query().await
    }
}

impl ExportComposer for TabExporter<'_> {
    fn compose(&self, tabs: Vec<TabSnapshot>) -> ExportResult {
        collect_and_format(&self.config.export, tabs)
    }
}

impl ExportDelivery for TabExporter<'_> {
    fn deliver(&self, result: &ExportResult) -> Result<OutputReport, AppError> {
        self.deliver_export(result)
    }
}


#[tokio::main]
async fn main() {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = match RunConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = execute_pipeline(&config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
