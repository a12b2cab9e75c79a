// src/config.rs
use crate::error::AppError;
use crate::sort::SortMode;
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Tab snapshot to export: a JSON file path, or '-' to read stdin
    pub snapshot: String,

    /// Include pinned tabs in the export
    #[arg(long, default_value_t = false)]
    pub include_pinned: bool,

    /// Drop later repeats of an already-seen URL
    #[arg(long, default_value_t = false)]
    pub dedupe: bool,

    /// Exclude Google search-results pages
    #[arg(long, default_value_t = false)]
    pub skip_google: bool,

    /// Exclude browser-internal pages (chrome://, about:, ...)
    #[arg(long, default_value_t = false)]
    pub skip_internal: bool,

    /// Tab ordering in the output
    #[arg(long, value_enum, default_value_t = SortMode::None)]
    pub sort: SortMode,

    /// Save the export to this file (a directory gets a timestamped filename)
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Copy the export to the clipboard
    #[arg(short = 'b', long, default_value_t = true)]
    pub clipboard: bool,

    /// Pipe mode - print the export directly to stdout, nothing else
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Where the window snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotInput {
    /// Read and parse a JSON file.
    File(PathBuf),
    /// Read JSON from standard input.
    Stdin,
}

/// The pipeline configuration — the knobs of one collection run.
///
/// Immutable per invocation; the pipeline reads it, never writes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportConfig {
    pub include_pinned: bool,
    pub dedupe: bool,
    pub skip_google: bool,
    pub skip_internal: bool,
    pub sort_mode: SortMode,
}

/// Resolved run configuration — pipeline knobs plus delivery targets.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub export: ExportConfig,
    pub snapshot: SnapshotInput,
    pub output_file: Option<PathBuf>,
    pub clipboard: bool,
    pub pipe: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// Resolves a complete run configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        if cli.snapshot.is_empty() {
            return Err(AppError::MissingConfiguration(
                "snapshot path must not be empty".to_string(),
            ));
        }

        let snapshot = if cli.snapshot == "-" {
            SnapshotInput::Stdin
        } else {
            SnapshotInput::File(PathBuf::from(&cli.snapshot))
        };

        Ok(RunConfig {
            export: ExportConfig {
                include_pinned: cli.include_pinned,
                dedupe: cli.dedupe,
                skip_google: cli.skip_google,
                skip_internal: cli.skip_internal,
                sort_mode: cli.sort,
            },
            snapshot,
            output_file: cli.output_file.map(PathBuf::from),
            clipboard: cli.clipboard,
            pipe: cli.pipe,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CommandLineInput {
        CommandLineInput::try_parse_from(
            std::iter::once("tabs2text").chain(args.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn dash_means_stdin() {
        let config = RunConfig::resolve(cli(&["-"])).unwrap();
        assert_eq!(config.snapshot, SnapshotInput::Stdin);
    }

    #[test]
    fn default_flags_export_everything_to_clipboard() {
        let config = RunConfig::resolve(cli(&["tabs.json"])).unwrap();
        assert_eq!(config.export, ExportConfig::default());
        assert!(config.clipboard);
        assert!(!config.pipe);
        assert_eq!(
            config.snapshot,
            SnapshotInput::File(PathBuf::from("tabs.json"))
        );
    }

    #[test]
    fn sort_mode_parses_from_flag() {
        let config = RunConfig::resolve(cli(&["tabs.json", "--sort", "domain"])).unwrap();
        assert_eq!(config.export.sort_mode, SortMode::Domain);
    }
}
