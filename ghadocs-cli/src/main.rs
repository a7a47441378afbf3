//! gha-docs — generate and refresh documentation for GitHub Actions and
//! reusable workflows.
//!
//! # Usage
//!
//! ```text
//! gha-docs [--output-mode inject|replace] [--docs-filename README.md]
//!          [--tag-prefix GH_DOCS] [--usage-ref-override <ref>]
//!          [--ignore] [--dry-run] [--show-diff] [--verbose]
//!          <input-files>...
//! ```
//!
//! Exits 1 when any docs file was (or, with `--dry-run`, would be) rewritten,
//! so CI can fail on stale documentation.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use ghadocs_sync::{generate_docs, GenerateOptions, OutputMode, DEFAULT_TAG_PREFIX};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "gha-docs",
    version,
    about = "Generate documentation for GitHub Actions and reusable workflows",
    long_about = None,
)]
struct Cli {
    /// Action or reusable-workflow metadata files (yaml/yml).
    #[arg(required = true)]
    input_files_path: Vec<PathBuf>,

    /// How existing docs files are treated.
    #[arg(long, default_value = "inject")]
    output_mode: OutputModeArg,

    /// Docs file name created next to each metadata file.
    #[arg(long, default_value = "README.md")]
    docs_filename: String,

    /// Marker prefix to look for in docs files.
    #[arg(long, default_value = DEFAULT_TAG_PREFIX)]
    tag_prefix: String,

    /// Git ref used in usage examples instead of the latest tag.
    #[arg(long, default_value = "")]
    usage_ref_override: String,

    /// Skip files that fail to parse instead of aborting.
    #[arg(long)]
    ignore: bool,

    /// Report what would change without writing anything.
    #[arg(long)]
    dry_run: bool,

    /// Print a unified diff for every changed file.
    #[arg(long)]
    show_diff: bool,

    /// Verbose (debug) logging.
    #[arg(long, short)]
    verbose: bool,
}

// ---------------------------------------------------------------------------
// OutputMode argument — parsed from CLI strings, converts to the sync type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse [`OutputMode`] from CLI args.
#[derive(Debug, Clone, Default)]
struct OutputModeArg(OutputMode);

impl FromStr for OutputModeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inject" => Ok(Self(OutputMode::Inject)),
            "replace" => Ok(Self(OutputMode::Replace)),
            other => Err(format!(
                "unknown output mode '{other}'; expected: inject, replace"
            )),
        }
    }
}

impl fmt::Display for OutputModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            OutputMode::Inject => write!(f, "inject"),
            OutputMode::Replace => write!(f, "replace"),
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let opts = GenerateOptions {
        output_mode: cli.output_mode.0,
        docs_filename: cli.docs_filename.clone(),
        tag_prefix: cli.tag_prefix.clone(),
        usage_ref_override: cli.usage_ref_override.clone(),
        ignore: cli.ignore,
        dry_run: cli.dry_run,
        show_diff: cli.show_diff,
        repo_dir: PathBuf::from("."),
    };

    let result = generate_docs(&cli.input_files_path, &opts)
        .context("failed to generate documentation")?;

    for report in &result.reports {
        if cli.show_diff && !report.diff.is_empty() {
            print_diff(&report.diff);
        }
        if cli.dry_run && report.changed {
            println!("{} {}", "would update:".yellow(), report.docs_path.display());
            println!("{}", report.content);
        }
    }

    Ok(if result.any_changed() {
        ExitCode::from(result.exit_code())
    } else {
        ExitCode::SUCCESS
    })
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn print_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}
