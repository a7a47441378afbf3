//! The batch pipeline: parse → style → synchronize → write, over a list of
//! metadata files.

use std::fs;
use std::path::{Path, PathBuf};

use ghadocs_core::parser;
use ghadocs_git::{uses_locator, GitInfo};
use ghadocs_renderer::{style, Skeletons};

use crate::diff;
use crate::error::SyncError;
use crate::slots::DEFAULT_TAG_PREFIX;
use crate::synchronizer::{self, OutputMode};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Knobs for one [`generate_docs`] run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output_mode: OutputMode,
    /// Docs file name created next to each metadata file.
    pub docs_filename: String,
    pub tag_prefix: String,
    /// Explicit git ref for `uses:` examples; empty means latest tag, then
    /// current branch.
    pub usage_ref_override: String,
    /// Skip files that fail to parse instead of aborting the run.
    pub ignore: bool,
    /// Compute everything but write nothing.
    pub dry_run: bool,
    /// Attach a unified diff to each changed report.
    pub show_diff: bool,
    /// Repository root for git introspection.
    pub repo_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            output_mode: OutputMode::Inject,
            docs_filename: "README.md".to_string(),
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            usage_ref_override: String::new(),
            ignore: false,
            dry_run: false,
            show_diff: false,
            repo_dir: PathBuf::from("."),
        }
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Outcome for one metadata file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub yaml_path: PathBuf,
    pub docs_path: PathBuf,
    pub changed: bool,
    /// The synchronized docs content (written to disk unless dry-running).
    pub content: String,
    /// Unified diff against the previous content; empty unless requested.
    pub diff: String,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub reports: Vec<FileReport>,
}

impl BatchResult {
    pub fn any_changed(&self) -> bool {
        self.reports.iter().any(|r| r.changed)
    }

    /// CI contract: non-zero when any docs file was (or would be) rewritten.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.any_changed())
    }
}

// ---------------------------------------------------------------------------
// generate_docs
// ---------------------------------------------------------------------------

/// Synchronize docs for every metadata file in `paths`.
///
/// Git facts are discovered once up front; skeleton templates are compiled
/// once. Each file then runs the parse → style → merge pipeline
/// independently, so one workflow file cannot poison another's docs.
pub fn generate_docs(paths: &[PathBuf], opts: &GenerateOptions) -> Result<BatchResult, SyncError> {
    let skeletons = Skeletons::new()?;
    let git = GitInfo::discover_at(&opts.repo_dir)?;

    let mut result = BatchResult::default();
    for yaml_path in paths {
        tracing::debug!("evaluating {}", yaml_path.display());
        let model = match parser::parse_file(yaml_path) {
            Ok(model) => model,
            Err(err) if opts.ignore => {
                tracing::debug!("ignoring {}: {err}", yaml_path.display());
                continue;
            }
            Err(err) => {
                tracing::error!("{err}");
                return Err(err.into());
            }
        };

        let (action_path, action_filename) = uses_locator(yaml_path, model.kind.is_workflow());
        let uses_ref = git.uses_ref(&opts.usage_ref_override, &action_path, &action_filename);
        let styled = style(&model, &uses_ref)?;

        let docs_path = docs_path_for(yaml_path, &opts.docs_filename);
        let previous = fs::read_to_string(&docs_path).unwrap_or_default();

        let outcome = synchronizer::sync_document(
            &model,
            &styled,
            &docs_path,
            opts.output_mode,
            &opts.tag_prefix,
            &skeletons,
        )?;

        let report_diff = if opts.show_diff {
            diff::unified(&previous, &outcome.content, &docs_path)
        } else {
            String::new()
        };

        if outcome.changed && !opts.dry_run {
            tracing::info!("generating: {}", docs_path.display());
            synchronizer::write_outcome(&outcome)?;
        } else {
            tracing::debug!("unchanged: {}", docs_path.display());
        }

        result.reports.push(FileReport {
            yaml_path: yaml_path.clone(),
            docs_path,
            changed: outcome.changed,
            content: outcome.content,
            diff: report_diff,
        });
    }
    Ok(result)
}

fn docs_path_for(yaml_path: &Path, docs_filename: &str) -> PathBuf {
    match yaml_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(docs_filename),
        _ => PathBuf::from(docs_filename),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
