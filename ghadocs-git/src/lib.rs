//! Git introspection for `ghadocs-git`.
//!
//! [`GitInfo::discover_at`] queries the repository once (remote `owner/repo`,
//! latest tag, current branch) and caches the answers; [`GitInfo::uses_ref`]
//! then formats `uses:` references purely. A folder with no remote falls back
//! to local-path references (`./.github/...`).

use std::path::Path;
use std::process::Command;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Cached repository facts, queried once per run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GitInfo {
    /// `owner/repo` derived from the `origin` remote URL, if any.
    pub remote: Option<String>,
    /// Most recent tag by version ordering, if any.
    pub latest_tag: Option<String>,
    /// Currently checked-out branch, if any.
    pub current_branch: Option<String>,
}

/// Errors from git introspection.
#[derive(Debug, Error)]
pub enum GitError {
    /// `git` itself could not be spawned.
    #[error("git is not an executable: {0}")]
    NotExecutable(#[source] std::io::Error),
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

impl GitInfo {
    /// Query the repository containing `dir`.
    ///
    /// Individual queries failing (no remote, no tags, detached head) are not
    /// errors — the corresponding field is simply `None`. Only a missing git
    /// binary is fatal.
    pub fn discover_at(dir: &Path) -> Result<GitInfo, GitError> {
        let remote = run_git(dir, &["ls-remote", "--get-url", "origin"])?
            .as_deref()
            .and_then(owner_repo_from_remote);
        let latest_tag = run_git(
            dir,
            &[
                "for-each-ref",
                "--sort=-version:refname",
                "--format",
                "%(refname)",
                "refs/tags",
                "--count=1",
            ],
        )?
        .as_deref()
        .and_then(tag_from_refname);
        let current_branch = run_git(dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;

        Ok(GitInfo {
            remote,
            latest_tag,
            current_branch,
        })
    }

    /// Format the `uses:` reference for one metadata file.
    ///
    /// With a remote: `{owner}/{repo}{action_path}{action_filename}@{ref}`
    /// where the ref is the override if non-empty, else the latest tag, else
    /// the current branch. Without a remote the reference is a local path
    /// under `./.github`.
    pub fn uses_ref(&self, ref_override: &str, action_path: &str, action_filename: &str) -> String {
        match &self.remote {
            Some(remote) => {
                let fallback = self
                    .latest_tag
                    .as_deref()
                    .or(self.current_branch.as_deref())
                    .unwrap_or_default();
                let git_ref = if ref_override.is_empty() {
                    fallback
                } else {
                    ref_override
                };
                format!("{remote}{action_path}{action_filename}@{git_ref}")
            }
            None => format!("./.github{action_path}{action_filename}"),
        }
    }
}

/// `(action_path, action_filename)` pieces of a `uses:` reference for the
/// given metadata file. The filename part participates only for reusable
/// workflows.
pub fn uses_locator(yaml_path: &Path, is_workflow: bool) -> (String, String) {
    let parent = yaml_path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let action_path = format!("/{parent}");
    let action_filename = if is_workflow {
        yaml_path
            .file_name()
            .map(|f| format!("/{}", f.to_string_lossy()))
            .unwrap_or_default()
    } else {
        String::new()
    };
    (action_path, action_filename)
}

// ---------------------------------------------------------------------------
// Command plumbing + pure parsers
// ---------------------------------------------------------------------------

/// Run a git subcommand in `dir`. Non-zero exit means "no answer" (`None`),
/// not an error.
fn run_git(dir: &Path, args: &[&str]) -> Result<Option<String>, GitError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(GitError::NotExecutable)?;
    if !output.status.success() {
        return Ok(None);
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let trimmed = stdout.trim_matches(['\'', '"', ' ', '\n']).to_string();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed))
    }
}

/// `owner/repo` from any common remote URL form
/// (`git@host:owner/repo.git`, `https://host/owner/repo`).
fn owner_repo_from_remote(raw: &str) -> Option<String> {
    let normalized = raw.replace(':', "/");
    let segments: Vec<&str> = normalized.split('/').collect();
    if segments.len() < 2 {
        return None;
    }
    let repo = segments[segments.len() - 1].trim_end_matches(".git");
    let owner = segments[segments.len() - 2];
    if owner.is_empty() || repo.is_empty() {
        return None;
    }
    Some(format!("{owner}/{repo}"))
}

/// Tag name from a `refs/tags/<name>` refname.
fn tag_from_refname(raw: &str) -> Option<String> {
    let mut parts = raw.split('/');
    let (first, second) = (parts.next()?, parts.next()?);
    if first != "refs" || second != "tags" {
        return None;
    }
    parts.next().map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
