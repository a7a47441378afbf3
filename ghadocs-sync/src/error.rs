//! Error types for ghadocs-sync.

use std::path::PathBuf;

use thiserror::Error;

use ghadocs_core::DocsError;
use ghadocs_git::GitError;
use ghadocs_renderer::RenderError;

/// All errors that can arise from document synchronization.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the fragment renderer or skeleton engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error from metadata loading/parsing.
    #[error("metadata error: {0}")]
    Docs(#[from] DocsError),

    /// An error from git introspection.
    #[error("git error: {0}")]
    Git(#[from] GitError),

    /// A slot-scanning pattern failed to build.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
