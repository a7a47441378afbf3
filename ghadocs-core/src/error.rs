//! Error types for ghadocs-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading and parsing a metadata file.
///
/// Every variant is recoverable per-file: the batch driver decides whether a
/// failing file aborts the run (strict mode) or is skipped (ignore mode).
#[derive(Debug, Error)]
pub enum DocsError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input path does not point at a regular file.
    #[error("file {path} does not exist")]
    FileNotFound { path: PathBuf },

    /// The input file is not a `.yaml`/`.yml` file.
    #[error("expected a .yaml file, got {path}")]
    NotYaml { path: PathBuf },

    /// The file did not parse as a YAML mapping.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file parsed but is not valid metadata — a required field is
    /// missing at the given location (`top level`, `.inputs.foo`, …).
    #[error("{required:?} are required inside {location}")]
    Schema {
        required: Vec<String>,
        location: String,
    },
}

/// Convenience constructor for [`DocsError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DocsError {
    DocsError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`DocsError::Schema`].
pub(crate) fn schema_err(required: &[&str], location: impl Into<String>) -> DocsError {
    DocsError::Schema {
        required: required.iter().map(|s| s.to_string()).collect(),
        location: location.into(),
    }
}
