//! Error types for ghadocs-renderer.

use thiserror::Error;

/// All errors that can arise from fragment rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera skeleton rendering error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// A scanning pattern failed to build.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
