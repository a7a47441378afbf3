//! # ghadocs-renderer
//!
//! Turns a parsed [`ghadocs_core::DocumentModel`] into markdown fragments and
//! skeleton documents, independent of slot mechanics:
//!
//! - [`table`] — fixed-width markdown table rendering
//! - [`usage`] — usage-block (example step / caller job) construction
//! - [`style`] — the fragment stylist, producing an ordered [`StyledDocs`]
//! - [`templates`] — embedded Tera skeletons parameterized by tag prefix

pub mod error;
pub mod style;
pub mod table;
pub mod templates;
pub mod usage;

pub use error::RenderError;
pub use style::{style, StyledDocs};
pub use templates::{Skeleton, Skeletons};
