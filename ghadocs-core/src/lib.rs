//! ghadocs core library — document model, metadata parser, errors.
//!
//! Public API surface:
//! - [`types`] — [`DocumentModel`] and friends, name sanitizers
//! - [`parser`] — [`parser::parse_file`] / [`parser::parse_document`]
//! - [`error`] — [`DocsError`]

pub mod error;
pub mod parser;
pub mod types;

pub use error::DocsError;
pub use types::{
    anchor_slug, item_ident, ActionKind, DocumentModel, TableSection, WorkflowFields,
};
