//! # ghadocs-sync
//!
//! The synchronization engine: merges rendered documentation fragments into
//! marker-delimited slots inside markdown files, idempotently, without
//! touching any byte outside the slots.
//!
//! - [`slots`] — the tag grammar and merge primitive
//! - [`toc`] — contents-table accumulation for the workflow summary document
//! - [`synchronizer`] — per-document skeleton bootstrap, merge, atomic write
//! - [`generate`] — the batch pipeline over many metadata files
//! - [`diff`] — unified diffs for previews

pub mod diff;
pub mod error;
pub mod generate;
pub mod slots;
pub mod synchronizer;
pub mod toc;

pub use error::SyncError;
pub use generate::{generate_docs, BatchResult, FileReport, GenerateOptions};
pub use slots::DEFAULT_TAG_PREFIX;
pub use synchronizer::{sync_document, write_outcome, OutputMode, SyncOutcome};
