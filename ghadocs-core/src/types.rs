//! Domain types for parsed GitHub automation metadata.
//!
//! The parser produces a [`DocumentModel`] per input file; everything
//! downstream (styling, slot merging) consumes it read-only. Row order inside
//! a [`TableSection`] is the declaration order of the underlying YAML mapping
//! and is preserved end-to-end.

use std::fmt;

// ---------------------------------------------------------------------------
// ActionKind
// ---------------------------------------------------------------------------

/// The category of an automation unit, derived from its metadata file.
///
/// Actions are classified by `runs.using`; a file whose `on.workflow_call`
/// mapping exists is a reusable workflow regardless of other keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Composite,
    Javascript,
    Docker,
    ReusableWorkflow,
}

impl ActionKind {
    /// Classify an action's `runs.using` value.
    ///
    /// Anything that is not `composite`, `node*` or `docker` still documents
    /// fine; callers fall back to the generic action skeleton for it.
    pub fn from_using(using: &str) -> Option<ActionKind> {
        match using {
            "composite" => Some(ActionKind::Composite),
            "docker" => Some(ActionKind::Docker),
            s if s.starts_with("node") => Some(ActionKind::Javascript),
            _ => None,
        }
    }

    pub fn is_workflow(&self) -> bool {
        matches!(self, ActionKind::ReusableWorkflow)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Composite => write!(f, "composite"),
            ActionKind::Javascript => write!(f, "javascript"),
            ActionKind::Docker => write!(f, "docker"),
            ActionKind::ReusableWorkflow => write!(f, "reusable workflow"),
        }
    }
}

// ---------------------------------------------------------------------------
// Table data
// ---------------------------------------------------------------------------

/// One renderable table: a fixed header schema plus ordered data rows.
///
/// Every row has exactly `header.len()` cells; cell content is single-line
/// (the parser strips newlines before building rows).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableSection {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableSection {
    pub fn new(header: &[&str]) -> Self {
        TableSection {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Document model
// ---------------------------------------------------------------------------

/// Extra fields carried only by reusable-workflow documents. They feed the
/// shared summary document (title, contents table) rather than a standalone
/// README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowFields {
    pub title: String,
    pub contents_table_item: String,
    pub contents_table_title: String,
}

/// The structured interface of one automation unit, independent of any
/// markdown formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentModel {
    pub kind: ActionKind,
    pub name: String,
    pub description: String,
    /// Raw badge text: the `runs.using` value for actions, the literal
    /// `reusable workflow` for workflows.
    pub runs_badge: String,
    pub inputs: TableSection,
    pub outputs: TableSection,
    /// Workflows only; actions cannot declare secrets.
    pub secrets: Option<TableSection>,
    /// `Some` iff `kind` is [`ActionKind::ReusableWorkflow`].
    pub workflow: Option<WorkflowFields>,
}

// ---------------------------------------------------------------------------
// Name sanitizers
// ---------------------------------------------------------------------------

/// Markdown anchor slug for a display name: lowercase, keep `[a-z0-9 ]`,
/// spaces become hyphens. `"Deploy App!"` → `"deploy-app"`.
pub fn anchor_slug(name: &str) -> String {
    sanitize(name).replace(' ', "-")
}

/// Slot item identifier for a display name: lowercase, keep `[a-z0-9 ]`,
/// spaces become underscores, then upper-cased. `"Deploy App!"` →
/// `"DEPLOY_APP"`.
pub fn item_ident(name: &str) -> String {
    sanitize(name).replace(' ', "_").to_uppercase()
}

fn sanitize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
