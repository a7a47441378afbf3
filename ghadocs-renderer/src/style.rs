//! Fragment stylist — maps each document field to its final markdown text.
//!
//! Styling is a pure pipeline: [`style`] consumes a [`DocumentModel`] plus a
//! pre-resolved `uses:` reference and returns an ordered set of
//! field → fragment pairs. Slot mechanics (where fragments land) are entirely
//! the sync crate's business.

use ghadocs_core::{anchor_slug, DocumentModel};

use crate::error::RenderError;
use crate::table;
use crate::usage;

// ---------------------------------------------------------------------------
// StyledDocs
// ---------------------------------------------------------------------------

/// Ordered field → markdown fragment pairs for one document.
///
/// Field names are the lower-case slot identifiers (`inputs`, `usage`, …);
/// the merge engine upper-cases them when matching markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledDocs {
    fields: Vec<(String, String)>,
}

impl StyledDocs {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Replace a field's fragment in place (used by the contents-table
    /// manager to splice in the accumulated list).
    pub fn set(&mut self, field: &str, value: String) {
        if let Some(entry) = self.fields.iter_mut().find(|(name, _)| name == field) {
            entry.1 = value;
        } else {
            self.fields.push((field.to_string(), value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Styling pipeline
// ---------------------------------------------------------------------------

/// Style every field of `model` into final markdown fragments.
///
/// Usage construction runs first so that inline example markers are applied
/// to the usage block and stripped from the descriptions the tables render.
pub fn style(model: &DocumentModel, uses_ref: &str) -> Result<StyledDocs, RenderError> {
    let usage_block = usage::build_usage(model.kind, &model.inputs.rows, uses_ref)?;

    let mut fields = Vec::new();
    fields.push(("name".to_string(), model.name.clone()));
    fields.push((
        "description".to_string(),
        format!("\n\n{}\n\n", model.description.trim()),
    ));
    fields.push(("runs".to_string(), format!("`{}`", model.runs_badge)));
    fields.push((
        "inputs".to_string(),
        table_fragment("inputs", &model.inputs.header, &usage_block.cleaned_inputs),
    ));
    // Actions cannot declare secrets; the fallback fragment is inert because
    // action skeletons carry no SECRETS slot.
    fields.push((
        "secrets".to_string(),
        match &model.secrets {
            Some(section) => table_fragment("secrets", &section.header, &section.rows),
            None => fallback_sentence("secrets"),
        },
    ));
    fields.push((
        "outputs".to_string(),
        table_fragment("outputs", &model.outputs.header, &model.outputs.rows),
    ));
    fields.push((
        "usage".to_string(),
        format!("\n\n```yaml\n{}```\n\n", usage_block.yaml),
    ));

    if let Some(wf) = &model.workflow {
        fields.push(("title".to_string(), wf.title.clone()));
        fields.push((
            "contents_table_item".to_string(),
            contents_table_entry(&wf.contents_table_item),
        ));
        fields.push((
            "contents_table_title".to_string(),
            wf.contents_table_title.clone(),
        ));
    }

    Ok(StyledDocs { fields })
}

/// `- [<name>](#<slug>)` — one table-of-contents list line.
fn contents_table_entry(name: &str) -> String {
    format!("- [{}](#{})\n", name, anchor_slug(name))
}

fn table_fragment(field: &str, header: &[String], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return fallback_sentence(field);
    }
    format!("\n\n{}\n", table::render(header, rows))
}

fn fallback_sentence(field: &str) -> String {
    format!("\n\nThis item does not have any {field}.\n\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
