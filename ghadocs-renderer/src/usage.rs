//! Usage-block construction.
//!
//! Builds the example YAML snippet embedded in the Usage section: a single
//! example step for standalone actions, a minimal caller job for reusable
//! workflows. The `uses:` reference arrives pre-resolved; this module only
//! formats it.

use ghadocs_core::ActionKind;
use regex::Regex;

use crate::error::RenderError;

/// Inline marker inside an input description that overrides the default
/// echoed in the usage block: free text, then `#`, then `example:`
/// (case-insensitive), then the value.
const EXAMPLE_MARKER: &str = r"(.*)(\s*#\s*[eE]xample:\s*)(.*)";

/// Result of usage construction: the YAML snippet plus the input rows with
/// example markers stripped from their descriptions, ready for the table.
pub struct UsageBlock {
    pub yaml: String,
    pub cleaned_inputs: Vec<Vec<String>>,
}

/// Build the usage snippet for one document.
///
/// `input_rows` are the raw parser rows (first cell name, second cell
/// description, last cell rendered default). Actions indent the `uses:` line
/// two spaces under an example step; workflow callers indent four spaces
/// under `jobs.call-workflow`.
pub fn build_usage(
    kind: ActionKind,
    input_rows: &[Vec<String>],
    uses_ref: &str,
) -> Result<UsageBlock, RenderError> {
    let marker = Regex::new(EXAMPLE_MARKER)?;
    let comment_tail = Regex::new(r"#.*")?;

    let mut yaml = String::new();
    let indentation = if kind.is_workflow() {
        yaml.push_str("jobs:\n");
        yaml.push_str("  call-workflow:\n");
        4
    } else {
        yaml.push_str("- name: Example Usage\n");
        2
    };
    let indent = " ".repeat(indentation);
    yaml.push_str(&format!("{indent}uses: {uses_ref}\n"));

    let mut cleaned_inputs = input_rows.to_vec();
    if !cleaned_inputs.is_empty() {
        yaml.push_str(&format!("{indent}with:\n"));
        for row in &mut cleaned_inputs {
            let name = row.first().cloned().unwrap_or_default();
            let description = row.get(1).cloned().unwrap_or_default();
            let mut default = row.last().cloned().unwrap_or_default();
            if let Some(caps) = marker.captures(&description) {
                let example = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
                if !example.is_empty() {
                    default = example.to_string();
                }
            }
            // The marker is only for this section; tables show the
            // description without it.
            if row.len() > 1 {
                row[1] = comment_tail.replace(&description, "").trim().to_string();
            }
            yaml.push_str(&format!("{indent}  {name}: {default}\n"));
        }
    }

    Ok(UsageBlock {
        yaml,
        cleaned_inputs,
    })
}
