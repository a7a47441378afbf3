//! Contents-table accumulation for the shared reusable-workflow document.
//!
//! Every workflow contributes one `- [Name](#anchor)` line to a single
//! `CONTENTS_TABLE_ITEM` slot. Because the summary document is merged once
//! per workflow file, the new line has to be combined with whatever earlier
//! runs already wrote there, without duplicating entries on re-runs.

use ghadocs_renderer::StyledDocs;

use crate::error::SyncError;
use crate::slots;

const FIELD: &str = "contents_table_item";

/// Fold the already-written contents list into the styled fragment.
///
/// Reads the current `CONTENTS_TABLE_ITEM` slot from `content`; if the line
/// this run would add is already present there (substring check, so the
/// anchor link counts too), keeps the existing list as is, otherwise appends
/// the new line. The combined list replaces the fragment in `styled` so the
/// ordinary merge pass writes it back.
pub fn update_contents_table(
    content: &str,
    styled: &mut StyledDocs,
    prefix: &str,
) -> Result<(), SyncError> {
    let Some(new_item) = styled.get(FIELD).map(str::to_string) else {
        return Ok(());
    };

    let existing = slots::find_slot(content, FIELD, prefix)?.unwrap_or_default();
    let combined = if existing.contains(new_item.trim()) {
        existing
    } else {
        format!("{existing}{new_item}")
    };

    styled.set(
        FIELD,
        format!("\n\n{}", combined.trim_start_matches('\n')),
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ghadocs_core::{ActionKind, DocumentModel, TableSection, WorkflowFields};
    use ghadocs_renderer::style;

    const PREFIX: &str = "GH_DOCS";

    fn workflow_styled(name: &str) -> StyledDocs {
        let model = DocumentModel {
            kind: ActionKind::ReusableWorkflow,
            name: name.to_string(),
            description: "d".to_string(),
            runs_badge: "reusable workflow".to_string(),
            inputs: TableSection::new(&["parameter", "description", "type", "required", "default"]),
            outputs: TableSection::new(&["parameter", "description"]),
            secrets: Some(TableSection::new(&["parameter", "description", "required"])),
            workflow: Some(WorkflowFields {
                title: "Reusable Workflows".to_string(),
                contents_table_item: name.to_string(),
                contents_table_title: "List of workflows".to_string(),
            }),
        };
        style(&model, "ref").expect("style")
    }

    #[test]
    fn first_entry_lands_with_leading_blank_line() {
        let mut styled = workflow_styled("Deploy App");
        update_contents_table("<!-- GH_DOCS_CONTENTS_TABLE_ITEM -->", &mut styled, PREFIX)
            .expect("toc");
        assert_eq!(
            styled.get("contents_table_item"),
            Some("\n\n- [Deploy App](#deploy-app)\n")
        );
    }

    #[test]
    fn second_workflow_appends_to_existing_list() {
        let content = "<!-- BEGIN_GH_DOCS_CONTENTS_TABLE_ITEM -->\n\n\
                       - [Deploy App](#deploy-app)\n\
                       <!-- END_GH_DOCS_CONTENTS_TABLE_ITEM -->";
        let mut styled = workflow_styled("Run Tests");
        update_contents_table(content, &mut styled, PREFIX).expect("toc");
        assert_eq!(
            styled.get("contents_table_item"),
            Some("\n\n- [Deploy App](#deploy-app)\n- [Run Tests](#run-tests)\n")
        );
    }

    #[test]
    fn rerun_does_not_duplicate_entries() {
        let content = "<!-- BEGIN_GH_DOCS_CONTENTS_TABLE_ITEM -->\n\n\
                       - [Deploy App](#deploy-app)\n\
                       - [Run Tests](#run-tests)\n\
                       <!-- END_GH_DOCS_CONTENTS_TABLE_ITEM -->";
        let mut styled = workflow_styled("Deploy App");
        update_contents_table(content, &mut styled, PREFIX).expect("toc");
        assert_eq!(
            styled.get("contents_table_item"),
            Some("\n\n- [Deploy App](#deploy-app)\n- [Run Tests](#run-tests)\n")
        );
    }

    #[test]
    fn action_docs_are_left_alone() {
        let model = DocumentModel {
            kind: ActionKind::Composite,
            name: "A".to_string(),
            description: "d".to_string(),
            runs_badge: "composite".to_string(),
            inputs: TableSection::new(&["parameter", "description", "required", "default"]),
            outputs: TableSection::new(&["parameter", "description"]),
            secrets: None,
            workflow: None,
        };
        let mut styled = style(&model, "ref").expect("style");
        update_contents_table("anything", &mut styled, PREFIX).expect("toc");
        assert_eq!(styled.get("contents_table_item"), None);
    }
}
