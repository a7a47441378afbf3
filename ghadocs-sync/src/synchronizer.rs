//! Per-document synchronization — skeleton bootstrap, slot merging, and
//! atomic writes.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use ghadocs_core::{item_ident, DocumentModel};
use ghadocs_renderer::{Skeleton, Skeletons, StyledDocs};

use crate::error::{io_err, SyncError};
use crate::slots;
use crate::toc;

// ---------------------------------------------------------------------------
// OutputMode
// ---------------------------------------------------------------------------

/// How an existing docs file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Merge into the file as found; a file without any marker gets the
    /// skeleton body appended first.
    #[default]
    Inject,
    /// Discard the file and start over from the skeleton.
    Replace,
}

// ---------------------------------------------------------------------------
// SyncOutcome
// ---------------------------------------------------------------------------

/// Result of synchronizing one docs file. Nothing is written to disk until
/// [`write_outcome`] is called, so callers can inspect or diff first.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub path: PathBuf,
    pub content: String,
    /// True when `content` differs from what the file held before the run
    /// (or the file did not exist).
    pub changed: bool,
}

// ---------------------------------------------------------------------------
// sync_document
// ---------------------------------------------------------------------------

/// Merge every styled fragment into the docs file at `docs_path`.
///
/// Every field is merged under its bare slot name; reusable workflows merge
/// each field a second time under `{FIELD}_{ITEM_ID}` so that many workflows
/// can share one summary document. The item skeleton is appended on first
/// sight of a new workflow and the contents table accumulates one line per
/// workflow.
pub fn sync_document(
    model: &DocumentModel,
    styled: &StyledDocs,
    docs_path: &Path,
    output_mode: OutputMode,
    prefix: &str,
    skeletons: &Skeletons,
) -> Result<SyncOutcome, SyncError> {
    let skeleton = if model.kind.is_workflow() {
        Skeleton::WorkflowTop
    } else {
        Skeleton::Action
    };

    let original = match fs::read_to_string(docs_path) {
        Ok(text) => Some(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => return Err(io_err(docs_path, err)),
    };

    let mut content = match (&original, output_mode) {
        (Some(_), OutputMode::Replace) | (None, _) => skeletons.render(skeleton, prefix)?,
        (Some(existing), OutputMode::Inject) => {
            if slots::has_any_marker(existing, prefix)? {
                existing.clone()
            } else {
                // Hand-written file with no markers: append the skeleton
                // body, dropping its top-level heading so the file keeps its
                // own title.
                let body = Regex::new(r"#.+\n")?
                    .replace(&skeletons.render(skeleton, prefix)?, "")
                    .into_owned();
                format!("{existing}\n{body}")
            }
        }
    };

    let mut styled = styled.clone();
    let item_id = if model.kind.is_workflow() {
        let id = item_ident(&model.name);
        if !content.contains(&id) {
            content.push('\n');
            content.push_str(&skeletons.render_item(prefix, &id)?);
        }
        toc::update_contents_table(&content, &mut styled, prefix)?;
        Some(id)
    } else {
        None
    };

    for (field, value) in styled.iter() {
        content = slots::merge(&content, field, value, prefix)?;
        // Workflows also merge under the item-qualified name so many of them
        // can share one summary document. Qualified variants of the
        // top-of-document fields (title, contents table) never appear in any
        // skeleton, so that pass is inert for them.
        if let Some(id) = &item_id {
            content = slots::merge(&content, &format!("{field}_{id}"), value, prefix)?;
        }
    }

    let content = content.trim_start().to_string();
    let changed = original.as_deref() != Some(content.as_str());

    Ok(SyncOutcome {
        path: docs_path.to_path_buf(),
        content,
        changed,
    })
}

// ---------------------------------------------------------------------------
// write_outcome
// ---------------------------------------------------------------------------

/// Write the synchronized content to disk atomically: a `.tmp` sibling is
/// written first, then renamed over the target.
pub fn write_outcome(outcome: &SyncOutcome) -> Result<(), SyncError> {
    if let Some(parent) = outcome.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| io_err(parent, err))?;
        }
    }
    let tmp = outcome.path.with_extension("tmp");
    fs::write(&tmp, &outcome.content).map_err(|err| io_err(&tmp, err))?;
    fs::rename(&tmp, &outcome.path).map_err(|err| io_err(&outcome.path, err))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ghadocs_core::{ActionKind, TableSection, WorkflowFields};
    use ghadocs_renderer::style;
    use tempfile::TempDir;

    const PREFIX: &str = "GH_DOCS";

    fn action_model(name: &str) -> DocumentModel {
        let mut inputs = TableSection::new(&["parameter", "description", "required", "default"]);
        inputs.rows.push(vec![
            "greeting".to_string(),
            "say hi".to_string(),
            "true".to_string(),
            "\"hello\"".to_string(),
        ]);
        DocumentModel {
            kind: ActionKind::Composite,
            name: name.to_string(),
            description: "Says hi.".to_string(),
            runs_badge: "composite".to_string(),
            inputs,
            outputs: TableSection::new(&["parameter", "description"]),
            secrets: None,
            workflow: None,
        }
    }

    fn workflow_model(name: &str) -> DocumentModel {
        DocumentModel {
            kind: ActionKind::ReusableWorkflow,
            name: name.to_string(),
            description: "Ships it.".to_string(),
            runs_badge: "reusable workflow".to_string(),
            inputs: TableSection::new(&[
                "parameter",
                "description",
                "type",
                "required",
                "default",
            ]),
            outputs: TableSection::new(&["parameter", "description"]),
            secrets: Some(TableSection::new(&["parameter", "description", "required"])),
            workflow: Some(WorkflowFields {
                title: "Reusable Workflows".to_string(),
                contents_table_item: name.to_string(),
                contents_table_title: "List of workflows".to_string(),
            }),
        }
    }

    fn sync_at(
        dir: &TempDir,
        model: &DocumentModel,
        mode: OutputMode,
    ) -> SyncOutcome {
        let skeletons = Skeletons::new().expect("skeletons");
        let styled = style(model, "octo/widgets@v1").expect("style");
        let outcome = sync_document(
            model,
            &styled,
            &dir.path().join("README.md"),
            mode,
            PREFIX,
            &skeletons,
        )
        .expect("sync");
        write_outcome(&outcome).expect("write");
        outcome
    }

    #[test]
    fn missing_file_is_created_from_skeleton() {
        let dir = TempDir::new().expect("tempdir");
        let outcome = sync_at(&dir, &action_model("Greeting Action"), OutputMode::Inject);
        assert!(outcome.changed);
        assert!(outcome
            .content
            .starts_with("# <!-- BEGIN_GH_DOCS_NAME -->Greeting Action<!-- END_GH_DOCS_NAME -->"));
        assert!(outcome.content.contains("| greeting  | say hi      | true     | \"hello\" |"));
        assert!(outcome
            .content
            .contains("This item does not have any outputs."));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("README.md")).expect("read"),
            outcome.content
        );
    }

    #[test]
    fn second_run_reports_unchanged() {
        let dir = TempDir::new().expect("tempdir");
        let model = action_model("Greeting Action");
        let first = sync_at(&dir, &model, OutputMode::Inject);
        assert!(first.changed);
        let second = sync_at(&dir, &model, OutputMode::Inject);
        assert!(!second.changed);
        assert_eq!(first.content, second.content);
    }

    #[test]
    fn metadata_edit_updates_only_affected_slots() {
        let dir = TempDir::new().expect("tempdir");
        let mut model = action_model("Greeting Action");
        let first = sync_at(&dir, &model, OutputMode::Inject);

        model.inputs.rows[0][3] = "\"howdy\"".to_string();
        let second = sync_at(&dir, &model, OutputMode::Inject);
        assert!(second.changed);
        assert!(second.content.contains("\"howdy\""));
        assert!(!second.content.contains("\"hello\""));
        // Name and description slots are byte-identical across runs.
        let name_slot = |c: &str| slots::find_slot(c, "name", PREFIX).expect("slot");
        assert_eq!(name_slot(&first.content), name_slot(&second.content));
    }

    #[test]
    fn prose_outside_markers_survives() {
        let dir = TempDir::new().expect("tempdir");
        let model = action_model("Greeting Action");
        let first = sync_at(&dir, &model, OutputMode::Inject);

        let annotated = first
            .content
            .replace("## Inputs", "Hand-written intro.\n\n## Inputs");
        std::fs::write(dir.path().join("README.md"), &annotated).expect("write");

        let second = sync_at(&dir, &model, OutputMode::Inject);
        assert!(!second.changed);
        assert!(second.content.contains("Hand-written intro.\n\n## Inputs"));
    }

    #[test]
    fn replace_mode_discards_foreign_edits() {
        let dir = TempDir::new().expect("tempdir");
        let model = action_model("Greeting Action");
        sync_at(&dir, &model, OutputMode::Inject);
        std::fs::write(dir.path().join("README.md"), "scribbles everywhere").expect("write");

        let rebuilt = sync_at(&dir, &model, OutputMode::Replace);
        assert!(rebuilt.changed);
        assert!(!rebuilt.content.contains("scribbles"));
        assert!(rebuilt.content.contains("Greeting Action"));
    }

    #[test]
    fn inject_appends_skeleton_body_to_markerless_file() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("README.md"), "# My Own Title\n\nProse.\n")
            .expect("write");

        let outcome = sync_at(&dir, &action_model("Greeting Action"), OutputMode::Inject);
        assert!(outcome.changed);
        assert!(outcome.content.starts_with("# My Own Title\n"));
        // The skeleton's heading line (and the NAME slot it carries) is
        // dropped so the file keeps its own title; the rest is merged.
        assert!(!outcome.content.contains("GH_DOCS_NAME"));
        assert!(outcome
            .content
            .contains("<!-- BEGIN_GH_DOCS_DESCRIPTION -->\n\nSays hi.\n\n<!-- END_GH_DOCS_DESCRIPTION -->"));
    }

    #[test]
    fn workflows_accumulate_in_one_summary() {
        let dir = TempDir::new().expect("tempdir");
        let first = sync_at(&dir, &workflow_model("Deploy App"), OutputMode::Inject);
        assert!(first.changed);
        assert!(first.content.contains("DEPLOY_APP"));

        let second = sync_at(&dir, &workflow_model("Run Tests"), OutputMode::Inject);
        assert!(second.changed);
        // Both item sections present, both contents lines, in arrival order.
        assert!(second.content.contains("DEPLOY_APP"));
        assert!(second.content.contains("RUN_TESTS"));
        let toc = slots::find_slot(&second.content, "contents_table_item", PREFIX)
            .expect("slot")
            .expect("filled");
        assert_eq!(toc, "\n\n- [Deploy App](#deploy-app)\n- [Run Tests](#run-tests)\n");

        // Re-running either workflow is a no-op.
        let third = sync_at(&dir, &workflow_model("Deploy App"), OutputMode::Inject);
        assert!(!third.changed);
    }

    #[test]
    fn workflow_fills_unqualified_markers_too() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(
            dir.path().join("README.md"),
            "# Summary\n\n<!-- GH_DOCS_DESCRIPTION -->\n",
        )
        .expect("write");

        let outcome = sync_at(&dir, &workflow_model("Deploy App"), OutputMode::Inject);
        assert!(outcome.content.contains(
            "<!-- BEGIN_GH_DOCS_DESCRIPTION -->\n\nShips it.\n\n<!-- END_GH_DOCS_DESCRIPTION -->"
        ));
        // The qualified pass still fills the item section.
        assert!(outcome
            .content
            .contains("<!-- BEGIN_GH_DOCS_DESCRIPTION_DEPLOY_APP -->"));
    }

    #[test]
    fn write_outcome_creates_parent_directories() {
        let dir = TempDir::new().expect("tempdir");
        let outcome = SyncOutcome {
            path: dir.path().join("nested/dir/README.md"),
            content: "hello".to_string(),
            changed: true,
        };
        write_outcome(&outcome).expect("write");
        assert_eq!(
            std::fs::read_to_string(&outcome.path).expect("read"),
            "hello"
        );
    }
}
