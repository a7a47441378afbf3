//! Metadata parser — validates an action/workflow YAML file and extracts a
//! [`DocumentModel`].
//!
//! The YAML is traversed through `serde_yaml::Value` mappings rather than
//! deserialized into maps so that input/output/secret declaration order
//! survives into the rendered tables.

use std::path::Path;

use serde_yaml::Value;

use crate::error::{io_err, schema_err, DocsError};
use crate::types::{ActionKind, DocumentModel, TableSection, WorkflowFields};

/// Required top-level fields for a standalone action.
/// <https://docs.github.com/en/actions/creating-actions/metadata-syntax-for-github-actions>
const ACTION_REQUIRED_FIELDS: &[&str] = &["name", "description", "runs"];
/// Required top-level fields for a reusable workflow.
/// <https://docs.github.com/en/actions/using-workflows/reusing-workflows>
const WORKFLOW_REQUIRED_FIELDS: &[&str] = &["name", "on", "jobs"];

/// Fixed heading of the shared reusable-workflow summary document.
pub const WORKFLOWS_TITLE: &str = "Reusable Workflows";
/// Fixed heading of the summary document's table of contents.
pub const WORKFLOWS_CONTENTS_TABLE_TITLE: &str = "List of workflows";

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Load, validate and parse one metadata file.
///
/// Returns [`DocsError::FileNotFound`] / [`DocsError::NotYaml`] for paths
/// that cannot be metadata at all, [`DocsError::Schema`] when a required
/// field is absent.
pub fn parse_file(path: &Path) -> Result<DocumentModel, DocsError> {
    if !path.is_file() {
        return Err(DocsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => {}
        _ => {
            return Err(DocsError::NotYaml {
                path: path.to_path_buf(),
            })
        }
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    parse_document(&contents, path)
}

/// Parse already-loaded metadata text. `path` is used for error context and
/// for the description fallback link.
pub fn parse_document(contents: &str, path: &Path) -> Result<DocumentModel, DocsError> {
    // Deserializing straight into a Mapping rejects lists/scalars with a
    // real serde error instead of a hand-rolled one.
    let root: serde_yaml::Mapping =
        serde_yaml::from_str(contents).map_err(|e| DocsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    let root = Value::Mapping(root);

    let name = get_str(&root, "name").unwrap_or_default();
    let description = get_str(&root, "description").unwrap_or_else(|| {
        // Documents without a description link back to the metadata file.
        format!(
            "[{}]({})",
            path.display(),
            path.file_name().map(|f| f.to_string_lossy()).unwrap_or_default()
        )
    });

    // `workflow_call:` with an empty body still marks a reusable workflow,
    // so presence of the key decides, not its value.
    let is_workflow = root
        .get("on")
        .and_then(|on| on.get("workflow_call"))
        .is_some();
    if is_workflow {
        require_fields(&root, WORKFLOW_REQUIRED_FIELDS)?;
        parse_workflow(&root, name, description)
    } else {
        require_fields(&root, ACTION_REQUIRED_FIELDS)?;
        parse_action(&root, name, description)
    }
}

// ---------------------------------------------------------------------------
// Standalone actions
// ---------------------------------------------------------------------------

fn parse_action(root: &Value, name: String, description: String) -> Result<DocumentModel, DocsError> {
    let using = root
        .get("runs")
        .and_then(|r| r.get("using"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| schema_err(&["using"], ".runs"))?;

    let mut inputs = TableSection::new(&["parameter", "description", "required", "default"]);
    for (key, value) in mapping_entries(root.get("inputs")) {
        if value.get("description").is_none() {
            return Err(schema_err(&["description"], format!(".inputs.{key}")));
        }
        inputs.rows.push(vec![
            key.clone(),
            single_line(&scalar_string(value.get("description"))),
            required_cell(value),
            // Quoted and lowercased, matching how the usage block echoes it.
            format!("\"{}\"", scalar_string(value.get("default"))).to_lowercase(),
        ]);
    }

    let mut outputs = TableSection::new(&["parameter", "description"]);
    for (key, value) in mapping_entries(root.get("outputs")) {
        if value.get("description").is_none() {
            return Err(schema_err(&["description"], format!(".outputs.{key}")));
        }
        outputs.rows.push(vec![
            key.clone(),
            single_line(&scalar_string(value.get("description"))),
        ]);
    }

    // Unknown runners (e.g. future `using:` values) still document as
    // generic actions.
    let kind = ActionKind::from_using(&using).unwrap_or(ActionKind::Composite);
    Ok(DocumentModel {
        kind,
        name,
        description,
        runs_badge: using,
        inputs,
        outputs,
        secrets: None,
        workflow: None,
    })
}

// ---------------------------------------------------------------------------
// Reusable workflows
// ---------------------------------------------------------------------------

fn parse_workflow(root: &Value, name: String, description: String) -> Result<DocumentModel, DocsError> {
    let call = root
        .get("on")
        .and_then(|on| on.get("workflow_call"))
        .cloned()
        .unwrap_or(Value::Null);

    let mut inputs = TableSection::new(&["parameter", "description", "type", "required", "default"]);
    for (key, value) in mapping_entries(call.get("inputs")) {
        let item_type = match value.get("type").and_then(Value::as_str) {
            Some(t) => t.to_string(),
            None => "string".to_string(),
        };
        let mut default = format!("\"{}\"", scalar_string(value.get("default")));
        if item_type == "boolean" {
            default = default.to_lowercase();
        }
        inputs.rows.push(vec![
            key.clone(),
            single_line(&scalar_string(value.get("description"))),
            item_type,
            required_cell(value),
            default,
        ]);
    }

    let mut secrets = TableSection::new(&["parameter", "description", "required"]);
    for (key, value) in mapping_entries(call.get("secrets")) {
        secrets.rows.push(vec![
            key.clone(),
            single_line(&scalar_string(value.get("description"))),
            required_cell(value),
        ]);
    }

    let mut outputs = TableSection::new(&["parameter", "description"]);
    for (key, value) in mapping_entries(call.get("outputs")) {
        outputs.rows.push(vec![
            key.clone(),
            single_line(&scalar_string(value.get("description"))),
        ]);
    }

    Ok(DocumentModel {
        kind: ActionKind::ReusableWorkflow,
        name: name.clone(),
        description,
        runs_badge: ActionKind::ReusableWorkflow.to_string(),
        inputs,
        outputs,
        secrets: Some(secrets),
        workflow: Some(WorkflowFields {
            title: WORKFLOWS_TITLE.to_string(),
            contents_table_item: name,
            contents_table_title: WORKFLOWS_CONTENTS_TABLE_TITLE.to_string(),
        }),
    })
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

fn require_fields(root: &Value, required: &[&str]) -> Result<(), DocsError> {
    if required.iter().any(|field| root.get(*field).is_none()) {
        return Err(schema_err(required, "top level"));
    }
    Ok(())
}

/// Iterate a YAML mapping's entries in declaration order. `None` and
/// non-mapping values yield nothing.
fn mapping_entries(value: Option<&Value>) -> Vec<(String, &Value)> {
    let Some(mapping) = value.and_then(Value::as_mapping) else {
        return Vec::new();
    };
    mapping
        .iter()
        .filter_map(|(k, v)| k.as_str().map(|k| (k.to_string(), v)))
        .collect()
}

fn get_str(root: &Value, key: &str) -> Option<String> {
    root.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Render a YAML scalar as the string a user would expect in a table cell.
/// Absent values render empty.
fn scalar_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}

/// `required` defaults to true when undeclared.
fn required_cell(value: &Value) -> String {
    match value.get("required") {
        None => "true".to_string(),
        Some(v) => scalar_string(Some(v)).to_lowercase(),
    }
}

fn single_line(s: &str) -> String {
    s.replace('\n', "").trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(contents: &str) -> Result<DocumentModel, DocsError> {
        parse_document(contents, &PathBuf::from("action.yaml"))
    }

    const COMPOSITE: &str = r#"
name: Greeting Action
description: Says hi.
inputs:
  greeting:
    description: say hi
    required: true
    default: hello
  loud:
    description: shout it
    required: false
outputs:
  message:
    description: the rendered greeting
runs:
  using: composite
  steps: []
"#;

    const WORKFLOW: &str = r#"
name: Deploy App
on:
  workflow_call:
    inputs:
      environment:
        description: target environment
        type: string
        default: staging
      dry-run:
        description: plan only
        type: boolean
        default: true
    secrets:
      token:
        description: deploy token
        required: true
    outputs:
      url:
        description: deployed url
jobs:
  deploy:
    uses: nothing
"#;

    #[test]
    fn composite_action_parses() {
        let doc = parse(COMPOSITE).expect("parse");
        assert_eq!(doc.kind, ActionKind::Composite);
        assert_eq!(doc.name, "Greeting Action");
        assert_eq!(doc.runs_badge, "composite");
        assert_eq!(
            doc.inputs.rows[0],
            vec!["greeting", "say hi", "true", "\"hello\""]
        );
        assert_eq!(doc.inputs.rows[1], vec!["loud", "shout it", "false", "\"\""]);
        assert_eq!(doc.outputs.rows[0], vec!["message", "the rendered greeting"]);
        assert!(doc.secrets.is_none());
        assert!(doc.workflow.is_none());
    }

    #[test]
    fn input_order_is_declaration_order() {
        let yaml = r#"
name: n
description: d
inputs:
  zebra: { description: z }
  apple: { description: a }
  mango: { description: m }
runs: { using: composite }
"#;
        let doc = parse(yaml).expect("parse");
        let names: Vec<&str> = doc.inputs.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn workflow_parses_with_summary_fields() {
        let doc = parse(WORKFLOW).expect("parse");
        assert_eq!(doc.kind, ActionKind::ReusableWorkflow);
        assert_eq!(doc.runs_badge, "reusable workflow");
        assert_eq!(
            doc.inputs.rows[0],
            vec!["environment", "target environment", "string", "true", "\"staging\""]
        );
        // boolean defaults are lowercased, still quoted
        assert_eq!(
            doc.inputs.rows[1],
            vec!["dry-run", "plan only", "boolean", "true", "\"true\""]
        );
        let secrets = doc.secrets.expect("secrets");
        assert_eq!(secrets.rows[0], vec!["token", "deploy token", "true"]);
        let wf = doc.workflow.expect("workflow fields");
        assert_eq!(wf.title, WORKFLOWS_TITLE);
        assert_eq!(wf.contents_table_item, "Deploy App");
        assert_eq!(wf.contents_table_title, WORKFLOWS_CONTENTS_TABLE_TITLE);
    }

    #[test]
    fn missing_top_level_fields_is_schema_error() {
        let err = parse("name: only-a-name\n").unwrap_err();
        match err {
            DocsError::Schema { location, .. } => assert_eq!(location, "top level"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn input_without_description_is_schema_error() {
        let yaml = r#"
name: n
description: d
inputs:
  broken:
    required: true
runs: { using: composite }
"#;
        let err = parse(yaml).unwrap_err();
        match err {
            DocsError::Schema { required, location } => {
                assert_eq!(required, vec!["description"]);
                assert_eq!(location, ".inputs.broken");
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn missing_runs_using_is_schema_error() {
        let yaml = "name: n\ndescription: d\nruns: { steps: [] }\n";
        let err = parse(yaml).unwrap_err();
        match err {
            DocsError::Schema { required, location } => {
                assert_eq!(required, vec!["using"]);
                assert_eq!(location, ".runs");
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn missing_description_falls_back_to_file_link() {
        let yaml = "name: n\non: { workflow_call: }\njobs: { j: {} }\n";
        let doc = parse_document(yaml, &PathBuf::from("flows/deploy.yaml")).expect("parse");
        assert_eq!(doc.description, "[flows/deploy.yaml](deploy.yaml)");
    }

    #[test]
    fn non_mapping_yaml_is_parse_error() {
        assert!(matches!(parse("- just\n- a list\n"), Err(DocsError::Parse { .. })));
    }

    #[test]
    fn file_checks() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let missing = tmp.path().join("nope.yaml");
        assert!(matches!(
            parse_file(&missing),
            Err(DocsError::FileNotFound { .. })
        ));

        let wrong_ext = tmp.path().join("action.txt");
        std::fs::write(&wrong_ext, "name: x").expect("write");
        assert!(matches!(parse_file(&wrong_ext), Err(DocsError::NotYaml { .. })));
    }

    #[test]
    fn node_runner_classifies_as_javascript() {
        let yaml = "name: n\ndescription: d\nruns: { using: node20, main: index.js }\n";
        let doc = parse(yaml).expect("parse");
        assert_eq!(doc.kind, ActionKind::Javascript);
        assert_eq!(doc.runs_badge, "node20");
    }
}
