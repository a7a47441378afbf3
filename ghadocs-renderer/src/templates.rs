//! Skeleton templates — [`Skeleton`] enum and the Tera-backed [`Skeletons`]
//! engine.
//!
//! Three fixed skeletons, parameterized only by the tag prefix (and, for the
//! per-item skeleton, the item identifier):
//!
//! | Skeleton     | Used for                                            |
//! |--------------|-----------------------------------------------------|
//! | Action       | standalone actions (composite/javascript/docker)    |
//! | WorkflowTop  | the shared reusable-workflow summary document       |
//! | WorkflowItem | one workflow's section inside the summary document  |

use tera::Tera;

use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("action.md.tera", include_str!("templates/action.md.tera")),
    ("workflow.md.tera", include_str!("templates/workflow.md.tera")),
    (
        "workflow_item.md.tera",
        include_str!("templates/workflow_item.md.tera"),
    ),
];

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TPLS.to_vec())?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Skeleton
// ---------------------------------------------------------------------------

/// The three document skeletons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skeleton {
    Action,
    WorkflowTop,
    WorkflowItem,
}

impl Skeleton {
    fn template_name(&self) -> &'static str {
        match self {
            Skeleton::Action => "action.md.tera",
            Skeleton::WorkflowTop => "workflow.md.tera",
            Skeleton::WorkflowItem => "workflow_item.md.tera",
        }
    }
}

// ---------------------------------------------------------------------------
// Skeletons engine
// ---------------------------------------------------------------------------

/// Tera-based skeleton renderer. Create once with [`Skeletons::new`] and
/// reuse across files.
pub struct Skeletons {
    tera: Tera,
}

impl Skeletons {
    pub fn new() -> Result<Self, RenderError> {
        Ok(Skeletons { tera: build_tera()? })
    }

    /// Render the action or workflow-top skeleton with `prefix` substituted
    /// into every marker.
    pub fn render(&self, skeleton: Skeleton, prefix: &str) -> Result<String, RenderError> {
        let mut ctx = tera::Context::new();
        ctx.insert("prefix", prefix);
        // The per-item skeleton needs an item_id; rendering it through this
        // entry point would be a caller bug, surfaced by Tera as a missing
        // variable.
        Ok(self.tera.render(skeleton.template_name(), &ctx)?)
    }

    /// Render the per-item skeleton with both `prefix` and the item
    /// identifier substituted.
    pub fn render_item(&self, prefix: &str, item_id: &str) -> Result<String, RenderError> {
        let mut ctx = tera::Context::new();
        ctx.insert("prefix", prefix);
        ctx.insert("item_id", item_id);
        Ok(self
            .tera
            .render(Skeleton::WorkflowItem.template_name(), &ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
