//! Unified-diff rendering for dry runs and change previews.

use std::path::Path;

use similar::TextDiff;

/// Unified diff between the on-disk content and the synchronized content,
/// with `a/`/`b/` headers so it reads like `git diff` output. Returns an
/// empty string when the two sides are identical.
pub fn unified(old: &str, new: &str, path: &Path) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(10)
        .header(
            &format!("a/{}", path.display()),
            &format!("b/{}", path.display()),
        )
        .to_string()
}
