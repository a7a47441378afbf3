//! Slot tag grammar and merge engine.
//!
//! A slot is a named insertion point delimited by sentinel comments. Two
//! physical forms exist:
//!
//! - hollow (not yet filled): `<!-- PREFIX_FIELD -->`
//! - filled: `<!-- BEGIN_PREFIX_FIELD -->content<!-- END_PREFIX_FIELD -->`
//!
//! [`merge`] rewrites hollow markers into filled ones and updates the inner
//! content of already-filled ones; bytes outside recognized markers are never
//! touched, and unrecognized markers are inert. Re-merging the same value is
//! a no-op, which is what makes whole-document synchronization idempotent.

use regex::Regex;

use crate::error::SyncError;

/// Default sentinel prefix.
pub const DEFAULT_TAG_PREFIX: &str = "GH_DOCS";

/// Merge `value` into the slot named `field`, returning the new document
/// text.
///
/// Both steps run on every call, in this order:
///
/// 1. update the first filled `BEGIN`/`END` pair (duplicate pairs: first one
///    wins, later ones are left alone);
/// 2. promote the first remaining hollow marker to filled form — a pair
///    freshly updated by step 1 no longer matches the hollow form.
///
/// A document without any marker for `field` passes through unchanged; a
/// document author omitting an optional section is not an error.
pub fn merge(content: &str, field: &str, value: &str, prefix: &str) -> Result<String, SyncError> {
    let ident = slot_ident(field, prefix);

    let filled = filled_pattern(&ident)?;
    let content = filled.replace(content, |caps: &regex::Captures<'_>| {
        format!("{}{}{}", &caps[1], value, &caps[3])
    });

    let hollow = Regex::new(&format!(r"<!-- {} -->", regex::escape(&ident)))?;
    // NoExpand keeps `$` in values literal instead of expanding captures.
    let filled_form = format!("<!-- BEGIN_{ident} -->{value}<!-- END_{ident} -->");
    let content = hollow.replace(&content, regex::NoExpand(&filled_form));

    Ok(content.into_owned())
}

/// Read the inner content of the first filled slot named `field`, or `None`
/// when the slot is hollow or absent.
pub fn find_slot(content: &str, field: &str, prefix: &str) -> Result<Option<String>, SyncError> {
    let ident = slot_ident(field, prefix);
    let filled = filled_pattern(&ident)?;
    Ok(filled
        .captures(content)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string()))
}

/// Whether the document carries any marker (hollow or filled) for `prefix`.
pub fn has_any_marker(content: &str, prefix: &str) -> Result<bool, SyncError> {
    let any = Regex::new(&format!(
        r"<!--\s(BEGIN_)?{}(_.+)\s-->",
        regex::escape(prefix)
    ))?;
    Ok(any.is_match(content))
}

fn slot_ident(field: &str, prefix: &str) -> String {
    format!("{prefix}_{}", field.to_uppercase())
}

/// `(?s)` so slot content spans lines; non-greedy so the first `END` closes
/// the first `BEGIN` even when duplicate pairs exist further down.
fn filled_pattern(ident: &str) -> Result<Regex, SyncError> {
    let escaped = regex::escape(ident);
    Ok(Regex::new(&format!(
        r"(?s)(<!-- BEGIN_{escaped} -->)(.*?)(<!-- END_{escaped} -->)"
    ))?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
