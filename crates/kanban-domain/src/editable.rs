//! Inline title editing.
//!
//! A title field commits a draft only when it actually changes something;
//! blank drafts and unchanged drafts revert to the current title without a
//! save.

/// Returns the title to save, or `None` when the edit should be discarded.
pub fn resolve_title_edit(current: &str, draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() || draft == current || trimmed == current {
        return None;
    }
    Some(trimmed.to_string())
}
