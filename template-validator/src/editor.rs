//! Editing helpers for hosts that insert placeholders into a draft.

use std::ops::Range;

use template_primitives::PlaceholderName;

use crate::error::{TemplateError, TemplateResult};

/// Text after an insertion and the cursor placed right after the new token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Updated text.
    pub text: String,
    /// Byte offset just past the inserted token.
    pub cursor: usize,
}

/// Replaces the byte range `selection` with `[NAME]`.
///
/// An empty range such as `5..5` inserts at a plain cursor.
///
/// # Errors
///
/// Returns [`TemplateError::InvalidSelection`] when the range is inverted,
/// runs past the end of `text`, or splits a multi-byte character.
pub fn insert_placeholder(
    text: &str,
    selection: Range<usize>,
    name: &PlaceholderName,
) -> TemplateResult<Insertion> {
    let Range { start, end } = selection;
    if start > end || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
        return Err(TemplateError::InvalidSelection {
            start,
            end,
            len: text.len(),
        });
    }

    let token = name.token();
    let mut updated = String::with_capacity(text.len() - (end - start) + token.len());
    updated.push_str(&text[..start]);
    updated.push_str(&token);
    updated.push_str(&text[end..]);

    Ok(Insertion {
        text: updated,
        cursor: start + token.len(),
    })
}
