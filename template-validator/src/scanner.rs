//! Placeholder token extraction.

use serde::{Deserialize, Serialize};
use template_catalog::{Catalog, SimilarityMatcher};
use template_primitives::{
    CLOSE_DELIMITER, OPEN_DELIMITER, PlaceholderName, Span, is_valid_placeholder_name,
};

/// A bracketed token found in a template body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPlaceholder {
    name: String,
    span: Span,
    is_name_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suggestion: Option<PlaceholderName>,
}

impl DetectedPlaceholder {
    /// Text between the delimiters, exactly as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte span of the token, delimiters included.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Whether the name matches `^[A-Z0-9_]+$`.
    #[must_use]
    pub fn is_name_valid(&self) -> bool {
        self.is_name_valid
    }

    /// Correction proposed for a well-formed but unrecognized name.
    #[must_use]
    pub fn suggestion(&self) -> Option<&PlaceholderName> {
        self.suggestion.as_ref()
    }
}

/// Scans `text` against the built-in catalog.
#[must_use]
pub fn scan(text: &str) -> Vec<DetectedPlaceholder> {
    Scanner::new(SimilarityMatcher::new(Catalog::builtin())).scan(text)
}

/// Extracts placeholder tokens and classifies their names.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    matcher: SimilarityMatcher<'a>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner that proposes corrections with `matcher`.
    #[must_use]
    pub fn new(matcher: SimilarityMatcher<'a>) -> Self {
        Self { matcher }
    }

    /// Returns tokens in ascending, non-overlapping order.
    ///
    /// An opening delimiter without a later closing delimiter produces no
    /// token; the balance checker reports it instead.
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<DetectedPlaceholder> {
        Tokens::new(text)
            .map(|(name, span)| {
                let is_name_valid = is_valid_placeholder_name(name);
                let suggestion = if is_name_valid && !self.matcher.catalog().contains(name) {
                    self.matcher.suggest(name)
                } else {
                    None
                };
                DetectedPlaceholder {
                    name: name.to_owned(),
                    span,
                    is_name_valid,
                    suggestion,
                }
            })
            .collect()
    }
}

/// Iterator over raw `(name, span)` tokens.
///
/// Each token runs from an opening delimiter to the first closing delimiter
/// after it; nested openers become part of the name.
pub(crate) struct Tokens<'t> {
    text: &'t str,
    cursor: usize,
}

impl<'t> Tokens<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self { text, cursor: 0 }
    }
}

impl<'t> Iterator for Tokens<'t> {
    type Item = (&'t str, Span);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.text.get(self.cursor..)?;
        let start = self.cursor + rest.find(OPEN_DELIMITER)?;
        let name_start = start + OPEN_DELIMITER.len_utf8();
        let name_len = self.text[name_start..].find(CLOSE_DELIMITER)?;
        let name_end = name_start + name_len;
        let end = name_end + CLOSE_DELIMITER.len_utf8();

        self.cursor = end;
        Some((&self.text[name_start..name_end], Span { start, end }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_valid_placeholder() {
        let found = scan("[NOMBRE]");
        assert_eq!(found.len(), 1);
        let placeholder = &found[0];
        assert_eq!(placeholder.name(), "NOMBRE");
        assert!(placeholder.is_name_valid());
        assert_eq!(placeholder.span(), Span { start: 0, end: 8 });
        assert_eq!(placeholder.suggestion(), None);
    }

    #[test]
    fn lowercase_name_is_invalid() {
        let found = scan("[nombre]");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "nombre");
        assert!(!found[0].is_name_valid());
        assert_eq!(found[0].suggestion(), None);
    }

    #[test]
    fn unrecognized_valid_name_gets_suggestion() {
        let found = scan("Hola [NOMRE]");
        assert_eq!(found[0].suggestion().map(PlaceholderName::as_str), Some("NOMBRE"));
    }

    #[test]
    fn unterminated_opener_yields_nothing() {
        assert!(scan("Hola [NOMBRE").is_empty());
        let found = scan("[A] y [B");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "A");
    }

    #[test]
    fn nested_opener_is_part_of_name() {
        let found = scan("[[NAME]]");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "[NAME");
        assert!(!found[0].is_name_valid());
        assert_eq!(found[0].span(), Span { start: 0, end: 7 });
    }

    #[test]
    fn empty_brackets_are_invalid() {
        let found = scan("x [] y");
        assert_eq!(found[0].name(), "");
        assert!(!found[0].is_name_valid());
    }

    #[test]
    fn spans_are_byte_offsets_with_multibyte_text() {
        let text = "¿Qué tal [NOMBRE]?";
        let found = scan(text);
        assert_eq!(found[0].span().slice(text), Some("[NOMBRE]"));
    }

    #[test]
    fn stray_closer_is_ignored() {
        let found = scan("] [FECHA] ]");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span(), Span { start: 2, end: 9 });
    }
}
