//! Delimiter balance checking.

use serde::{Deserialize, Serialize};
use template_primitives::{CLOSE_DELIMITER, OPEN_DELIMITER, Span};

/// An opening delimiter with no matching closer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralDefect {
    span: Span,
}

impl StructuralDefect {
    /// One-byte span of the unmatched opener.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Reports every opening delimiter left unmatched by stack pairing.
///
/// Unmatched closers are ignored. Defects come back in ascending order.
/// This pass is independent of the scanner: `[[NAME]]` pairs cleanly here
/// even though the scanner sees a single malformed token.
#[must_use]
pub fn find_unclosed(text: &str) -> Vec<StructuralDefect> {
    let mut open = Vec::new();
    for (index, ch) in text.char_indices() {
        if ch == OPEN_DELIMITER {
            open.push(index);
        } else if ch == CLOSE_DELIMITER {
            open.pop();
        }
    }

    open.into_iter()
        .map(|index| StructuralDefect {
            span: Span::single(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts(text: &str) -> Vec<usize> {
        find_unclosed(text)
            .iter()
            .map(|defect| defect.span().start)
            .collect()
    }

    #[test]
    fn reports_trailing_opener() {
        let defects = find_unclosed("[A][B");
        assert_eq!(defects.len(), 1);
        assert_eq!(defects[0].span(), Span { start: 3, end: 4 });
    }

    #[test]
    fn balanced_text_has_no_defects() {
        assert!(find_unclosed("Hola [NOMBRE], de [EMPRESA].").is_empty());
        assert!(find_unclosed("no delimiters at all").is_empty());
    }

    #[test]
    fn unmatched_closers_are_ignored() {
        assert!(find_unclosed("]] [A] ]").is_empty());
    }

    #[test]
    fn nested_pairs_balance() {
        assert!(find_unclosed("[[NAME]]").is_empty());
    }

    #[test]
    fn multiple_openers_reported_in_order() {
        assert_eq!(starts("[[[A]"), vec![0, 1]);
        assert_eq!(starts("[A [B [C"), vec![0, 3, 6]);
    }
}
