//! Byte spans pointing into template text.

use std::fmt::{self, Display, Formatter};
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Half-open byte range `start..end` into the source text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end: usize,
}

impl Span {
    /// Span covering exactly one byte at `index`.
    #[must_use]
    pub const fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Number of bytes covered.
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns true for a zero-width span.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns true when the two spans share at least one byte.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Slices `text` with this span, returning `None` when out of range.
    #[must_use]
    pub fn slice(self, text: &str) -> Option<&str> {
        text.get(self.start..self.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(value: Span) -> Self {
        value.start..value.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_covers_one_byte() {
        let span = Span::single(3);
        assert_eq!(span.len(), 1);
        assert_eq!(span.slice("ab [c"), Some("["));
    }

    #[test]
    fn overlap_is_half_open() {
        let a = Span { start: 0, end: 4 };
        let b = Span { start: 4, end: 8 };
        assert!(!a.overlaps(b));
        assert!(a.overlaps(Span { start: 3, end: 5 }));
        assert_eq!(a.to_string(), "0..4");
    }
}
