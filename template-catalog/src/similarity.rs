//! Correction suggestions for unrecognized placeholder names.
//!
//! Candidates are searched in three tiers, in order: exact match, substring
//! containment in either direction, then normalized edit distance. The first
//! tier that produces a candidate wins, and within a tier the catalog's
//! declared order breaks ties.

use template_primitives::PlaceholderName;
use tracing::trace;

use crate::catalog::Catalog;

/// Minimum score a fuzzy candidate must strictly exceed.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Suggests a correction for `name` from the built-in catalog.
#[must_use]
pub fn suggest(name: &str) -> Option<PlaceholderName> {
    SimilarityMatcher::new(Catalog::builtin()).suggest(name)
}

/// Searches a catalog for the closest recognized placeholder.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityMatcher<'a> {
    catalog: &'a Catalog,
    threshold: f64,
}

impl<'a> SimilarityMatcher<'a> {
    /// Creates a matcher using [`DEFAULT_SIMILARITY_THRESHOLD`].
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    /// Overrides the fuzzy-match threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Catalog searched by this matcher.
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Returns the best correction candidate for `name`, if any.
    ///
    /// The input is uppercased before every comparison. An empty input never
    /// yields a suggestion.
    #[must_use]
    pub fn suggest(&self, name: &str) -> Option<PlaceholderName> {
        let needle = name.to_uppercase();
        if needle.is_empty() {
            return None;
        }

        if let Some(entry) = self.catalog.get(&needle) {
            trace!(input = name, candidate = %entry.name(), "exact catalog match");
            return Some(entry.name().clone());
        }

        if let Some(candidate) = self.catalog.names().find(|candidate| {
            candidate.as_str().contains(&needle) || needle.contains(candidate.as_str())
        }) {
            trace!(input = name, candidate = %candidate, "substring catalog match");
            return Some(candidate.clone());
        }

        let mut best: Option<&PlaceholderName> = None;
        let mut best_score = 0.0;
        for candidate in self.catalog.names() {
            let score = similarity(&needle, candidate.as_str());
            if score > best_score && score > self.threshold {
                best_score = score;
                best = Some(candidate);
            }
        }

        if let Some(candidate) = best {
            trace!(input = name, candidate = %candidate, score = best_score, "fuzzy catalog match");
        }
        best.cloned()
    }
}

/// Normalized similarity in `[0, 1]`: `(L - distance) / L`, where `L` is the
/// UTF-16 length of the longer string. Two empty strings score `1.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let longer = a.encode_utf16().count().max(b.encode_utf16().count());
    if longer == 0 {
        return 1.0;
    }
    let distance = edit_distance(a, b);
    (longer - distance) as f64 / longer as f64
}

/// Levenshtein distance over UTF-16 code units.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
