//! Recognized placeholders and correction suggestions.
//!
//! The [`Catalog`] is an ordered, read-only list of the business variables a
//! template may reference. Its declared order matters: it is the tie-break
//! used by the [`SimilarityMatcher`] when several entries score equally.

#![warn(missing_docs, clippy::pedantic)]

pub mod catalog;
pub mod similarity;

pub use catalog::{
    Catalog, CatalogBuilder, CatalogEntry, CatalogError, CatalogResult, PlaceholderCategory,
};
pub use similarity::{
    DEFAULT_SIMILARITY_THRESHOLD, SimilarityMatcher, edit_distance, similarity, suggest,
};
