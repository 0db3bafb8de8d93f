#![forbid(unsafe_code)]

//! Ephemeral match results produced by the search scorer.
//!
//! A [`MatchResult`] records where a search string first hit a record:
//! the priority field that matched, that field's 1-based rank in the
//! priority list, and the character offset of the first occurrence.
//! Results live in a [`MatchMap`] keyed by record id for the duration of
//! one search/sort pass and are then discarded — input records are never
//! annotated in place (the one exception being the caller-attached
//! [`first_match`](crate::record::ConversationRecord::first_match) used by
//! contexts that pre-score records before sorting).

use ahash::AHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a search string first matched a record.
///
/// Rank before offset: a match in a higher-priority field always outranks
/// a match earlier in a lower-priority field, so `(value, position)` forms
/// a lexicographic ordering key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchResult {
    /// Name of the priority field that matched.
    pub field: String,
    /// 1-based rank of that field in the priority list (lower = searched first).
    pub value: usize,
    /// Character offset of the first occurrence within the case-folded value.
    pub position: usize,
    /// Echo of the record's display name at scoring time.
    pub name: Option<String>,
}

impl MatchResult {
    /// Create a match result with no name echo.
    #[must_use]
    pub fn new(field: impl Into<String>, value: usize, position: usize) -> Self {
        Self {
            field: field.into(),
            value,
            position,
            name: None,
        }
    }

    /// Attach the record's name as it was at scoring time.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Id-keyed match side table. An absent entry means "no match in any
/// priority field".
pub type MatchMap = AHashMap<String, MatchResult>;
