#![forbid(unsafe_code)]

//! Locale collation seam for lexical ordering.
//!
//! The terminal name/id tie-break compares case-folded, trimmed display
//! keys. How two folded keys compare is a locale question, so it is
//! delegated through the [`Collate`] trait rather than hard-coded: the
//! host application can inject a real locale collator, while the default
//! [`LexicalCollator`] compares code points — the behavior of a collator
//! with no locale data loaded.
//!
//! Collators hold no per-call state; one instance can serve concurrent
//! read-only comparisons.

use std::cmp::Ordering;

use roster_core::ConversationRecord;

/// A stateless string-collation capability.
pub trait Collate {
    /// Compare two already-folded sort keys.
    fn compare(&self, left: &str, right: &str) -> Ordering;
}

/// Default collator: code-point order over the folded key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexicalCollator;

impl Collate for LexicalCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        left.cmp(right)
    }
}

/// Shared default instance, reused across calls.
pub(crate) static DEFAULT_COLLATOR: LexicalCollator = LexicalCollator;

/// Case-folded, whitespace-trimmed sort key for a record's display name.
///
/// Folding is locale-naive lower-casing, matching the scorer's fold.
#[must_use]
pub(crate) fn display_sort_key(record: &ConversationRecord) -> String {
    record.display_name().to_lowercase().trim().to_owned()
}
