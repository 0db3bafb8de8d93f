#![forbid(unsafe_code)]

//! First-match scoring and the top-level search entry point.
//!
//! Scoring scans a record's priority fields in order and reports the
//! first field whose case-folded value contains the case-folded search
//! string. The result carries the field's 1-based rank and the character
//! offset of the first occurrence, forming a `(rank, offset)` ordering
//! key for the search-aware predicates: a match in a higher-priority
//! field always outranks a match earlier in a lower-priority field.
//!
//! Case folding is locale-naive lower-casing, not full Unicode case
//! folding.
//!
//! # Filter vs. rank-only mode
//!
//! [`search_and_populate_matches`] has two deliberate behaviors. Without
//! an inclusion condition, non-matching records are removed from the
//! returned set. With one, the condition restricts the set first and the
//! restricted records are returned *unfiltered* — non-matches stay
//! visible (trailing, once sorted with a match-aware chain) and the
//! match map alone conveys the ranking. Some pickers want non-matches
//! demoted; others want them gone.

use tracing::debug;

use roster_core::{ConversationRecord, MatchMap, MatchResult};

/// Default priority-field list, searched in order.
pub const SEARCHED_FIELDS: [&str; 7] = [
    "name",
    "signature",
    "email",
    "id",
    "title",
    "profile_name",
    "protected_configs",
];

/// Score one record against a search string.
///
/// Returns the first priority field containing the folded search string,
/// or `None` when no field matches. An empty search string or an empty
/// field list degrades to `None`.
#[must_use]
pub fn find_first_match(
    record: &ConversationRecord,
    search_text: &str,
    priority_fields: &[&str],
) -> Option<MatchResult> {
    if search_text.is_empty() {
        return None;
    }
    let needle = search_text.to_lowercase();
    for (index, field) in priority_fields.iter().enumerate() {
        let Some(value) = record.search_field(field) else {
            continue;
        };
        let haystack = value.to_lowercase();
        if let Some(byte_offset) = haystack.find(&needle) {
            let position = haystack[..byte_offset].chars().count();
            return Some(MatchResult {
                field: (*field).to_owned(),
                value: index + 1,
                position,
                name: record.name.clone(),
            });
        }
    }
    None
}

/// Score every record, omitting non-matches from the resulting map.
#[must_use]
pub fn generate_first_match_map<'a, I>(
    records: I,
    search_text: &str,
    priority_fields: &[&str],
) -> MatchMap
where
    I: IntoIterator<Item = &'a ConversationRecord>,
{
    let mut map = MatchMap::new();
    for record in records {
        if let Some(result) = find_first_match(record, search_text, priority_fields) {
            map.insert(record.id.clone(), result);
        }
    }
    map
}

/// What a search pass hands back to the caller.
#[derive(Debug)]
pub struct SearchOutcome<'a> {
    /// Records to display, still in input order; sort with a context chain.
    pub results: Vec<&'a ConversationRecord>,
    /// Id-keyed match data for ranking and highlighting.
    pub matches: MatchMap,
}

/// Top-level search entry point.
///
/// - Empty `search_text`: every record passes through, empty map.
/// - With `condition`: records are restricted first, the map is built over
///   the restricted set, and the restricted set is returned unfiltered
///   (rank-only mode).
/// - Without `condition`: only records present in the map are returned
///   (filter mode).
#[must_use]
pub fn search_and_populate_matches<'a>(
    records: &'a [ConversationRecord],
    search_text: &str,
    priority_fields: &[&str],
    condition: Option<&dyn Fn(&ConversationRecord) -> bool>,
) -> SearchOutcome<'a> {
    if search_text.is_empty() {
        return SearchOutcome {
            results: records.iter().collect(),
            matches: MatchMap::new(),
        };
    }

    let restricted: Vec<&ConversationRecord> = match condition {
        Some(keep) => records.iter().filter(|record| keep(record)).collect(),
        None => records.iter().collect(),
    };

    let matches =
        generate_first_match_map(restricted.iter().copied(), search_text, priority_fields);

    debug!(
        target: "roster::search",
        scanned = restricted.len(),
        matched = matches.len(),
        "first-match scan complete"
    );

    let results = if condition.is_some() {
        restricted
    } else {
        restricted
            .into_iter()
            .filter(|record| matches.contains_key(&record.id))
            .collect()
    };

    SearchOutcome { results, matches }
}

/// Builder over [`search_and_populate_matches`].
///
/// # Example
///
/// ```
/// use roster_order::{ConversationRecord, ConversationSearch};
///
/// let records = vec![
///     ConversationRecord::new("1").with_name("Alice"),
///     ConversationRecord::new("2").with_name("Bob"),
/// ];
/// let outcome = ConversationSearch::new("bo").run(&records);
/// assert_eq!(outcome.results[0].id, "2");
/// ```
pub struct ConversationSearch<'s> {
    text: &'s str,
    fields: &'s [&'s str],
    condition: Option<Box<dyn Fn(&ConversationRecord) -> bool + 's>>,
}

impl<'s> ConversationSearch<'s> {
    /// Start a search over the default priority fields.
    #[must_use]
    pub fn new(text: &'s str) -> Self {
        Self {
            text,
            fields: &SEARCHED_FIELDS,
            condition: None,
        }
    }

    /// Replace the priority-field list.
    #[must_use]
    pub fn with_fields(mut self, fields: &'s [&'s str]) -> Self {
        self.fields = fields;
        self
    }

    /// Restrict the searched set, switching the search to rank-only mode.
    #[must_use]
    pub fn with_condition(
        mut self,
        condition: impl Fn(&ConversationRecord) -> bool + 's,
    ) -> Self {
        self.condition = Some(Box::new(condition));
        self
    }

    /// Run the search over a record slice.
    #[must_use]
    pub fn run<'a>(&self, records: &'a [ConversationRecord]) -> SearchOutcome<'a> {
        search_and_populate_matches(records, self.text, self.fields, self.condition.as_deref())
    }
}

impl std::fmt::Debug for ConversationSearch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSearch")
            .field("text", &self.text)
            .field("fields", &self.fields)
            .field("condition", &self.condition.is_some())
            .finish()
    }
}
