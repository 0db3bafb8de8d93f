#![forbid(unsafe_code)]

//! Ordering predicates: one comparison dimension each.
//!
//! Every predicate is a pure total function over two records returning
//! [`Ordering`]: `Less` puts the left record first, `Greater` the right,
//! and `Equal` means "no opinion — defer to the next predicate in the
//! chain". Predicates never panic; absent optional fields flow through
//! fallback defaults (false, zero, empty) instead.
//!
//! Stateless predicates are plain functions. The factory predicates close
//! over a caller-supplied [`MatchMap`] or active-index map and are scoped
//! to a single sort operation — build a fresh one per call.

use std::cmp::Ordering;

use ahash::AHashMap;

use roster_core::{ConversationKind, ConversationRecord, MatchMap};

use crate::collate::{Collate, DEFAULT_COLLATOR, display_sort_key};

/// A boxed ordering predicate, as stored in a chain or passed as a
/// fallback tie-break.
pub type OrderPredicate<'m> =
    Box<dyn Fn(&ConversationRecord, &ConversationRecord) -> Ordering + 'm>;

/// Unarchived conversations sort before archived ones.
#[must_use]
pub fn order_archived(left: &ConversationRecord, right: &ConversationRecord) -> Ordering {
    match (left.is_archived, right.is_archived) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// A group that is no longer alive sorts last.
///
/// Only discriminates when exactly one side is a non-alive group; direct
/// conversations and alive groups are mutually indifferent.
#[must_use]
pub fn order_alive_group(left: &ConversationRecord, right: &ConversationRecord) -> Ordering {
    let left_dead = is_dead_group(left);
    let right_dead = is_dead_group(right);
    match (left_dead, right_dead) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn is_dead_group(record: &ConversationRecord) -> bool {
    record.kind == ConversationKind::Group && !record.is_alive_group.unwrap_or(false)
}

/// Records with a displayable last message sort first; among two that have
/// one, the more recent `timestamp` wins. Indifferent when neither has
/// last-message text.
#[must_use]
pub fn order_last_message_time(left: &ConversationRecord, right: &ConversationRecord) -> Ordering {
    let left_has = left.has_last_message_text();
    let right_has = right.has_last_message_text();
    if left_has != right_has {
        return if right_has {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if left_has && right_has {
        return right.timestamp.cmp(&left.timestamp);
    }
    Ordering::Equal
}

/// More recently active sorts first, with absent `active_at` treated as 0.
///
/// The zero substitution means a record with no recorded activity outranks
/// one whose real timestamp is negative and loses to any positive one;
/// indifferent only when both sides fold to zero.
#[must_use]
pub fn order_active_at(left: &ConversationRecord, right: &ConversationRecord) -> Ordering {
    let left_at = left.active_at.unwrap_or(0);
    let right_at = right.active_at.unwrap_or(0);
    if left_at != 0 || right_at != 0 {
        return right_at.cmp(&left_at);
    }
    Ordering::Equal
}

/// Case-insensitive, whitespace-trimmed lexical order of the display name
/// (name falling back to id), ascending. Terminal tie-break of every
/// composite chain, using the shared default collator.
#[must_use]
pub fn name_and_id_order(left: &ConversationRecord, right: &ConversationRecord) -> Ordering {
    DEFAULT_COLLATOR.compare(&display_sort_key(left), &display_sort_key(right))
}

/// [`name_and_id_order`] with a host-injected collator.
#[must_use]
pub fn name_and_id_order_with<'c>(
    collator: &'c dyn Collate,
) -> impl Fn(&ConversationRecord, &ConversationRecord) -> Ordering + 'c {
    move |left: &ConversationRecord, right: &ConversationRecord| {
        collator.compare(&display_sort_key(left), &display_sort_key(right))
    }
}

/// Records present in the match map outrank absent ones; between two
/// present records a lower priority rank wins, then a lower character
/// offset, then the `fallback` predicate if supplied.
#[must_use]
pub fn matched_results_map_order<'m>(
    map: &'m MatchMap,
    fallback: Option<OrderPredicate<'m>>,
) -> impl Fn(&ConversationRecord, &ConversationRecord) -> Ordering + 'm {
    move |left: &ConversationRecord, right: &ConversationRecord| match (
        map.get(&left.id),
        map.get(&right.id),
    ) {
        (Some(left_match), Some(right_match)) => {
            if left_match.value != right_match.value {
                return left_match.value.cmp(&right_match.value);
            }
            if left_match.position != right_match.position {
                return left_match.position.cmp(&right_match.position);
            }
            match fallback.as_ref() {
                Some(order) => order(left, right),
                None => Ordering::Equal,
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Like [`matched_results_map_order`], but reads the match embedded on the
/// record itself (`first_match`) rather than a side table.
///
/// The matched field's rank is recomputed from `fields` so embedded
/// matches scored against a different priority list still order
/// correctly; a field not in the list keeps its stored rank.
#[must_use]
pub fn first_match_order<'f>(
    fields: &'f [&'f str],
) -> impl Fn(&ConversationRecord, &ConversationRecord) -> Ordering + 'f {
    move |left: &ConversationRecord, right: &ConversationRecord| {
        let rank = |record: &ConversationRecord| {
            record.first_match.as_ref().map(|found| {
                let value = fields
                    .iter()
                    .position(|field| *field == found.field)
                    .map_or(found.value, |index| index + 1);
                (value, found.position)
            })
        };
        match (rank(left), rank(right)) {
            (Some(left_key), Some(right_key)) => left_key.cmp(&right_key),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Build the id→index map consumed by [`order_by_active_index_map`] from a
/// caller-supplied active-member list, reversed so earlier entries of the
/// reversed list rank higher.
#[must_use]
pub fn active_index_map<S: AsRef<str>>(ids: &[S]) -> AHashMap<String, usize> {
    ids.iter()
        .rev()
        .enumerate()
        .map(|(index, id)| (id.as_ref().to_owned(), index))
        .collect()
}

/// Records absent from the index sort before present ones, sinking
/// already-active members to the bottom; between two present records the
/// lower mapped index wins.
#[must_use]
pub fn order_by_active_index_map(
    index: AHashMap<String, usize>,
) -> impl Fn(&ConversationRecord, &ConversationRecord) -> Ordering {
    move |left: &ConversationRecord, right: &ConversationRecord| match (
        index.get(&left.id),
        index.get(&right.id),
    ) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left_index), Some(right_index)) => left_index.cmp(right_index),
    }
}
