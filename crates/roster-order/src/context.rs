#![forbid(unsafe_code)]

//! Pre-assembled comparator chains, one per UI context.
//!
//! Every chain terminates in the name/id tie-break, so orderings are
//! deterministic down to the folded display key. The searching variants
//! splice a match-aware predicate near the front; they close over a
//! [`MatchMap`] scoped to one search pass, so build a fresh chain per
//! sort call rather than caching one.

use roster_core::MatchMap;

use crate::chain::OrderChain;
use crate::predicate::{
    active_index_map, first_match_order, matched_results_map_order, name_and_id_order,
    order_active_at, order_alive_group, order_archived, order_by_active_index_map,
    order_last_message_time,
};
use crate::search::SEARCHED_FIELDS;

/// Recent conversation list: dead groups last, archived below that, then
/// message recency, embedded match, activity, name.
#[must_use]
pub fn recent_list_compare() -> OrderChain<'static> {
    OrderChain::new()
        .with(order_alive_group)
        .with(order_archived)
        .with(order_last_message_time)
        .with(first_match_order(&SEARCHED_FIELDS))
        .with(order_active_at)
        .with(name_and_id_order)
}

/// New-group member picker.
#[must_use]
pub fn new_group_compare() -> OrderChain<'static> {
    recency_then_name()
}

/// New-group member picker while searching.
#[must_use]
pub fn new_group_searching_compare(map: &MatchMap) -> OrderChain<'_> {
    recency_then_match_then_name(map)
}

/// Engage-members picker.
#[must_use]
pub fn engage_members_compare() -> OrderChain<'static> {
    recency_then_name()
}

/// Engage-members picker while searching.
#[must_use]
pub fn engage_members_searching_compare(map: &MatchMap) -> OrderChain<'_> {
    recency_then_match_then_name(map)
}

/// Forward-message target picker.
#[must_use]
pub fn forward_message_compare() -> OrderChain<'static> {
    recency_then_name()
}

/// Forward-message target picker while searching.
#[must_use]
pub fn forward_message_searching_compare(map: &MatchMap) -> OrderChain<'_> {
    recency_then_match_then_name(map)
}

/// Chat-folder owner picker.
#[must_use]
pub fn folder_owner_compare() -> OrderChain<'static> {
    recency_then_name()
}

/// Chat-folder owner picker while searching.
#[must_use]
pub fn folder_owner_searching_compare(map: &MatchMap) -> OrderChain<'_> {
    recency_then_match_then_name(map)
}

/// Contact list: embedded match, then activity, then name.
#[must_use]
pub fn contact_list_compare() -> OrderChain<'static> {
    OrderChain::new()
        .with(first_match_order(&SEARCHED_FIELDS))
        .with(order_active_at)
        .with(name_and_id_order)
}

/// @-mention picker: match rank with message recency as its tie-break,
/// then name. No recency-first ordering here.
#[must_use]
pub fn mention_compare(map: &MatchMap) -> OrderChain<'_> {
    OrderChain::new()
        .with(matched_results_map_order(
            map,
            Some(Box::new(order_last_message_time)),
        ))
        .with(name_and_id_order)
}

/// Remove-group-members picker: archived last, currently-active members
/// sunk below the rest (the supplied list is reversed so its later
/// entries carry the lower index), then embedded match, activity, name.
///
/// Without an active-member list this degrades to archived-only ordering.
#[must_use]
pub fn remove_members_compare(active_ids: Option<&[String]>) -> OrderChain<'static> {
    let Some(ids) = active_ids else {
        return OrderChain::new().with(order_archived);
    };
    OrderChain::new()
        .with(order_archived)
        .with(order_by_active_index_map(active_index_map(ids)))
        .with(first_match_order(&SEARCHED_FIELDS))
        .with(order_active_at)
        .with(name_and_id_order)
}

fn recency_then_name() -> OrderChain<'static> {
    OrderChain::new()
        .with(order_last_message_time)
        .with(order_active_at)
        .with(name_and_id_order)
}

fn recency_then_match_then_name(map: &MatchMap) -> OrderChain<'_> {
    OrderChain::new()
        .with(order_last_message_time)
        .with(matched_results_map_order(
            map,
            Some(Box::new(order_last_message_time)),
        ))
        .with(order_active_at)
        .with(name_and_id_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{
        ConversationKind, ConversationRecord, LastMessage, MatchResult, MessageStatus,
    };

    fn record(id: &str) -> ConversationRecord {
        ConversationRecord::new(id)
    }

    fn with_message(id: &str, timestamp: i64) -> ConversationRecord {
        record(id).with_last_message(LastMessage::new("hi", MessageStatus::Sent), timestamp)
    }

    fn ids(records: &[ConversationRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    // ── Recent list ─────────────────────────────────────────────────

    #[test]
    fn recent_list_sinks_dead_groups_and_archived() {
        let mut records = vec![
            record("dead")
                .with_kind(ConversationKind::Group)
                .with_alive_group(false)
                .with_last_message(LastMessage::new("x", MessageStatus::Sent), 500),
            record("archived").archived(true).with_active_at(900),
            with_message("busy", 100),
            record("quiet"),
        ];
        recent_list_compare().sort(&mut records);
        assert_eq!(ids(&records), ["busy", "quiet", "archived", "dead"]);
    }

    #[test]
    fn recent_list_prefers_embedded_match_over_activity() {
        let mut records = vec![
            record("active").with_active_at(9_000),
            record("matched")
                .with_first_match(MatchResult::new("name", 1, 0)),
        ];
        recent_list_compare().sort(&mut records);
        assert_eq!(ids(&records), ["matched", "active"]);
    }

    // ── Picker chains ───────────────────────────────────────────────

    #[test]
    fn picker_orders_by_recency_then_activity_then_name() {
        let mut records = vec![
            record("carol"),
            record("bob").with_active_at(10),
            with_message("dave", 50),
        ];
        new_group_compare().sort(&mut records);
        assert_eq!(ids(&records), ["dave", "bob", "carol"]);
    }

    #[test]
    fn searching_picker_ranks_matches_within_messaged_records() {
        // Both have message text, so recency decides first; among equal
        // recency the match map decides.
        let mut records = vec![
            with_message("late", 100),
            with_message("early", 100),
        ];
        let map: MatchMap = [("early".to_owned(), MatchResult::new("name", 1, 0))]
            .into_iter()
            .collect();
        new_group_searching_compare(&map).sort(&mut records);
        assert_eq!(ids(&records), ["early", "late"]);
    }

    #[test]
    fn searching_picker_keeps_unmatched_records_trailing() {
        let mut records = vec![record("miss"), record("hit")];
        let map: MatchMap = [("hit".to_owned(), MatchResult::new("name", 1, 0))]
            .into_iter()
            .collect();
        forward_message_searching_compare(&map).sort(&mut records);
        assert_eq!(ids(&records), ["hit", "miss"]);
    }

    // ── Mention picker ──────────────────────────────────────────────

    #[test]
    fn mention_ignores_recency_outside_match_ties() {
        // "quiet" matches; "busy" has a recent message but no match.
        let mut records = vec![with_message("busy", 1_000), record("quiet")];
        let map: MatchMap = [("quiet".to_owned(), MatchResult::new("name", 1, 0))]
            .into_iter()
            .collect();
        mention_compare(&map).sort(&mut records);
        assert_eq!(ids(&records), ["quiet", "busy"]);
    }

    // ── Remove-members picker ───────────────────────────────────────

    #[test]
    fn remove_members_sinks_active_members() {
        let active = vec!["m1".to_owned(), "m2".to_owned()];
        let mut records = vec![record("m1"), record("m2"), record("outsider")];
        remove_members_compare(Some(&active)).sort(&mut records);
        // Outsiders float; within the active list, later entries of the
        // supplied list come first.
        assert_eq!(ids(&records), ["outsider", "m2", "m1"]);
    }

    #[test]
    fn remove_members_without_list_orders_by_archived_only() {
        let mut records = vec![record("z").archived(true), record("a")];
        let chain = remove_members_compare(None);
        assert_eq!(chain.len(), 1);
        chain.sort(&mut records);
        assert_eq!(ids(&records), ["a", "z"]);
    }

    // ── Factory hygiene ─────────────────────────────────────────────

    #[test]
    fn every_context_chain_ends_in_a_total_tie_break() {
        // Distinct names must produce a decided order in every context.
        let alice = record("1").with_name("alice");
        let bob = record("2").with_name("bob");
        let map = MatchMap::new();
        // `OrderChain` is invariant in its lifetime (its `SmallVec` storage
        // is), so the `'static` chains and the `map`-borrowing chains cannot
        // share one array. Assert each through a higher-ranked helper whose
        // elided lifetime is resolved per call.
        fn assert_first_less(
            chain: &OrderChain<'_>,
            alice: &ConversationRecord,
            bob: &ConversationRecord,
        ) {
            assert_eq!(chain.compare(alice, bob), std::cmp::Ordering::Less);
        }
        assert_first_less(&recent_list_compare(), &alice, &bob);
        assert_first_less(&new_group_compare(), &alice, &bob);
        assert_first_less(&engage_members_compare(), &alice, &bob);
        assert_first_less(&forward_message_compare(), &alice, &bob);
        assert_first_less(&folder_owner_compare(), &alice, &bob);
        assert_first_less(&contact_list_compare(), &alice, &bob);
        assert_first_less(&new_group_searching_compare(&map), &alice, &bob);
        assert_first_less(&engage_members_searching_compare(&map), &alice, &bob);
        assert_first_less(&forward_message_searching_compare(&map), &alice, &bob);
        assert_first_less(&folder_owner_searching_compare(&map), &alice, &bob);
        assert_first_less(&mention_compare(&map), &alice, &bob);
    }
}
