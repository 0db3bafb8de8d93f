//! Property tests for the comparator chains: idempotence, stability,
//! antisymmetry, and reflexivity over generated rosters.

use std::cmp::Ordering;

use proptest::prelude::*;

use roster_order::context::{
    contact_list_compare, mention_compare, new_group_compare, new_group_searching_compare,
    recent_list_compare,
};
use roster_order::{
    ConversationKind, ConversationRecord, LastMessage, MessageStatus, SEARCHED_FIELDS,
    compare_conversation, generate_first_match_map,
};

fn arb_record() -> impl Strategy<Value = ConversationRecord> {
    (
        "[a-z0-9]{1,6}",
        proptest::option::of("[a-zA-Z ]{0,10}"),
        any::<bool>(),
        proptest::option::of(any::<bool>()),
        any::<bool>(),
        proptest::option::of(-100i64..100i64),
        proptest::option::of("[a-z]{0,4}"),
        -50i64..50i64,
    )
        .prop_map(
            |(id, name, group, alive, archived, active_at, text, timestamp)| {
                let mut record = ConversationRecord::new(id).archived(archived);
                if group {
                    record.kind = ConversationKind::Group;
                }
                record.name = name;
                record.is_alive_group = alive;
                record.active_at = active_at;
                if let Some(text) = text {
                    record = record
                        .with_last_message(LastMessage::new(text, MessageStatus::Sent), timestamp);
                }
                record
            },
        )
}

proptest! {
    #[test]
    fn recent_sort_is_idempotent(mut records in proptest::collection::vec(arb_record(), 0..24)) {
        let chain = recent_list_compare();
        chain.sort(&mut records);
        let once = records.clone();
        chain.sort(&mut records);
        prop_assert_eq!(&once, &records);
    }

    #[test]
    fn static_chains_are_antisymmetric_and_reflexive(a in arb_record(), b in arb_record()) {
        for chain in [recent_list_compare(), new_group_compare(), contact_list_compare()] {
            prop_assert_eq!(chain.compare(&a, &b), chain.compare(&b, &a).reverse());
            prop_assert_eq!(chain.compare(&a, &a), Ordering::Equal);
            prop_assert_eq!(chain.compare(&b, &b), Ordering::Equal);
        }
    }

    #[test]
    fn searching_chains_are_antisymmetric(records in proptest::collection::vec(arb_record(), 2..12)) {
        let map = generate_first_match_map(&records, "a", &SEARCHED_FIELDS);
        for chain in [new_group_searching_compare(&map), mention_compare(&map)] {
            for left in &records {
                for right in &records {
                    prop_assert_eq!(chain.compare(left, right), chain.compare(right, left).reverse());
                }
            }
        }
    }

    #[test]
    fn empty_chain_defers_entirely(a in arb_record(), b in arb_record()) {
        prop_assert_eq!(compare_conversation(Vec::new()).compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn full_ties_keep_input_order(count in 2usize..8) {
        let mut records: Vec<ConversationRecord> = (0..count)
            .map(|i| ConversationRecord::new(format!("r{i}")).with_name("same"))
            .collect();
        recent_list_compare().sort(&mut records);
        let ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
        let expected: Vec<String> = (0..count).map(|i| format!("r{i}")).collect();
        prop_assert_eq!(ids, expected);
    }
}
