#![no_main]

//! Every context chain must be a total, antisymmetric, reflexive
//! comparator for arbitrary record pairs — a panicking or inconsistent
//! comparator would poison the host's stable sort.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use roster_order::context::{
    contact_list_compare, mention_compare, new_group_compare, recent_list_compare,
    remove_members_compare,
};
use roster_order::{
    ConversationKind, ConversationRecord, LastMessage, MatchMap, MatchResult, MessageStatus,
};

#[derive(Arbitrary, Debug)]
struct RawRecord {
    id: String,
    name: Option<String>,
    group: bool,
    archived: bool,
    alive: Option<bool>,
    active_at: Option<i64>,
    last_text: Option<String>,
    timestamp: i64,
    match_rank: Option<(u8, u8)>,
}

fn build(raw: RawRecord) -> ConversationRecord {
    let mut record = ConversationRecord::new(raw.id).archived(raw.archived);
    record.name = raw.name;
    if raw.group {
        record.kind = ConversationKind::Group;
    }
    record.is_alive_group = raw.alive;
    record.active_at = raw.active_at;
    if let Some(text) = raw.last_text {
        record = record.with_last_message(LastMessage::new(text, MessageStatus::Sent), raw.timestamp);
    }
    if let Some((value, position)) = raw.match_rank {
        record = record.with_first_match(MatchResult::new(
            "name",
            usize::from(value),
            usize::from(position),
        ));
    }
    record
}

fuzz_target!(|input: (RawRecord, RawRecord, Vec<String>, Vec<(String, u8, u8)>)| {
    let (raw_a, raw_b, active, matches) = input;
    let a = build(raw_a);
    let b = build(raw_b);

    let map: MatchMap = matches
        .into_iter()
        .map(|(id, value, position)| {
            (
                id,
                MatchResult::new("name", usize::from(value), usize::from(position)),
            )
        })
        .collect();

    let chains = [
        recent_list_compare(),
        new_group_compare(),
        contact_list_compare(),
        remove_members_compare(Some(&active)),
        mention_compare(&map),
    ];

    for chain in &chains {
        assert_eq!(chain.compare(&a, &b), chain.compare(&b, &a).reverse());
        assert_eq!(chain.compare(&a, &a), std::cmp::Ordering::Equal);
        assert_eq!(chain.compare(&b, &b), std::cmp::Ordering::Equal);
    }
});
