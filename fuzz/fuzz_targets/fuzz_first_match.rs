#![no_main]

//! The scorer must never panic on arbitrary search text or field values,
//! and a reported match must actually occur at the reported character
//! offset of the case-folded value.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use roster_order::{ConversationRecord, SEARCHED_FIELDS, find_first_match};

#[derive(Arbitrary, Debug)]
struct Input {
    id: String,
    name: Option<String>,
    signature: Option<String>,
    email: Option<String>,
    extra: Vec<(String, String)>,
    search_text: String,
}

fuzz_target!(|input: Input| {
    let mut record = ConversationRecord::new(input.id);
    record.name = input.name;
    record.signature = input.signature;
    record.email = input.email;
    for (field, value) in input.extra {
        record.extra.insert(field, value);
    }

    let Some(found) = find_first_match(&record, &input.search_text, &SEARCHED_FIELDS) else {
        return;
    };

    assert!(!input.search_text.is_empty());
    assert!(found.value >= 1 && found.value <= SEARCHED_FIELDS.len());

    let value = record
        .search_field(&found.field)
        .expect("matched field must resolve");
    let folded: String = value.to_lowercase();
    let needle = input.search_text.to_lowercase();
    let tail: String = folded.chars().skip(found.position).collect();
    assert!(tail.starts_with(&needle));
});
