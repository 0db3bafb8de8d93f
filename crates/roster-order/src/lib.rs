#![forbid(unsafe_code)]

//! Ordering and match-scoring engine for conversation rosters.
//!
//! A messaging client shows the same set of conversations in several UI
//! contexts (recent list, new-group picker, contact picker, forward
//! picker, @-mention picker, ...), each with its own ordering and its own
//! behavior while the user types a search string. This crate provides:
//!
//! - [`search`]: a first-match scorer that maps each record to the
//!   highest-priority field containing the search string, plus the
//!   top-level search entry point with filter and rank-only modes
//! - [`predicate`]: independent two-record ordering predicates, one per
//!   dimension (archived state, group liveness, recency, match score, ...)
//! - [`chain`]: priority-chain composition — the first predicate with an
//!   opinion wins
//! - [`context`]: the pre-assembled comparator chain for each UI context
//! - [`collate`]: the injected locale-collation seam behind the terminal
//!   name/id tie-break
//!
//! Every operation is a pure, stateless pass over a caller-supplied
//! record slice: no pagination, no record mutation, no persistent index.
//!
//! # Example
//!
//! ```
//! use roster_order::{ConversationRecord, ConversationSearch, context};
//!
//! let records = vec![
//!     ConversationRecord::new("2").with_name("Bob"),
//!     ConversationRecord::new("1").with_name("Alice"),
//! ];
//!
//! // Searching filters to matching records and reports where they matched.
//! let outcome = ConversationSearch::new("ali").run(&records);
//! assert_eq!(outcome.results.len(), 1);
//! assert_eq!(outcome.results[0].id, "1");
//! assert_eq!(outcome.matches["1"].position, 0);
//!
//! // Each UI context gets its own comparator chain.
//! let mut sorted = records.clone();
//! context::new_group_compare().sort(&mut sorted);
//! assert_eq!(sorted[0].id, "1");
//! ```

pub mod chain;
pub mod collate;
pub mod context;
pub mod predicate;
pub mod search;

pub use chain::{OrderChain, compare_conversation};
pub use collate::{Collate, LexicalCollator};
pub use roster_core::{
    ConversationKind, ConversationRecord, LastMessage, MatchMap, MatchResult, MessageStatus,
};
pub use search::{
    ConversationSearch, SEARCHED_FIELDS, SearchOutcome, find_first_match,
    generate_first_match_map, search_and_populate_matches,
};
