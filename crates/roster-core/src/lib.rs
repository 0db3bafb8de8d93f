#![forbid(unsafe_code)]

//! Record model for the roster conversation-list engine.
//!
//! This crate holds the shared data types consumed by `roster-order`: the
//! [`ConversationRecord`] being ordered and filtered, and the ephemeral
//! [`MatchResult`] side-table entries produced by the search scorer.
//!
//! The types here are plain data. All ordering and scoring logic lives in
//! `roster-order`.

pub mod matched;
pub mod record;

pub use matched::{MatchMap, MatchResult};
pub use record::{ConversationKind, ConversationRecord, LastMessage, MessageStatus};
