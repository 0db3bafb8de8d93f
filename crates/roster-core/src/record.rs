#![forbid(unsafe_code)]

//! Conversation records: the unit ordered and filtered by the engine.
//!
//! A [`ConversationRecord`] carries the fields the ordering predicates
//! consult (archived state, group liveness, last-message recency, activity
//! timestamp, display name) plus the string fields the match scorer
//! searches. Everything else a messaging client attaches to a conversation
//! rides along in [`extra`](ConversationRecord::extra) and is never
//! interpreted here.
//!
//! # Invariants
//!
//! - `id` is unique within any one collection handed to the engine; every
//!   id-keyed side table assumes it.
//! - Records are read-only for the duration of a sort or search call.
//! - Absent optional fields mean "no information" and flow through
//!   default-fallback branches (empty string, zero, false) rather than
//!   being signaled as errors.

use ahash::AHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::matched::MatchResult;

/// Kind of conversation a record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConversationKind {
    /// One-to-one conversation.
    #[default]
    Direct,
    /// Multi-member group conversation.
    Group,
}

/// Delivery status of a conversation's last message.
///
/// Opaque to ordering; carried as payload for the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MessageStatus {
    /// Delivery failed.
    Error,
    /// In flight.
    Sending,
    /// Accepted by the server.
    Sent,
    /// Delivered to the peer.
    Delivered,
    /// Read by the peer.
    Read,
}

/// Last message preview attached to a conversation.
///
/// A non-empty `text` marks the record as having a displayable last
/// message, which several predicates rank ahead of records without one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LastMessage {
    /// Preview text; empty means "nothing to display".
    pub text: String,
    /// Delivery status of that message.
    pub status: MessageStatus,
}

impl LastMessage {
    /// Create a last-message preview.
    #[must_use]
    pub fn new(text: impl Into<String>, status: MessageStatus) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }
}

/// A single conversation entry as the surrounding application supplies it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversationRecord {
    /// Unique identifier, stable for the lifetime of the record.
    pub id: String,
    /// Display name; lexical ordering falls back to `id` when absent.
    pub name: Option<String>,
    /// Direct or group conversation.
    pub kind: ConversationKind,
    /// Archived conversations sink below unarchived ones.
    pub is_archived: bool,
    /// Whether a group is still alive; meaningful only for groups.
    pub is_alive_group: Option<bool>,
    /// Recency timestamp, higher = more recently active.
    pub active_at: Option<i64>,
    /// Last message preview, if any.
    pub last_message: Option<LastMessage>,
    /// Time of the last message; consulted only when both sides of a
    /// comparison carry last-message text.
    pub timestamp: i64,
    /// Personal signature line.
    pub signature: Option<String>,
    /// Account email address.
    pub email: Option<String>,
    /// Job title or group subject.
    pub title: Option<String>,
    /// Profile name, when distinct from the display name.
    pub profile_name: Option<String>,
    /// Protected configuration blob searched as plain text.
    pub protected_configs: Option<String>,
    /// Pre-attached match data for contexts that score records before
    /// sorting; read by the embedded-match predicate.
    pub first_match: Option<MatchResult>,
    /// Arbitrary additional string fields, searchable by name.
    pub extra: AHashMap<String, String>,
}

impl ConversationRecord {
    /// Create a record with the given id and every optional field absent.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind: ConversationKind::Direct,
            is_archived: false,
            is_alive_group: None,
            active_at: None,
            last_message: None,
            timestamp: 0,
            signature: None,
            email: None,
            title: None,
            profile_name: None,
            protected_configs: None,
            first_match: None,
            extra: AHashMap::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the conversation kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ConversationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the archived flag.
    #[must_use]
    pub fn archived(mut self, archived: bool) -> Self {
        self.is_archived = archived;
        self
    }

    /// Set the group-liveness flag.
    #[must_use]
    pub fn with_alive_group(mut self, alive: bool) -> Self {
        self.is_alive_group = Some(alive);
        self
    }

    /// Set the activity timestamp.
    #[must_use]
    pub fn with_active_at(mut self, active_at: i64) -> Self {
        self.active_at = Some(active_at);
        self
    }

    /// Attach a last-message preview and its timestamp.
    #[must_use]
    pub fn with_last_message(mut self, message: LastMessage, timestamp: i64) -> Self {
        self.last_message = Some(message);
        self.timestamp = timestamp;
        self
    }

    /// Set an additional searchable field by name.
    #[must_use]
    pub fn with_search_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(field.into(), value.into());
        self
    }

    /// Pre-attach match data for the embedded-match predicate.
    #[must_use]
    pub fn with_first_match(mut self, first_match: MatchResult) -> Self {
        self.first_match = Some(first_match);
        self
    }

    /// Display name for lexical ordering: `name`, falling back to `id`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Whether the record carries a displayable (non-empty) last message.
    #[must_use]
    pub fn has_last_message_text(&self) -> bool {
        self.last_message.as_ref().is_some_and(|m| !m.text.is_empty())
    }

    /// Resolve a priority-field name to its string value.
    ///
    /// Built-in fields are checked first, then [`extra`](Self::extra).
    /// Empty values count as absent, so the scorer skips them.
    #[must_use]
    pub fn search_field(&self, field: &str) -> Option<&str> {
        let value = match field {
            "name" => self.name.as_deref(),
            "signature" => self.signature.as_deref(),
            "email" => self.email.as_deref(),
            "id" => Some(self.id.as_str()),
            "title" => self.title.as_deref(),
            "profile_name" => self.profile_name.as_deref(),
            "protected_configs" => self.protected_configs.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        };
        value.filter(|v| !v.is_empty())
    }
}
