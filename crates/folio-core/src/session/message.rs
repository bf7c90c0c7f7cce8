//! Chat transcript types.
//!
//! This module contains types for representing turns in the chat
//! transcript, including authorship and turn content.

use serde::{Deserialize, Serialize};

/// Represents the author of a turn in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    /// Turn typed by the visitor.
    User,
    /// Turn produced by the assistant.
    Assistant,
}

/// A single turn in the chat transcript.
///
/// Each turn has an author (user or assistant), text content, and a
/// timestamp indicating when it was appended. Turns are immutable once
/// created; the transcript is append-only and insertion order is display
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who authored this turn.
    pub author: Author,
    /// The text of the turn.
    pub text: String,
    /// Timestamp when the turn was appended (RFC 3339 format).
    pub timestamp: String,
}

impl ChatTurn {
    /// Creates a turn stamped with the current time.
    pub fn now(author: Author, text: impl Into<String>) -> Self {
        Self {
            author,
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
