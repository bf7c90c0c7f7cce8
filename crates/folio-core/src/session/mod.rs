//! Session domain module.
//!
//! This module contains the chat transcript model and the session state
//! machine that serializes completion requests.
//!
//! # Module Structure
//!
//! - `message`: Transcript turn types (`Author`, `ChatTurn`)
//! - `model`: Session state machine (`ConversationSession`, `SubmitOutcome`)
//! - `provider`: Completion seam (`CompletionProvider`)

mod message;
mod model;
mod provider;

// Re-export public API
pub use message::{Author, ChatTurn};
pub use model::{BLANK_REPLY_STAND_IN, ConversationSession, SubmitOutcome};
pub use provider::CompletionProvider;
