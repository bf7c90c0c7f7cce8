//! Completion provider seam.

use async_trait::async_trait;

/// The completion seam the session depends on.
///
/// A provider is total from the session's point of view: `complete` always
/// resolves with reply text, never with an error. Remote-call failures are
/// folded into a fixed apology string before they reach this trait (see
/// `folio-interaction`'s `CompletionClient`).
///
/// Each call is context-free: implementations receive only the latest user
/// utterance, never prior transcript turns.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Produces reply text for the given user utterance.
    async fn complete(&self, utterance: &str) -> String;
}
