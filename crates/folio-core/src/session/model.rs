//! Conversation session domain model.
//!
//! This module contains the `ConversationSession` entity that owns the chat
//! transcript and serializes request submission.

use super::message::{Author, ChatTurn};
use super::provider::CompletionProvider;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Assistant text used when the provider resolves with a blank reply.
pub const BLANK_REPLY_STAND_IN: &str = "I'm not sure about that.";

/// Outcome of a `submit` call.
///
/// A rejected submission is a no-op, not an error: the transcript and the
/// pending gate are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission was accepted and both turns were appended.
    Accepted,
    /// The submission was dropped (blank input, or a request in flight).
    Ignored,
}

/// Owns the chat transcript and the pending-request gate.
///
/// A session is created seeded with one assistant greeting turn. The
/// transcript grows monotonically: turns are appended, never mutated or
/// reordered. At most one completion request is outstanding at a time;
/// submissions attempted while one is in flight are silently dropped (no
/// queueing, no cancellation).
///
/// There is no cross-process persistence: dropping the session is the end
/// of its transcript.
pub struct ConversationSession {
    /// Unique session identifier (UUID format)
    id: String,
    /// Greeting the transcript is (re)seeded with
    greeting: String,
    /// Append-only transcript
    turns: RwLock<Vec<ChatTurn>>,
    /// Submission gate: true while a completion request is in flight
    pending: AtomicBool,
}

impl ConversationSession {
    /// Creates a session seeded with the given assistant greeting.
    pub fn new(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        let seed = vec![ChatTurn::now(Author::Assistant, greeting.clone())];
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            greeting,
            turns: RwLock::new(seed),
            pending: AtomicBool::new(false),
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns true while a completion request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Returns a snapshot of the transcript in display order.
    pub async fn transcript(&self) -> Vec<ChatTurn> {
        self.turns.read().await.clone()
    }

    /// Returns the number of turns in the transcript.
    pub async fn len(&self) -> usize {
        self.turns.read().await.len()
    }

    /// Returns true if the transcript holds only the seeded greeting.
    pub async fn is_empty(&self) -> bool {
        self.turns.read().await.len() <= 1
    }

    /// Submits a visitor utterance and appends the assistant's reply.
    ///
    /// The input is trimmed first; blank input is dropped. If a request is
    /// already in flight the call is dropped as well, leaving the transcript
    /// untouched. Otherwise the trimmed text is appended as a user turn, the
    /// provider is awaited, and its reply (or [`BLANK_REPLY_STAND_IN`] when
    /// the reply is blank) is appended as an assistant turn.
    ///
    /// The provider is total, so an accepted submission always completes:
    /// the gate is released and the assistant turn appended even when the
    /// underlying remote call failed.
    pub async fn submit(
        &self,
        input: &str,
        provider: &dyn CompletionProvider,
    ) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        // Single-flight gate: the losing submit is dropped, not queued.
        if self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return SubmitOutcome::Ignored;
        }

        self.push_turn(Author::User, text).await;

        let reply = provider.complete(text).await;
        let reply = if reply.trim().is_empty() {
            BLANK_REPLY_STAND_IN.to_string()
        } else {
            reply
        };

        self.push_turn(Author::Assistant, &reply).await;
        self.pending.store(false, Ordering::Release);

        SubmitOutcome::Accepted
    }

    /// Restores the initial state: seeded greeting only, gate open.
    ///
    /// This is the unmount/remount lifecycle — there is nothing to persist.
    pub async fn reset(&self) {
        let mut turns = self.turns.write().await;
        turns.clear();
        turns.push(ChatTurn::now(Author::Assistant, self.greeting.clone()));
        self.pending.store(false, Ordering::Release);
    }

    async fn push_turn(&self, author: Author, text: &str) {
        self.turns.write().await.push(ChatTurn::now(author, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Notify;

    const GREETING: &str = "Hi! Ask me anything.";

    /// Provider that echoes a canned reply immediately.
    struct CannedProvider {
        reply: String,
    }

    impl CannedProvider {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        async fn complete(&self, _utterance: &str) -> String {
            self.reply.clone()
        }
    }

    /// Provider that blocks until released, to hold the gate closed.
    struct BlockingProvider {
        release: Notify,
    }

    impl BlockingProvider {
        fn new() -> Self {
            Self {
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for BlockingProvider {
        async fn complete(&self, _utterance: &str) -> String {
            self.release.notified().await;
            "done".to_string()
        }
    }

    #[tokio::test]
    async fn test_seeded_greeting() {
        let session = ConversationSession::new(GREETING);

        let turns = session.transcript().await;
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].author, Author::Assistant);
        assert_eq!(turns[0].text, GREETING);
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_submit_appends_user_and_assistant_turns() {
        let session = ConversationSession::new(GREETING);
        let provider = CannedProvider::new("Python, AWS, LLMs.");

        let outcome = session.submit("What's her stack?", &provider).await;

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert!(!session.is_pending());

        let turns = session.transcript().await;
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].author, Author::User);
        assert_eq!(turns[1].text, "What's her stack?");
        assert_eq!(turns[2].author, Author::Assistant);
        assert_eq!(turns[2].text, "Python, AWS, LLMs.");
    }

    #[tokio::test]
    async fn test_blank_input_is_dropped() {
        let session = ConversationSession::new(GREETING);
        let provider = CannedProvider::new("unused");

        assert_eq!(session.submit("", &provider).await, SubmitOutcome::Ignored);
        assert_eq!(
            session.submit("   \n\t ", &provider).await,
            SubmitOutcome::Ignored
        );
        assert_eq!(session.len().await, 1);
    }

    #[tokio::test]
    async fn test_input_is_trimmed() {
        let session = ConversationSession::new(GREETING);
        let provider = CannedProvider::new("reply");

        session.submit("  hello  ", &provider).await;

        let turns = session.transcript().await;
        assert_eq!(turns[1].text, "hello");
    }

    #[tokio::test]
    async fn test_blank_reply_substitutes_stand_in() {
        let session = ConversationSession::new(GREETING);
        let provider = CannedProvider::new("   ");

        session.submit("anything", &provider).await;

        let turns = session.transcript().await;
        assert_eq!(turns[2].text, BLANK_REPLY_STAND_IN);
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_submissions_while_pending_are_no_ops() {
        let session = Arc::new(ConversationSession::new(GREETING));
        let provider = Arc::new(BlockingProvider::new());

        let first = {
            let session = Arc::clone(&session);
            let provider = Arc::clone(&provider);
            tokio::spawn(async move { session.submit("first", provider.as_ref()).await })
        };

        // Let the first submission claim the gate.
        while !session.is_pending() {
            tokio::task::yield_now().await;
        }

        let echo = CannedProvider::new("unused");
        assert_eq!(
            session.submit("second", &echo).await,
            SubmitOutcome::Ignored
        );
        assert_eq!(
            session.submit("third", &echo).await,
            SubmitOutcome::Ignored
        );
        // Only the greeting and the first user turn so far.
        assert_eq!(session.len().await, 2);

        provider.release.notify_one();
        assert_eq!(first.await.unwrap(), SubmitOutcome::Accepted);

        // Gate reopens after resolution and further submissions land.
        assert!(!session.is_pending());
        assert_eq!(
            session.submit("fourth", &echo).await,
            SubmitOutcome::Accepted
        );
        assert_eq!(session.len().await, 5);
    }

    #[tokio::test]
    async fn test_transcript_is_append_only() {
        let session = ConversationSession::new(GREETING);
        let provider = CannedProvider::new("ack");

        let mut seen = session.transcript().await;
        for i in 0..4 {
            session.submit(&format!("message {i}"), &provider).await;

            let now = session.transcript().await;
            // Two turns per accepted submission, prior turns untouched.
            assert_eq!(now.len(), seen.len() + 2);
            assert_eq!(&now[..seen.len()], &seen[..]);
            seen = now;
        }
        assert_eq!(seen.len(), 1 + 2 * 4);
    }

    #[tokio::test]
    async fn test_reset_restores_initial_state() {
        let session = ConversationSession::new(GREETING);
        let provider = CannedProvider::new("ack");

        session.submit("hello", &provider).await;
        assert_eq!(session.len().await, 3);

        session.reset().await;

        let turns = session.transcript().await;
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].text, GREETING);
        assert!(!session.is_pending());

        // The session stays usable after a reset.
        assert_eq!(
            session.submit("again", &provider).await,
            SubmitOutcome::Accepted
        );
    }
}
