//! Absorbing completion client.
//!
//! `CompletionClient` is the boundary where the error taxonomy ends: the
//! fallible backend call is isolated behind it, and every failure is folded
//! into a fixed apology string. Callers cannot distinguish an absorbed
//! failure from a degenerate success, by design.

use crate::persona::COMPLETION_FALLBACK;
use async_trait::async_trait;
use folio_core::error::Result;
use folio_core::session::CompletionProvider;

/// Fallible single-shot completion backend.
///
/// One remote attempt per call: no retry, no backoff. Retryability metadata
/// on the error is informational only.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Requests completion text for the given user utterance.
    async fn execute(&self, utterance: &str) -> Result<String>;
}

/// Total completion adapter over a fallible backend.
///
/// Implements the session's [`CompletionProvider`] seam: `complete` always
/// resolves. Failures are logged at warn level and surfaced to the caller
/// only as [`COMPLETION_FALLBACK`].
pub struct CompletionClient<B> {
    backend: B,
}

impl<B: CompletionBackend> CompletionClient<B> {
    /// Wraps a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl<B: CompletionBackend> CompletionProvider for CompletionClient<B> {
    async fn complete(&self, utterance: &str) -> String {
        match self.backend.execute(utterance).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    retryable = err.is_retryable(),
                    "completion unavailable, replying with fallback"
                );
                COMPLETION_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::FolioError;

    struct OkBackend;

    #[async_trait]
    impl CompletionBackend for OkBackend {
        async fn execute(&self, utterance: &str) -> Result<String> {
            Ok(format!("echo: {utterance}"))
        }
    }

    struct FailingBackend(FolioError);

    #[async_trait]
    impl CompletionBackend for FailingBackend {
        async fn execute(&self, _utterance: &str) -> Result<String> {
            Err(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_success_passes_text_through_verbatim() {
        let client = CompletionClient::new(OkBackend);
        assert_eq!(client.complete("hi").await, "echo: hi");
    }

    #[tokio::test]
    async fn test_every_failure_kind_resolves_with_fallback() {
        let errors = vec![
            FolioError::config("GEMINI_API_KEY is not set"),
            FolioError::request("connection reset", true),
            FolioError::request_with_status(500, "internal error", true),
            FolioError::parse("unexpected body"),
        ];

        for err in errors {
            let client = CompletionClient::new(FailingBackend(err));
            assert_eq!(client.complete("hi").await, COMPLETION_FALLBACK);
        }
    }
}
