//! One-shot repository feed.
//!
//! The feed enriches the page with live repository metadata exactly once per
//! lifetime: `Loading -> Populated | Empty`, terminal either way. Every
//! failure is absorbed into the `Empty` state — the display surface only
//! ever sees a (possibly empty) list.

use super::model::RepositoryRecord;
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Source of repository listings.
///
/// Implementations fetch one page of the account's repositories, most
/// recently updated first. The account id, sort key, and page size are
/// fixed configuration of the source, not per-call parameters.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetches the configured page of recently updated repositories.
    async fn fetch_recent(&self) -> Result<Vec<RepositoryRecord>>;
}

/// State machine of the feed. Terminal once settled; no re-fetch, no
/// polling, no cache invalidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// `load` has not resolved yet.
    Loading,
    /// The fetch succeeded with at least one non-fork record.
    Populated(Vec<RepositoryRecord>),
    /// The fetch failed, returned nothing, or returned only forks.
    Empty,
}

/// One-shot enrichment of the page with live repository metadata.
pub struct RepositoryFeed<S> {
    source: S,
    state: RwLock<FeedState>,
}

impl<S: RepositorySource> RepositoryFeed<S> {
    /// Creates a feed in the `Loading` state.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(FeedState::Loading),
        }
    }

    /// Returns a snapshot of the feed state.
    pub async fn state(&self) -> FeedState {
        self.state.read().await.clone()
    }

    /// Loads the feed, settling it on first resolution.
    ///
    /// The first call fetches from the source, drops forked repositories
    /// preserving source order, and settles the state machine. Any failure
    /// settles to `Empty` and yields an empty list — never an error.
    /// Subsequent calls return the settled result without re-fetching.
    pub async fn load(&self) -> Vec<RepositoryRecord> {
        {
            let state = self.state.read().await;
            match &*state {
                FeedState::Populated(records) => return records.clone(),
                FeedState::Empty => return Vec::new(),
                FeedState::Loading => {}
            }
        }

        let records = match self.source.fetch_recent().await {
            Ok(records) => {
                let kept: Vec<_> =
                    records.into_iter().filter(|r| !r.is_fork).collect();
                tracing::debug!(count = kept.len(), "repository feed loaded");
                kept
            }
            Err(err) => {
                tracing::warn!(error = %err, "repository feed unavailable");
                Vec::new()
            }
        };

        let mut state = self.state.write().await;
        // A concurrent load may have settled first; the settled result wins.
        if let FeedState::Loading = &*state {
            *state = if records.is_empty() {
                FeedState::Empty
            } else {
                FeedState::Populated(records.clone())
            };
            records
        } else {
            match &*state {
                FeedState::Populated(records) => records.clone(),
                _ => Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn record(id: u64, name: &str, is_fork: bool) -> RepositoryRecord {
        RepositoryRecord {
            id,
            name: name.to_string(),
            description: None,
            url: format!("https://github.com/dshah-labs/{name}"),
            star_count: 0,
            primary_language: None,
            updated_at: "2025-01-01T00:00:00Z".to_string(),
            is_fork,
        }
    }

    /// Source returning a fixed listing, counting fetches.
    struct FixedSource {
        records: Vec<RepositoryRecord>,
        fetches: AtomicUsize,
    }

    impl FixedSource {
        fn new(records: Vec<RepositoryRecord>) -> Self {
            Self {
                records,
                fetches: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RepositorySource for FixedSource {
        async fn fetch_recent(&self) -> Result<Vec<RepositoryRecord>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }
    }

    /// Source that always fails.
    struct FailingSource;

    #[async_trait]
    impl RepositorySource for FailingSource {
        async fn fetch_recent(&self) -> Result<Vec<RepositoryRecord>> {
            Err(FolioError::request("connection refused", true))
        }
    }

    #[tokio::test]
    async fn test_forks_are_filtered_in_source_order() {
        let feed = RepositoryFeed::new(FixedSource::new(vec![
            record(1, "alpha", false),
            record(2, "forked-tool", true),
            record(3, "beta", false),
            record(4, "another-fork", true),
            record(5, "gamma", false),
        ]));

        let records = feed.load().await;
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
        assert_eq!(feed.state().await, FeedState::Populated(records));
    }

    #[tokio::test]
    async fn test_failure_settles_empty() {
        let feed = RepositoryFeed::new(FailingSource);
        assert_eq!(feed.state().await, FeedState::Loading);

        let records = feed.load().await;
        assert!(records.is_empty());
        assert_eq!(feed.state().await, FeedState::Empty);
    }

    #[tokio::test]
    async fn test_all_forks_settles_empty() {
        let feed = RepositoryFeed::new(FixedSource::new(vec![
            record(1, "fork-a", true),
            record(2, "fork-b", true),
        ]));

        assert!(feed.load().await.is_empty());
        assert_eq!(feed.state().await, FeedState::Empty);
    }

    #[tokio::test]
    async fn test_settled_feed_does_not_refetch() {
        let source = FixedSource::new(vec![record(1, "alpha", false)]);
        let feed = RepositoryFeed::new(source);

        let first = feed.load().await;
        let second = feed.load().await;
        assert_eq!(first, second);
        assert_eq!(feed.source.fetches.load(Ordering::SeqCst), 1);
    }
}
