//! GithubSource - repository listing from the GitHub REST API.
//!
//! One read-only request per feed lifetime:
//! `GET /users/{account}/repos?sort=updated&per_page=6`.

use async_trait::async_trait;
use folio_core::FolioError;
use folio_core::error::Result;
use folio_core::repo::{RepositoryRecord, RepositorySource};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const BASE_URL: &str = "https://api.github.com";

/// Account whose repositories enrich the page.
pub const ACCOUNT: &str = "dshah-labs";

/// Fixed page size requested from the listing endpoint.
pub const PAGE_SIZE: u8 = 6;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Repository source backed by the public GitHub API.
#[derive(Clone)]
pub struct GithubSource {
    client: Client,
    account: String,
    page_size: u8,
}

impl GithubSource {
    /// Creates a source for the portfolio account.
    pub fn new() -> Self {
        Self::for_account(ACCOUNT)
    }

    /// Creates a source for an arbitrary account.
    pub fn for_account(account: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            account: account.into(),
            page_size: PAGE_SIZE,
        }
    }
}

impl Default for GithubSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositorySource for GithubSource {
    async fn fetch_recent(&self) -> Result<Vec<RepositoryRecord>> {
        let url = format!(
            "{BASE_URL}/users/{account}/repos?sort=updated&per_page={page_size}",
            account = self.account,
            page_size = self.page_size,
        );

        tracing::debug!(%url, "fetching repository listing");

        let response = self
            .client
            .get(url)
            .header("User-Agent", format!("folio/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|err| {
                FolioError::request(
                    format!("GitHub API request failed: {err}"),
                    err.is_connect() || err.is_timeout(),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(FolioError::request_with_status(
                status.as_u16(),
                format!("GitHub API error: {status}"),
                status.is_server_error(),
            ));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| FolioError::parse(format!("Failed to parse GitHub response: {err}")))?;

        Ok(parse_records(payload))
    }
}

/// Parses a listing payload into repository records.
///
/// A non-array payload (GitHub returns an object for rate-limit and
/// not-found responses that slip through) is treated as an empty result,
/// not an error. Individual records that fail to deserialize are skipped.
fn parse_records(payload: Value) -> Vec<RepositoryRecord> {
    let Value::Array(items) = payload else {
        tracing::warn!("repository listing was not an array, treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed repository record");
                None
            }
        })
        .collect()
}
