//! Repository record domain model.

use serde::{Deserialize, Serialize};

/// A public repository as listed by the source-hosting API.
///
/// Deserialized verbatim from the GitHub repository-list wire format; the
/// `rename` attributes map the wire field names onto the domain names used
/// throughout the workspace. Records are read-only after fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Unique repository identifier
    pub id: u64,
    /// Repository name
    pub name: String,
    /// Short description, if the owner set one
    #[serde(default)]
    pub description: Option<String>,
    /// Browser URL of the repository
    #[serde(rename = "html_url")]
    pub url: String,
    /// Star count
    #[serde(rename = "stargazers_count", default)]
    pub star_count: u64,
    /// Primary language, if detected
    #[serde(rename = "language", default)]
    pub primary_language: Option<String>,
    /// Last update timestamp (RFC 3339 format)
    pub updated_at: String,
    /// Whether this repository is a fork of another
    #[serde(rename = "fork", default)]
    pub is_fork: bool,
}
