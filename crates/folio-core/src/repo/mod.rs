//! Repository feed domain module.
//!
//! - `model`: Repository record (`RepositoryRecord`)
//! - `feed`: One-shot feed state machine (`RepositoryFeed`, `FeedState`) and
//!   the listing seam (`RepositorySource`)

mod feed;
mod model;

// Re-export public API
pub use feed::{FeedState, RepositoryFeed, RepositorySource};
pub use model::RepositoryRecord;
