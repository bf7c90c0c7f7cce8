//! Folio core domain layer.
//!
//! Holds the chat transcript model and session state machine, the
//! repository-feed state machine, and the trait seams the remote-service
//! adapters in `folio-interaction` plug into. Nothing in this crate touches
//! the network.

pub mod error;
pub mod repo;
pub mod session;

// Re-export common error type
pub use error::FolioError;
