//! Folio adapter layer.
//!
//! Remote-service adapters behind the seams `folio-core` defines: the Gemini
//! completion backend with its absorbing client wrapper, the GitHub
//! repository source, and environment configuration.

pub mod client;
pub mod config;
pub mod gemini;
pub mod github;
pub mod persona;

pub use client::{CompletionBackend, CompletionClient};
pub use config::GeminiConfig;
pub use gemini::GeminiClient;
pub use github::GithubSource;
pub use persona::{COMPLETION_FALLBACK, GREETING, PERSONA_CONTEXT};
