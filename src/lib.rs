//! Threadgrep: search every page of a paginated forum thread
//!
//! This crate implements a concurrent thread searcher: it resolves how many
//! pages a thread has, fetches each page with a bounded worker pool, extracts
//! the post bodies, and reports every page containing a pattern match along
//! with a short excerpt of surrounding text.

pub mod config;
pub mod search;

use thiserror::Error;

/// Main error type for threadgrep operations
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Request failed for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Server returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Thread {thread_id} not found (first page returned 404)")]
    ThreadNotFound { thread_id: u64 },

    #[error("Could not determine page count: {0}")]
    Pagination(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for threadgrep operations
pub type Result<T> = std::result::Result<T, SearchError>;

// Re-export commonly used types
pub use config::{SearchOptions, SessionAuth};
pub use search::{PageFetcher, PageHit, PatternMatcher, SearchReport};
