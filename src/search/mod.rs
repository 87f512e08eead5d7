//! Search pipeline for thread pages
//!
//! This module contains the core search logic, including:
//! - Authenticated page fetching
//! - Post and pagination-control extraction
//! - Page-count resolution
//! - Pattern matching with excerpt windows
//! - Bounded-concurrency coordination across all pages

mod coordinator;
mod extractor;
mod fetcher;
mod matcher;
mod pagination;
mod report;

pub use coordinator::{run_search, search_pages, PageHit};
pub use extractor::{extract_page_controls, extract_posts};
pub use fetcher::{FetchOutcome, PageFetcher};
pub use matcher::PatternMatcher;
pub use pagination::{page_count_from_html, resolve_page_count};
pub use report::SearchReport;
