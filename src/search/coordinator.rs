//! Search coordination across all pages of a thread
//!
//! The coordinator turns a resolved page count into exactly one task per
//! page, runs those tasks with a bounded number of in-flight fetches, and
//! yields hits as their pages complete. Completion order is unspecified;
//! consumers that need deterministic output collect the stream into a
//! [`SearchReport`](crate::search::report::SearchReport), which sorts by
//! page number.
//!
//! Failure policy, deliberately asymmetric:
//! - a 404 or a page with no posts yields nothing and the search continues
//! - any other fetch failure ends the whole search; dropping the stream
//!   cancels whatever is still in flight

use crate::search::extractor::extract_posts;
use crate::search::fetcher::{FetchOutcome, PageFetcher};
use crate::search::matcher::PatternMatcher;
use crate::search::pagination::resolve_page_count;
use crate::search::report::SearchReport;
use crate::Result;
use futures::stream::{self, Stream, StreamExt};
use std::sync::Arc;

/// One matching page: its number and the excerpt around the first match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHit {
    /// 1-indexed page number within the thread
    pub page_number: u32,

    /// Trimmed text surrounding the first match on that page
    pub excerpt: String,
}

/// Streams hits for every matching page of a thread
///
/// Schedules one task per page in `1..=page_count`, at most `max_workers`
/// in flight at once. Items arrive in completion order. An `Err` item is
/// terminal: the consumer should stop and drop the stream.
pub fn search_pages(
    fetcher: Arc<PageFetcher>,
    matcher: Arc<PatternMatcher>,
    thread_id: u64,
    page_count: u32,
    max_workers: usize,
) -> impl Stream<Item = Result<PageHit>> {
    let tasks = (1..=page_count).map(move |page_number| {
        let fetcher = Arc::clone(&fetcher);
        let matcher = Arc::clone(&matcher);
        async move { scan_page(&fetcher, &matcher, thread_id, page_number).await }
    });

    stream::iter(tasks)
        .buffer_unordered(max_workers)
        .filter_map(|outcome| async move {
            match outcome {
                Ok(Some(hit)) => Some(Ok(hit)),
                Ok(None) => None,
                Err(e) => Some(Err(e)),
            }
        })
}

/// Fetches and scans a single page, producing at most one hit
///
/// The first matching post in document order wins; later posts on the same
/// page are not scanned. An absent page or one with no posts is a normal
/// empty result.
async fn scan_page(
    fetcher: &PageFetcher,
    matcher: &PatternMatcher,
    thread_id: u64,
    page_number: u32,
) -> Result<Option<PageHit>> {
    let body = match fetcher.fetch_page(thread_id, page_number).await? {
        FetchOutcome::NotFound => return Ok(None),
        FetchOutcome::Page(body) => body,
    };

    let posts = extract_posts(&body);
    tracing::debug!("Page {}: {} post(s)", page_number, posts.len());

    for post in &posts {
        if let Some(excerpt) = matcher.excerpt(post) {
            return Ok(Some(PageHit {
                page_number,
                excerpt,
            }));
        }
    }

    Ok(None)
}

/// Runs a complete search and collects the page-ordered report
///
/// Convenience wrapper over [`search_pages`] for callers that do not need
/// per-hit streaming. Resolves the page count first; failure there, or any
/// transport failure while scanning, aborts with no partial report.
pub async fn run_search(
    fetcher: Arc<PageFetcher>,
    matcher: Arc<PatternMatcher>,
    thread_id: u64,
    max_workers: usize,
) -> Result<SearchReport> {
    let page_count = resolve_page_count(&fetcher, thread_id).await?;
    tracing::info!("Thread {} has {} page(s)", thread_id, page_count);

    let mut report = SearchReport::new();
    let hits = search_pages(fetcher, matcher, thread_id, page_count, max_workers);
    tokio::pin!(hits);

    while let Some(hit) = hits.next().await {
        report.record(hit?);
    }

    Ok(report)
}
