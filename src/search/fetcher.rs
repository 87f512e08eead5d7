//! HTTP fetcher for thread pages
//!
//! This module handles all HTTP requests for the searcher, including:
//! - Building an HTTP client carrying the session cookie
//! - Constructing per-page `showthread.php` URLs
//! - Classifying failures (404 is "page absent", everything else is fatal)

use crate::config::SessionAuth;
use crate::{Result, SearchError};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Result of fetching one page
///
/// A 404 is a normal outcome here, not an error: the thread may have shrunk
/// between resolving the page count and fetching, and callers treat an
/// absent page as simply contributing nothing.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The raw HTML of the page
    Page(String),

    /// The remote reported the page does not exist
    NotFound,
}

/// Fetches thread pages over an authenticated session
///
/// Owns the HTTP connection pool; the session credential is fixed at
/// construction and immutable for the run.
pub struct PageFetcher {
    client: Client,
    base_url: Url,
}

impl PageFetcher {
    /// Builds a fetcher for the given forum base URL and session
    ///
    /// # Arguments
    ///
    /// * `base_url` - Root of the forum, e.g. `https://forums.somethingawful.com/`
    /// * `session` - The cookie pair for a logged-in session
    pub fn new(base_url: &str, session: &SessionAuth) -> Result<Self> {
        let base_url = Url::parse(base_url)?;

        let cookie = HeaderValue::from_str(&session.cookie_header()).map_err(|_| {
            crate::ConfigError::Validation(
                "session cookie is not a valid header value".to_string(),
            )
        })?;
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|source| SearchError::Http {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self { client, base_url })
    }

    /// Builds the URL for one page of a thread
    fn page_url(&self, thread_id: u64, page_number: u32) -> Result<Url> {
        let mut url = self.base_url.join("showthread.php")?;
        url.query_pairs_mut()
            .append_pair("threadid", &thread_id.to_string())
            .append_pair("pagenumber", &page_number.to_string());
        Ok(url)
    }

    /// Fetches one page of a thread
    ///
    /// Makes exactly one outbound request, no retries. HTTP 404 maps to
    /// [`FetchOutcome::NotFound`]; any other non-success status or network
    /// failure is returned as an error.
    pub async fn fetch_page(&self, thread_id: u64, page_number: u32) -> Result<FetchOutcome> {
        let url = self.page_url(thread_id, page_number)?;
        tracing::debug!("Fetching page {} of thread {}", page_number, thread_id);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| SearchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Page {} of thread {} not found", page_number, thread_id);
            return Ok(FetchOutcome::NotFound);
        }

        if !status.is_success() {
            return Err(SearchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| SearchError::Http {
            url: url.to_string(),
            source,
        })?;

        Ok(FetchOutcome::Page(body))
    }
}
