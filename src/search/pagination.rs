//! Page-count resolution
//!
//! A thread's length is discovered from the pagination controls on its first
//! page. The last control's label carries the highest page number, usually
//! dressed up with arrows or a "Page" prefix, so everything that is not a
//! digit is stripped before parsing. A thread with no controls has exactly
//! one page.

use crate::search::extractor::extract_page_controls;
use crate::search::fetcher::{FetchOutcome, PageFetcher};
use crate::{Result, SearchError};

/// Resolves the total page count of a thread
///
/// Fetches page 1 and inspects its pagination controls. Failure here is
/// fatal to the whole search: without a page count there is no schedulable
/// work, and a 404 on page 1 means the thread itself does not exist.
pub async fn resolve_page_count(fetcher: &PageFetcher, thread_id: u64) -> Result<u32> {
    match fetcher.fetch_page(thread_id, 1).await? {
        FetchOutcome::NotFound => Err(SearchError::ThreadNotFound { thread_id }),
        FetchOutcome::Page(body) => page_count_from_html(&body),
    }
}

/// Determines the page count from a first page's markup
pub fn page_count_from_html(html: &str) -> Result<u32> {
    let controls = extract_page_controls(html);
    match controls.last() {
        None => Ok(1),
        Some(label) => parse_control_label(label),
    }
}

/// Parses a pagination control label such as `"Page 42"` or `"» 42"`
fn parse_control_label(label: &str) -> Result<u32> {
    let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return Err(SearchError::Pagination(format!(
            "pagination control '{}' contains no digits",
            label.trim()
        )));
    }

    let count: u32 = digits.parse().map_err(|_| {
        SearchError::Pagination(format!("pagination control '{}' out of range", label.trim()))
    })?;

    if count < 1 {
        return Err(SearchError::Pagination(format!(
            "resolved page count {} is not a valid thread length",
            count
        )));
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number_label() {
        assert_eq!(parse_control_label("42").unwrap(), 42);
    }

    #[test]
    fn test_page_prefix_stripped() {
        assert_eq!(parse_control_label("Page 42").unwrap(), 42);
    }

    #[test]
    fn test_arrow_prefix_stripped() {
        assert_eq!(parse_control_label("\u{bb} 12").unwrap(), 12);
    }

    #[test]
    fn test_label_without_digits_is_fatal() {
        assert!(matches!(
            parse_control_label("next"),
            Err(SearchError::Pagination(_))
        ));
    }

    #[test]
    fn test_zero_page_count_is_fatal() {
        assert!(matches!(
            parse_control_label("0"),
            Err(SearchError::Pagination(_))
        ));
    }

    #[test]
    fn test_no_controls_means_one_page() {
        let html = r#"<html><body><div class="postbody">only page</div></body></html>"#;
        assert_eq!(page_count_from_html(html).unwrap(), 1);
    }

    #[test]
    fn test_last_control_wins() {
        let html = r#"
            <html><body>
                <div class="pages bottom">
                    <a>1</a>
                    <a>2</a>
                    <a>3</a>
                    <a>Page 57</a>
                </div>
            </body></html>
        "#;
        assert_eq!(page_count_from_html(html).unwrap(), 57);
    }
}
