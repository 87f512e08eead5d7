//! HTML extraction for thread pages
//!
//! Two things live in a page's markup that the searcher cares about:
//! - post bodies (`.postbody`), the text units the pattern is matched against
//! - pagination controls (`.pages.bottom a`), used to resolve the page count
//!
//! Both come back in document order. An empty result is valid; a malformed
//! or empty page simply contributes nothing.

use scraper::{Html, Selector};

const POST_BODY_SELECTOR: &str = ".postbody";
const PAGE_CONTROL_SELECTOR: &str = ".pages.bottom a";

/// Extracts the text of every post body on a page, in document order
pub fn extract_posts(html: &str) -> Vec<String> {
    select_text(html, POST_BODY_SELECTOR)
}

/// Extracts the labels of the bottom pagination controls, in document order
pub fn extract_page_controls(html: &str) -> Vec<String> {
    select_text(html, PAGE_CONTROL_SELECTOR)
}

/// Collects the text content of every element matching a selector
fn select_text(html: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse(selector) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_posts_in_document_order() {
        let html = r#"
            <html><body>
                <div class="postbody">first post</div>
                <div class="postbody">second post</div>
                <div class="postbody">third post</div>
            </body></html>
        "#;
        let posts = extract_posts(html);
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0], "first post");
        assert_eq!(posts[1], "second post");
        assert_eq!(posts[2], "third post");
    }

    #[test]
    fn test_extract_posts_joins_nested_text() {
        let html = r#"<div class="postbody">quoth <b>the</b> raven</div>"#;
        let posts = extract_posts(html);
        assert_eq!(posts, vec!["quoth the raven".to_string()]);
    }

    #[test]
    fn test_no_posts_is_empty_not_error() {
        let posts = extract_posts("<html><body><p>nothing here</p></body></html>");
        assert!(posts.is_empty());
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let posts = extract_posts("<div class=\"postbody\">unclosed");
        assert_eq!(posts, vec!["unclosed".to_string()]);
    }

    #[test]
    fn test_extract_page_controls() {
        let html = r#"
            <html><body>
                <div class="pages bottom">
                    <a href="?pagenumber=1">1</a>
                    <a href="?pagenumber=2">2</a>
                    <a href="?pagenumber=12">&#187; 12</a>
                </div>
            </body></html>
        "#;
        let controls = extract_page_controls(html);
        assert_eq!(controls.len(), 3);
        assert_eq!(controls[2], "\u{bb} 12");
    }

    #[test]
    fn test_page_controls_absent() {
        let html = r#"<html><body><div class="postbody">lonely page</div></body></html>"#;
        assert!(extract_page_controls(html).is_empty());
    }

    #[test]
    fn test_other_anchors_not_treated_as_controls() {
        let html = r#"
            <html><body>
                <a href="/profile">profile</a>
                <div class="pages bottom"><a>2</a></div>
            </body></html>
        "#;
        let controls = extract_page_controls(html);
        assert_eq!(controls, vec!["2".to_string()]);
    }
}
