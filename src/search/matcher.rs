//! Pattern matching and excerpt extraction
//!
//! The pattern is compiled once per run, case-insensitively, and applied to
//! each post's full text. Only the first match in a post matters; the
//! excerpt is the matched text plus a fixed number of characters of context
//! on each side, clamped to the post's bounds and trimmed of surrounding
//! whitespace.

use regex::{Regex, RegexBuilder};

/// A compiled search pattern with its excerpt context width
#[derive(Debug)]
pub struct PatternMatcher {
    regex: Regex,
    context_chars: usize,
}

impl PatternMatcher {
    /// Compiles a pattern, rejecting invalid syntax before any network work
    ///
    /// Matching is case-insensitive and unanchored; plain substrings and
    /// full regular expressions both work.
    pub fn new(pattern: &str, context_chars: usize) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            regex,
            context_chars,
        })
    }

    /// Returns the excerpt around the first match in a post, if any
    ///
    /// The context window is measured in characters, never bytes, so it is
    /// safe on multi-byte text. A zero-width match still yields a valid
    /// window centered on the match position.
    pub fn excerpt(&self, post: &str) -> Option<String> {
        let found = self.regex.find(post)?;

        let start = widen_left(post, found.start(), self.context_chars);
        let end = widen_right(post, found.end(), self.context_chars);

        Some(post[start..end].trim().to_string())
    }
}

/// Moves a byte index left by up to `chars` characters, stopping at the start
fn widen_left(text: &str, mut index: usize, chars: usize) -> usize {
    for _ in 0..chars {
        match text[..index].char_indices().next_back() {
            Some((previous, _)) => index = previous,
            None => break,
        }
    }
    index
}

/// Moves a byte index right by up to `chars` characters, stopping at the end
fn widen_right(text: &str, mut index: usize, chars: usize) -> usize {
    for _ in 0..chars {
        match text[index..].chars().next() {
            Some(c) => index += c.len_utf8(),
            None => break,
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_window_both_sides() {
        let matcher = PatternMatcher::new("foo", 2).unwrap();
        assert_eq!(matcher.excerpt("xxxfooyyy").unwrap(), "xxfooyy");
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = PatternMatcher::new("foo", 2).unwrap();
        assert_eq!(matcher.excerpt("xxxFOOyyy").unwrap(), "xxFOOyy");
    }

    #[test]
    fn test_no_match() {
        let matcher = PatternMatcher::new("foo", 2).unwrap();
        assert!(matcher.excerpt("nothing to see").is_none());
    }

    #[test]
    fn test_clipped_at_post_start() {
        let matcher = PatternMatcher::new("foo", 10).unwrap();
        assert_eq!(matcher.excerpt("fooyyy").unwrap(), "fooyyy");
    }

    #[test]
    fn test_clipped_at_post_end() {
        let matcher = PatternMatcher::new("foo", 10).unwrap();
        assert_eq!(matcher.excerpt("xxxfoo").unwrap(), "xxxfoo");
    }

    #[test]
    fn test_last_character_included() {
        // The window reaches all the way to the final character.
        let matcher = PatternMatcher::new("ba", 1).unwrap();
        assert_eq!(matcher.excerpt("abar").unwrap(), "abar");
    }

    #[test]
    fn test_first_match_wins() {
        let matcher = PatternMatcher::new("foo", 0).unwrap();
        assert_eq!(matcher.excerpt("a foo and another foo").unwrap(), "foo");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        // ctx 1 lands on the spaces around the word; they are trimmed away
        let matcher = PatternMatcher::new("foo", 1).unwrap();
        assert_eq!(matcher.excerpt("a foo b").unwrap(), "foo");
    }

    #[test]
    fn test_multibyte_context() {
        let matcher = PatternMatcher::new("foo", 2).unwrap();
        assert_eq!(matcher.excerpt("\u{e9}\u{e9}foo\u{e9}\u{e9}").unwrap(), "ééfooéé");
    }

    #[test]
    fn test_regex_pattern() {
        let matcher = PatternMatcher::new(r"fo+", 1).unwrap();
        assert_eq!(matcher.excerpt("xfoooy").unwrap(), "xfoooy");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(PatternMatcher::new("(unclosed", 10).is_err());
    }

    #[test]
    fn test_empty_match_yields_bounded_window() {
        // An empty pattern matches at position 0 with zero width; the window
        // derives only from the match bounds, so it stays finite.
        let matcher = PatternMatcher::new("", 2).unwrap();
        assert_eq!(matcher.excerpt("abcd").unwrap(), "ab");
    }

    #[test]
    fn test_zero_context() {
        let matcher = PatternMatcher::new("foo", 0).unwrap();
        assert_eq!(matcher.excerpt("xxxfooyyy").unwrap(), "foo");
    }
}
