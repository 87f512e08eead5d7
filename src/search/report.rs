//! Page-ordered search results
//!
//! Hits arrive in whatever order their pages finish; the report keys them
//! by page number so the final output is deterministic regardless of how
//! the run was scheduled.

use crate::search::coordinator::PageHit;
use std::collections::BTreeMap;

/// The final result of a search: one excerpt per matching page
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchReport {
    hits: BTreeMap<u32, String>,
}

impl SearchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a hit under its page number
    pub fn record(&mut self, hit: PageHit) {
        self.hits.insert(hit.page_number, hit.excerpt);
    }

    /// Matching page numbers in ascending order
    pub fn pages(&self) -> Vec<u32> {
        self.hits.keys().copied().collect()
    }

    /// Excerpt recorded for a page, if it matched
    pub fn excerpt(&self, page_number: u32) -> Option<&str> {
        self.hits.get(&page_number).map(String::as_str)
    }

    /// Iterates hits in ascending page order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.hits.iter().map(|(page, excerpt)| (*page, excerpt.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Renders the one-line summary shown at the end of a run
    pub fn summary_line(&self) -> String {
        if self.hits.is_empty() {
            return "No matching pages".to_string();
        }

        let pages: Vec<String> = self.hits.keys().map(u32::to_string).collect();
        format!("Matched on pages: {}", pages.join(", "))
    }
}
