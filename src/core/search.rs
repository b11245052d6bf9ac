//! Title and tag search over the catalog.
//!
//! Flagged videos never appear in results. Results are sorted by title,
//! ties broken by id.

use crate::domain::Video;
use crate::library::{sort_by_title, VideoCatalog};

/// Read-only search over a catalog
#[derive(Debug, Clone, Copy)]
pub struct SearchService<'a> {
    catalog: &'a VideoCatalog,
}

impl<'a> SearchService<'a> {
    pub fn new(catalog: &'a VideoCatalog) -> Self {
        Self { catalog }
    }

    /// Case-insensitive substring match against titles
    pub fn by_title_substring(&self, term: &str) -> Vec<&'a Video> {
        let term_lower = term.to_lowercase();
        self.filtered(|video| video.title().to_lowercase().contains(&term_lower))
    }

    /// Case-insensitive exact match against any tag
    pub fn by_tag(&self, tag: &str) -> Vec<&'a Video> {
        self.filtered(|video| video.has_tag(tag))
    }

    fn filtered(&self, predicate: impl Fn(&Video) -> bool) -> Vec<&'a Video> {
        let mut results: Vec<&'a Video> = self
            .catalog
            .list()
            .into_iter()
            .filter(|video| !video.is_flagged() && predicate(*video))
            .collect();
        sort_by_title(&mut results);
        results
    }
}
