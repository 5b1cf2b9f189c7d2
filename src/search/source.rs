//! SearchSource: Capability Seam for Result Fetching
//!
//! The feed never performs I/O itself. Whatever actually talks to the
//! backend (the JS host over the wasm boundary, a test stub, a native
//! client) implements this trait and hands pages to the feed.

use super::types::{Cursor, SearchError, SearchPage};

/// Source of paginated search results
///
/// `cursor` is `None` for the first page of a query and the previous
/// page's `next_cursor` afterwards. Implementations surface failures as
/// `SearchError`; the feed keeps prior results intact on failure.
pub trait SearchSource {
    fn fetch(&mut self, query: &str, cursor: Option<&Cursor>) -> Result<SearchPage, SearchError>;
}

/// In-memory source serving pre-built pages in order; the standard test
/// double for feed logic
#[derive(Debug, Default)]
pub struct StaticSource {
    pages: Vec<SearchPage>,
    served: usize,
    pub fetch_count: usize,
}

impl StaticSource {
    pub fn new(pages: Vec<SearchPage>) -> Self {
        Self {
            pages,
            served: 0,
            fetch_count: 0,
        }
    }
}

impl SearchSource for StaticSource {
    fn fetch(&mut self, _query: &str, _cursor: Option<&Cursor>) -> Result<SearchPage, SearchError> {
        self.fetch_count += 1;
        match self.pages.get(self.served) {
            Some(page) => {
                self.served += 1;
                Ok(page.clone())
            }
            None => Err(SearchError::new("no more pages")),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
