//! ResultFeed: Cursor-Paginated Result Accumulation
//!
//! Client-side view of one query's result set: submit search, render the
//! first page, append further pages as the user asks for more. A single
//! in-flight flag refuses overlapping fetches for the same feed and is
//! cleared unconditionally on both the success and the failure path. A
//! failed fetch surfaces an error and leaves prior results intact. No
//! retries, no timeouts; the host owns transport policy.

use wasm_bindgen::prelude::*;

use crate::highlight::WordHighlighter;

use super::source::SearchSource;
use super::types::{Cursor, HighlightedHit, SearchError, SearchHit, SearchPage};

// =============================================================================
// ResultFeed
// =============================================================================

/// Accumulated, appendable result set for one query
#[wasm_bindgen]
pub struct ResultFeed {
    query: String,
    hits: Vec<SearchHit>,
    /// Ranked word list adopted from the first page that carries one
    words: Vec<String>,
    next_cursor: Option<Cursor>,
    in_flight: bool,
    pages_loaded: usize,
    last_error: Option<SearchError>,
}

impl ResultFeed {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            hits: Vec::new(),
            words: Vec::new(),
            next_cursor: None,
            in_flight: false,
            pages_loaded: 0,
            last_error: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    /// True before the first page and while the backend keeps returning a
    /// next cursor
    pub fn has_more(&self) -> bool {
        self.pages_loaded == 0 || self.next_cursor.is_some()
    }

    /// Claim the in-flight slot. Returns false when a fetch is already in
    /// flight or the result set is exhausted; the caller must then skip
    /// the fetch entirely.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight || !self.has_more() {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Apply a fetched page: append hits, adopt the ranked word list,
    /// advance the cursor. Clears the in-flight flag and any prior error.
    /// Returns the number of appended hits.
    pub fn complete(&mut self, page: SearchPage) -> usize {
        let appended = page.hits.len();
        self.hits.extend(page.hits);
        if self.words.is_empty() && !page.words.is_empty() {
            self.words = page.words;
        }
        self.next_cursor = page.next_cursor;
        self.pages_loaded += 1;
        self.last_error = None;
        self.in_flight = false;
        appended
    }

    /// Record a fetch failure. Prior hits and cursor are untouched; the
    /// in-flight flag is cleared so the user can try again.
    pub fn fail(&mut self, error: SearchError) {
        self.last_error = Some(error);
        self.in_flight = false;
    }

    /// Drive one fetch through a source: claim the slot, fetch the page at
    /// the current cursor, apply or record the outcome. Returns the number
    /// of appended hits; `Ok(0)` without touching the source when the
    /// result set is exhausted.
    pub fn fetch_next(&mut self, source: &mut dyn SearchSource) -> Result<usize, SearchError> {
        if self.in_flight {
            return Err(SearchError::new("a fetch is already in flight"));
        }
        if !self.has_more() {
            return Ok(0);
        }

        self.in_flight = true;
        let cursor = self.next_cursor.clone();

        // complete/fail both clear in_flight, so the flag is reset on
        // every path out of here
        match source.fetch(&self.query, cursor.as_ref()) {
            Ok(page) => Ok(self.complete(page)),
            Err(error) => {
                self.fail(error.clone());
                Err(error)
            }
        }
    }

    /// Start over with a new query, dropping all accumulated state
    pub fn reset(&mut self, query: &str) {
        *self = Self::new(query);
    }

    /// Render every accumulated hit through the highlighter built from the
    /// feed's word set
    pub fn highlighted_hits(&self) -> Result<Vec<HighlightedHit>, String> {
        let highlighter = WordHighlighter::new(&self.words)?;

        Ok(self
            .hits
            .iter()
            .map(|hit| HighlightedHit {
                id: hit.id.clone(),
                url: hit.url.clone(),
                title: highlighter.highlight(&hit.title),
                excerpt: highlighter.highlight(&hit.excerpt),
                score: hit.score,
            })
            .collect())
    }
}

// =============================================================================
// WASM API
// =============================================================================

#[wasm_bindgen]
impl ResultFeed {
    #[wasm_bindgen(constructor)]
    pub fn js_new(query: &str) -> ResultFeed {
        Self::new(query)
    }

    #[wasm_bindgen(js_name = query)]
    pub fn js_query(&self) -> String {
        self.query.clone()
    }

    #[wasm_bindgen(js_name = hitCount)]
    pub fn js_hit_count(&self) -> usize {
        self.len()
    }

    #[wasm_bindgen(js_name = inFlight)]
    pub fn js_in_flight(&self) -> bool {
        self.in_flight()
    }

    #[wasm_bindgen(js_name = hasMore)]
    pub fn js_has_more(&self) -> bool {
        self.has_more()
    }

    #[wasm_bindgen(js_name = pagesLoaded)]
    pub fn js_pages_loaded(&self) -> usize {
        self.pages_loaded()
    }

    /// Cursor token to send with the next request, if any
    #[wasm_bindgen(js_name = nextCursor)]
    pub fn js_next_cursor(&self) -> Option<String> {
        self.next_cursor.as_ref().map(|c| c.as_str().to_string())
    }

    /// Claim the in-flight slot before issuing a request
    #[wasm_bindgen(js_name = tryBegin)]
    pub fn js_try_begin(&mut self) -> bool {
        self.try_begin()
    }

    /// Apply a fetched page (`{ hits, words?, next_cursor? }`)
    #[wasm_bindgen(js_name = completePage)]
    pub fn js_complete_page(&mut self, page: JsValue) -> Result<usize, JsValue> {
        let page: SearchPage = serde_wasm_bindgen::from_value(page)?;
        let appended = self.complete(page);
        web_sys::console::log_1(
            &format!(
                "[ResultFeed] Appended {} hits ({} total)",
                appended,
                self.hits.len()
            )
            .into(),
        );
        Ok(appended)
    }

    /// Record a fetch failure with a human-readable message
    #[wasm_bindgen(js_name = failFetch)]
    pub fn js_fail_fetch(&mut self, message: String) {
        web_sys::console::log_1(&format!("[ResultFeed] Fetch failed: {}", message).into());
        self.fail(SearchError::new(message));
    }

    #[wasm_bindgen(js_name = lastError)]
    pub fn js_last_error(&self) -> Option<String> {
        self.last_error.as_ref().map(|e| e.message.clone())
    }

    /// Raw accumulated hits
    #[wasm_bindgen(js_name = hits)]
    pub fn js_hits(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.hits)?)
    }

    /// Accumulated hits with title/excerpt segmented for display
    #[wasm_bindgen(js_name = highlightedHits)]
    pub fn js_highlighted_hits(&self) -> Result<JsValue, JsValue> {
        let rendered = self.highlighted_hits().map_err(|e| JsValue::from_str(&e))?;
        Ok(serde_wasm_bindgen::to_value(&rendered)?)
    }

    #[wasm_bindgen(js_name = reset)]
    pub fn js_reset(&mut self, query: &str) {
        self.reset(query);
    }
}

// =============================================================================
// Tests
// =============================================================================
