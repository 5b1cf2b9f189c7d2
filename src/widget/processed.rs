//! ProcessedSet: Widget Attachment Guard
//!
//! Server-rendered HTML fragments get widget behavior attached exactly
//! once. Instead of stashing an `_alreadyProcessed` flag on each DOM node,
//! the host keeps one ProcessedSet keyed by node identity and asks before
//! attaching. Skip counters make double-attachment attempts observable.

use std::collections::HashSet;
use wasm_bindgen::prelude::*;

// =============================================================================
// ProcessedSet
// =============================================================================

/// Identity-keyed set of already-processed nodes
#[wasm_bindgen]
pub struct ProcessedSet {
    seen: HashSet<String>,
    /// Number of mark attempts
    mark_count: u64,
    /// Number of attempts refused because the id was already marked
    skip_count: u64,
}

impl Default for ProcessedSet {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ProcessedSet {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            mark_count: 0,
            skip_count: 0,
        }
    }

    /// Mark an id as processed. Returns true when the caller should attach
    /// the widget, false when the id was already processed.
    #[wasm_bindgen]
    pub fn mark(&mut self, id: &str) -> bool {
        self.mark_count += 1;
        let fresh = self.seen.insert(id.to_string());
        if !fresh {
            self.skip_count += 1;
        }
        fresh
    }

    #[wasm_bindgen]
    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Forget one id, e.g. after its node was detached and re-rendered
    #[wasm_bindgen]
    pub fn unmark(&mut self, id: &str) -> bool {
        self.seen.remove(id)
    }

    /// Number of distinct processed ids
    #[wasm_bindgen(js_name = size)]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    #[wasm_bindgen(js_name = getMarkCount)]
    pub fn mark_count(&self) -> u64 {
        self.mark_count
    }

    #[wasm_bindgen(js_name = getSkipCount)]
    pub fn skip_count(&self) -> u64 {
        self.skip_count
    }

    /// Share of mark attempts refused, as a percentage
    #[wasm_bindgen(js_name = getSkipRate)]
    pub fn skip_rate(&self) -> f64 {
        if self.mark_count == 0 {
            return 0.0;
        }
        (self.skip_count as f64 / self.mark_count as f64) * 100.0
    }

    /// Forget everything, e.g. on full page replacement
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.seen.clear();
        self.mark_count = 0;
        self.skip_count = 0;
    }
}

// =============================================================================
// Tests
// =============================================================================
