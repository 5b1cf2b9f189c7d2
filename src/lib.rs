//! WikiCore: Search Presentation Core for the Wiki Client
//!
//! The Rust/WASM core behind the wiki platform's search UI. The JS shell
//! owns routing, forms, and rendering; this crate owns the text-range
//! computation and result-set bookkeeping underneath it.
//!
//! # Architecture
//!
//! ## Highlight Components
//! - `highlight/range.rs` - MatchRange: half-open byte ranges + strict-overlap merging
//! - `highlight/segment.rs` - Segment: tagged plain/highlighted output pieces
//! - `highlight/matcher.rs` - WordHighlighter: Aho-Corasick word matching over display text
//!
//! ## Search Components
//! - `search/types.rs` - SearchHit, SearchPage, Cursor, SearchError
//! - `search/source.rs` - SearchSource: capability seam for page fetching
//! - `search/feed.rs` - ResultFeed: cursor-paginated accumulation with in-flight guard
//!
//! ## Widget Components
//! - `widget/processed.rs` - ProcessedSet: attach-once guard for server-rendered fragments
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { ResultFeed, highlightWords } from 'wikicore';
//!
//! await init();
//!
//! const feed = new ResultFeed('alpha centauri');
//!
//! if (feed.tryBegin()) {
//!   try {
//!     const page = await api.search(feed.query(), feed.nextCursor());
//!     feed.completePage(page);
//!   } catch (e) {
//!     feed.failFetch(String(e));
//!   }
//! }
//!
//! // Segments for one-off strings outside a feed
//! const segments = highlightWords('The QUICK fox', ['quick']);
//! // [{ kind: 'plain', text: 'The ' }, { kind: 'highlighted', text: 'QUICK' }, ...]
//!
//! for (const hit of feed.highlightedHits()) {
//!   render(hit.title, hit.excerpt);
//! }
//! ```

pub mod highlight;
pub mod search;
pub mod widget;

// Public exports - Highlighting
pub use highlight::*;

// Public exports - Search feed
pub use search::*;

// Public exports - Widget guard
pub use widget::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("wikicore v{}", env!("CARGO_PKG_VERSION"))
}
