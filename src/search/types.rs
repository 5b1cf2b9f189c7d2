//! Core data structures for the search result feed
//!
//! Mirrors the JSON the search backend returns: a page of hits, the ranked
//! word list used for excerpt highlighting, and an opaque cursor pointing
//! at the next page.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::highlight::Segment;

// =============================================================================
// Cursor
// =============================================================================

/// Opaque pagination token from the search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Hits and Pages
// =============================================================================

/// One search result as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub url: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub score: f32,
}

/// One page of results plus the ranked word list and the next cursor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchPage {
    pub hits: Vec<SearchHit>,
    /// Ranked query words the backend matched; highlighting derives its
    /// word set from these
    #[serde(default)]
    pub words: Vec<String>,
    /// Absent on the last page
    #[serde(default)]
    pub next_cursor: Option<Cursor>,
}

/// One hit rendered through the highlighter, ready for the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightedHit {
    pub id: String,
    pub url: String,
    pub title: Vec<Segment>,
    pub excerpt: Vec<Segment>,
    pub score: f32,
}

// =============================================================================
// Errors
// =============================================================================

/// Fetch failure surfaced to the UI; `message` is human-readable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchError {
    pub message: String,
}

impl SearchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SearchError {}

impl From<String> for SearchError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for SearchError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
