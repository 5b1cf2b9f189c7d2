//! Segment: Tagged Output Pieces
//!
//! The highlighter emits an ordered segment sequence covering the whole
//! input string. Concatenating the segment texts in order reproduces the
//! input byte-for-byte; the UI renders `Highlighted` pieces with its own
//! markup and `Plain` pieces as bare text nodes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Types
// =============================================================================

/// One contiguous piece of output text
///
/// Serialized as `{ "kind": "plain" | "highlighted", "text": "..." }` so
/// the JS side can switch on `kind` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Highlighted(String),
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Plain(text.into())
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Segment::Highlighted(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Highlighted(text) => text,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Segment::Highlighted(_))
    }
}

/// Reassemble the source text from a segment sequence
pub fn concat_segments(segments: &[Segment]) -> String {
    let total: usize = segments.iter().map(|s| s.text().len()).sum();
    let mut out = String::with_capacity(total);
    for segment in segments {
        out.push_str(segment.text());
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
