//! WordHighlighter: Search Word Matching in Display Text
//!
//! Uses Aho-Corasick to locate every case-insensitive occurrence of the
//! search words in a title or excerpt, then folds the occurrences into an
//! alternating plain/highlighted segment sequence. Matching is literal
//! substring search; words carrying regex metacharacters need no escaping.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use wasm_bindgen::prelude::*;

use super::range::{merge_overlapping, MatchRange};
use super::segment::Segment;

// =============================================================================
// Word Set Normalization
// =============================================================================

/// Derive the search word set from the backend's ranked word list:
/// lowercase, drop empties, de-duplicate keeping first occurrence.
/// Matching is order-independent, only presence matters.
pub fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for word in words {
        let lower = word.as_ref().to_lowercase();
        // Empty words would match at every index; filter them up front
        if lower.is_empty() {
            continue;
        }
        if !normalized.contains(&lower) {
            normalized.push(lower);
        }
    }
    normalized
}

// =============================================================================
// Case Folding
// =============================================================================

/// Unicode-lowercased copy of a text with a byte-offset map back to the
/// original string
///
/// Lowercasing can change byte lengths ("İ" folds to two characters), so
/// matches found in the folded copy cannot index the original directly.
/// `offsets[i]` is the original byte offset of the character that produced
/// folded byte `i`.
struct FoldedText {
    folded: String,
    offsets: Vec<usize>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len());

        for (orig, ch) in text.char_indices() {
            for low in ch.to_lowercase() {
                for _ in 0..low.len_utf8() {
                    offsets.push(orig);
                }
                folded.push(low);
            }
        }

        Self { folded, offsets }
    }

    fn as_str(&self) -> &str {
        &self.folded
    }

    /// Map a non-empty folded byte range back to the original string,
    /// widening to character boundaries of the original where a fold
    /// expanded one character into several
    fn map_range(&self, text: &str, start: usize, end: usize) -> MatchRange {
        let orig_start = self.offsets[start];
        let last_char_start = self.offsets[end - 1];
        let orig_end = text[last_char_start..]
            .chars()
            .next()
            .map(|c| last_char_start + c.len_utf8())
            .unwrap_or(text.len());
        MatchRange::new(orig_start, orig_end)
    }
}

// =============================================================================
// WordHighlighter
// =============================================================================

/// Reusable matcher compiled from one search word set
#[wasm_bindgen]
pub struct WordHighlighter {
    automaton: Option<AhoCorasick>,
    words: Vec<String>,
}

impl WordHighlighter {
    /// Compile a highlighter from a word list. An empty (or all-empty)
    /// list yields a highlighter that never matches.
    pub fn new<I, S>(words: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = normalize_words(words);

        let automaton = if words.is_empty() {
            None
        } else {
            let built = AhoCorasickBuilder::new()
                .ascii_case_insensitive(true) // lets ASCII text skip the folded copy
                .build(&words)
                .map_err(|e| format!("Failed to build word automaton: {}", e))?;
            Some(built)
        };

        Ok(Self { automaton, words })
    }

    /// Number of distinct words after normalization
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Normalized word set this highlighter was compiled from
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Every occurrence of every word as byte ranges into `text`,
    /// overlapping occurrences included
    pub fn find_ranges(&self, text: &str) -> Vec<MatchRange> {
        let automaton = match &self.automaton {
            Some(a) => a,
            None => return vec![],
        };

        if text.is_empty() {
            return vec![];
        }

        // ASCII text: the automaton folds case itself, no allocation
        if text.is_ascii() {
            return automaton
                .find_overlapping_iter(text)
                .map(|m| MatchRange::new(m.start(), m.end()))
                .collect();
        }

        // Otherwise search a Unicode-lowercased copy and map the match
        // offsets back to the original string
        let folded = FoldedText::new(text);
        automaton
            .find_overlapping_iter(folded.as_str())
            .map(|m| folded.map_range(text, m.start(), m.end()))
            .collect()
    }

    /// Segment `text` into alternating plain/highlighted pieces.
    ///
    /// Concatenating the returned segment texts reproduces `text` exactly.
    /// Highlighted segments carry the original casing. No match produces a
    /// single plain segment holding the whole text.
    pub fn highlight(&self, text: &str) -> Vec<Segment> {
        let ranges = merge_overlapping(self.find_ranges(text));

        if ranges.is_empty() {
            return vec![Segment::plain(text)];
        }

        let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
        let mut cursor = 0;

        for range in &ranges {
            if range.start > cursor {
                segments.push(Segment::plain(&text[cursor..range.start]));
            }
            segments.push(Segment::highlighted(&text[range.start..range.end]));
            cursor = range.end;
        }

        if cursor < text.len() {
            segments.push(Segment::plain(&text[cursor..]));
        }

        segments
    }
}

/// One-shot highlight: compile a throwaway highlighter and segment `text`.
///
/// Total over any input; an automaton build failure degrades to the
/// unsegmented plain output.
pub fn highlight_words(text: &str, words: &[String]) -> Vec<Segment> {
    match WordHighlighter::new(words) {
        Ok(highlighter) => highlighter.highlight(text),
        Err(_) => vec![Segment::plain(text)],
    }
}

// =============================================================================
// WASM API
// =============================================================================

#[wasm_bindgen]
impl WordHighlighter {
    #[wasm_bindgen(constructor)]
    pub fn js_new(words: Vec<String>) -> Result<WordHighlighter, JsValue> {
        Self::new(&words).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = wordCount)]
    pub fn js_word_count(&self) -> usize {
        self.word_count()
    }

    /// Segment text, returned as an array of `{ kind, text }` objects
    #[wasm_bindgen(js_name = highlight)]
    pub fn js_highlight(&self, text: &str) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.highlight(text))?)
    }

    /// Merged match ranges, returned as an array of `{ start, end }` objects
    #[wasm_bindgen(js_name = findRanges)]
    pub fn js_find_ranges(&self, text: &str) -> Result<JsValue, JsValue> {
        let ranges = merge_overlapping(self.find_ranges(text));
        Ok(serde_wasm_bindgen::to_value(&ranges)?)
    }
}

/// One-shot highlight for callers that do not reuse the word set
#[wasm_bindgen(js_name = highlightWords)]
pub fn js_highlight_words(text: &str, words: Vec<String>) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&highlight_words(text, &words))?)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::segment::concat_segments;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // -------------------------------------------------------------------------
    // Requirement 1: Round-trip - segments concatenate back to the input
    // -------------------------------------------------------------------------
    #[test]
    fn test_round_trip() {
        let cases = [
            ("the quick fox", vec!["quick"]),
            ("abcdef", vec!["abc", "cde"]),
            ("aa", vec!["a"]),
            ("", vec!["a"]),
            ("no matches here", vec!["zebra"]),
        ];

        for (text, word_list) in cases {
            let segments = highlight_words(text, &words(&word_list));
            assert_eq!(concat_segments(&segments), text, "text: {:?}", text);
        }
    }

    // -------------------------------------------------------------------------
    // Requirement 2: No match yields a single plain segment
    // -------------------------------------------------------------------------
    #[test]
    fn test_no_match_identity() {
        let segments = highlight_words("the quick fox", &words(&["zebra"]));
        assert_eq!(segments, vec![Segment::plain("the quick fox")]);
    }

    // -------------------------------------------------------------------------
    // Requirement 3: Empty word list yields a single plain segment
    // -------------------------------------------------------------------------
    #[test]
    fn test_empty_words_identity() {
        let segments = highlight_words("the quick fox", &[]);
        assert_eq!(segments, vec![Segment::plain("the quick fox")]);
    }

    // -------------------------------------------------------------------------
    // Requirement 4: Single match splits into plain/highlighted/plain
    // -------------------------------------------------------------------------
    #[test]
    fn test_single_match() {
        let segments = highlight_words("the quick fox", &words(&["quick"]));
        assert_eq!(
            segments,
            vec![
                Segment::plain("the "),
                Segment::highlighted("quick"),
                Segment::plain(" fox"),
            ]
        );
    }

    // -------------------------------------------------------------------------
    // Requirement 5: Case-insensitive match preserves original casing
    // -------------------------------------------------------------------------
    #[test]
    fn test_case_insensitive_preserves_casing() {
        let segments = highlight_words("The QUICK fox", &words(&["quick"]));
        assert_eq!(
            segments,
            vec![
                Segment::plain("The "),
                Segment::highlighted("QUICK"),
                Segment::plain(" fox"),
            ]
        );

        // Upper-cased query word matches the same way
        let segments = highlight_words("The QUICK fox", &words(&["QUICK"]));
        assert_eq!(segments[1], Segment::highlighted("QUICK"));
    }

    // -------------------------------------------------------------------------
    // Requirement 6: Overlapping matches of different words merge
    // -------------------------------------------------------------------------
    #[test]
    fn test_overlap_merge() {
        let segments = highlight_words("abcdef", &words(&["abc", "cde"]));
        assert_eq!(
            segments,
            vec![Segment::highlighted("abcde"), Segment::plain("f")]
        );
    }

    // -------------------------------------------------------------------------
    // Requirement 7: Multiple non-overlapping matches stay separate
    // -------------------------------------------------------------------------
    #[test]
    fn test_multiple_matches() {
        let segments = highlight_words("cat dog cat", &words(&["cat"]));
        assert_eq!(
            segments,
            vec![
                Segment::highlighted("cat"),
                Segment::plain(" dog "),
                Segment::highlighted("cat"),
            ]
        );
    }

    // -------------------------------------------------------------------------
    // Requirement 8: Adjacent matches do not merge
    // -------------------------------------------------------------------------
    #[test]
    fn test_adjacent_matches_stay_separate() {
        let segments = highlight_words("aa", &words(&["a"]));
        assert_eq!(
            segments,
            vec![Segment::highlighted("a"), Segment::highlighted("a")]
        );
    }

    // -------------------------------------------------------------------------
    // Requirement 9: Word-set normalization filters and de-duplicates
    // -------------------------------------------------------------------------
    #[test]
    fn test_normalize_words() {
        let normalized = normalize_words(["Quick", "", "quick", "Fox", "QUICK"]);
        assert_eq!(normalized, vec!["quick".to_string(), "fox".to_string()]);
    }

    // -------------------------------------------------------------------------
    // Requirement 10: Regex metacharacters are matched literally
    // -------------------------------------------------------------------------
    #[test]
    fn test_literal_metacharacters() {
        let segments = highlight_words("using c++ daily", &words(&["c++"]));
        assert_eq!(
            segments,
            vec![
                Segment::plain("using "),
                Segment::highlighted("c++"),
                Segment::plain(" daily"),
            ]
        );

        let segments = highlight_words("a.b matches", &words(&["a.b"]));
        assert_eq!(segments[0], Segment::highlighted("a.b"));
        // "." must not act as a wildcard
        let segments = highlight_words("axb here", &words(&["a.b"]));
        assert_eq!(segments, vec![Segment::plain("axb here")]);
    }

    // -------------------------------------------------------------------------
    // Requirement 11: Words longer than the text never match
    // -------------------------------------------------------------------------
    #[test]
    fn test_word_longer_than_text() {
        let segments = highlight_words("ab", &words(&["abcdef"]));
        assert_eq!(segments, vec![Segment::plain("ab")]);
    }

    // -------------------------------------------------------------------------
    // Requirement 12: Empty text yields a single empty plain segment
    // -------------------------------------------------------------------------
    #[test]
    fn test_empty_text() {
        let segments = highlight_words("", &words(&["quick"]));
        assert_eq!(segments, vec![Segment::plain("")]);
    }

    // -------------------------------------------------------------------------
    // Requirement 13: Match at string boundaries
    // -------------------------------------------------------------------------
    #[test]
    fn test_match_at_boundaries() {
        let segments = highlight_words("cat nap", &words(&["cat"]));
        assert_eq!(segments[0], Segment::highlighted("cat"));

        let segments = highlight_words("nap cat", &words(&["cat"]));
        assert_eq!(segments.last().unwrap(), &Segment::highlighted("cat"));
    }

    // -------------------------------------------------------------------------
    // Requirement 14: Reusable highlighter matches across many texts
    // -------------------------------------------------------------------------
    #[test]
    fn test_reusable_highlighter() {
        let highlighter = WordHighlighter::new(["wiki", "page"]).unwrap();
        assert_eq!(highlighter.word_count(), 2);

        let first = highlighter.highlight("Wiki home");
        assert_eq!(first[0], Segment::highlighted("Wiki"));

        let second = highlighter.highlight("every page counts");
        assert!(second.iter().any(|s| s == &Segment::highlighted("page")));
    }

    // -------------------------------------------------------------------------
    // Requirement 15: Repeated word inside a longer run is found exhaustively
    // -------------------------------------------------------------------------
    #[test]
    fn test_exhaustive_scan_inside_run() {
        let highlighter = WordHighlighter::new(["aa"]).unwrap();
        // "aaa" contains "aa" at 0 and 1; the two overlap and merge
        let segments = highlighter.highlight("aaa");
        assert_eq!(segments, vec![Segment::highlighted("aaa")]);
    }

    // -------------------------------------------------------------------------
    // Requirement 16: Non-ASCII case-insensitive match preserves casing
    // -------------------------------------------------------------------------
    #[test]
    fn test_cyrillic_case_insensitive() {
        let segments = highlight_words("Статья о ФИЗИКЕ", &words(&["физике"]));
        assert_eq!(
            segments,
            vec![
                Segment::plain("Статья о "),
                Segment::highlighted("ФИЗИКЕ"),
            ]
        );

        // upper-cased query word matches lower-cased text the same way
        let segments = highlight_words("статья о физике", &words(&["ФИЗИКЕ"]));
        assert_eq!(
            segments,
            vec![
                Segment::plain("статья о "),
                Segment::highlighted("физике"),
            ]
        );
    }

    // -------------------------------------------------------------------------
    // Requirement 17: Accented text matches case-insensitively at boundaries
    // -------------------------------------------------------------------------
    #[test]
    fn test_accented_case_insensitive() {
        let segments = highlight_words("Über uns", &words(&["über"]));
        assert_eq!(
            segments,
            vec![Segment::highlighted("Über"), Segment::plain(" uns")]
        );
    }

    // -------------------------------------------------------------------------
    // Requirement 18: Length-changing case folds keep offsets on the original
    // -------------------------------------------------------------------------
    #[test]
    fn test_length_changing_fold() {
        // "İ" lowercases to two characters; matches after it must still
        // slice the original string correctly
        let segments = highlight_words("İzmir", &words(&["zmir"]));
        assert_eq!(
            segments,
            vec![Segment::plain("İ"), Segment::highlighted("zmir")]
        );

        // round-trip holds even when the folded copy is longer than the text
        let text = "İİ abc İİ";
        let segments = highlight_words(text, &words(&["abc"]));
        assert_eq!(concat_segments(&segments), text);
        assert!(segments.contains(&Segment::highlighted("abc")));
    }

    // -------------------------------------------------------------------------
    // Requirement 19: Mixed-script round-trip
    // -------------------------------------------------------------------------
    #[test]
    fn test_mixed_script_round_trip() {
        let text = "Wiki — СТАТЬЯ про Rust";
        let segments = highlight_words(text, &words(&["статья", "rust"]));
        assert_eq!(concat_segments(&segments), text);
        assert!(segments.contains(&Segment::highlighted("СТАТЬЯ")));
        assert!(segments.contains(&Segment::highlighted("Rust")));
    }
}
