//! Keyword extraction — raw text to a normalized term set.
//!
//! A term is a maximal match of [`WORD_RUN`], lower-cased, and at least
//! `min_len` characters long. Word characters are ASCII `[0-9A-Za-z_]` plus
//! the CJK ideograph, kana and hangul blocks; `regex_lite` classes are
//! ASCII-only, so other scripts (accented Latin, Cyrillic) split at each
//! non-ASCII letter. This is a lexical approximation, not a linguistic
//! tokenizer: CJK text without separators comes out as whole runs, and
//! compounds such as `third-party` split at the hyphen.

use std::sync::LazyLock;

use clauserag_core::TermSet;
use regex_lite::Regex;

/// Minimum term length, in characters, unless configured otherwise.
pub const DEFAULT_MIN_TERM_LEN: usize = 2;

/// One run of word characters.
pub const WORD_RUN: &str =
    r"[\w\x{3040}-\x{30FF}\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{AC00}-\x{D7AF}]+";

static WORD_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_RUN).expect("WORD_RUN is a valid pattern"));

/// Turns text into a `TermSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordExtractor {
    min_len: usize,
}

impl KeywordExtractor {
    /// Create an extractor keeping runs of at least `min_len` characters.
    /// A `min_len` of 0 behaves like 1: empty runs are never terms.
    pub fn new(min_len: usize) -> Self {
        Self {
            min_len: min_len.max(1),
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Extract the set of terms in `text`.
    pub fn extract(&self, text: &str) -> TermSet {
        WORD_RUN_RE
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|run| run.chars().count() >= self.min_len)
            .map(str::to_lowercase)
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TERM_LEN)
    }
}
