// ============================================================
// Layer 4 — Tokenizer Adapters
// ============================================================
// Turns raw text into word tokens before vocabulary lookup.
//
// Default (WordTokenizer):
//   1. Delete every char in the class  ~ . , ! ? " ' : ; ) (
//   2. Split on whitespace, dropping empty pieces
//
//   "안녕, 반가워요!"  →  ["안녕", "반가워요"]
//
// Morpheme mode (MorphTokenizer):
//   1. Delete every ' ' from the text
//   2. Ask the injected MorphAnalyzer for morphemes
//   3. Join morphemes with ' ' and apply the default rule
//
//   "가끔 궁금해"  →  analyzer("가끔궁금해")  →  ["가끔", "궁금해"]

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::traits::{MorphAnalyzer, Tokenize};
use crate::error::Result;

/// Punctuation removed before splitting.
pub const PUNCTUATION_FILTER: &str = r#"[~.,!?"':;)(]"#;

static FILTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PUNCTUATION_FILTER).expect("punctuation filter is a valid regex")
});

/// Strip the punctuation class from `text`.
pub fn strip_punctuation(text: &str) -> String {
    FILTER.replace_all(text, "").into_owned()
}

/// Punctuation filter followed by whitespace split.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Infallible form of [`Tokenize::tokenize`].
    ///
    /// Splits on Unicode `White_Space`. This differs from Python's
    /// `str.split()` at the edges: `\x1c`..`\x1f` are not separators here.
    pub fn split(&self, text: &str) -> Vec<String> {
        strip_punctuation(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl Tokenize for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.split(text))
    }
}

/// Morpheme-level tokenizer backed by an external analyzer.
pub struct MorphTokenizer<A> {
    analyzer: A,
    words:    WordTokenizer,
}

impl<A: MorphAnalyzer> MorphTokenizer<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            words: WordTokenizer::new(),
        }
    }
}

impl<A: MorphAnalyzer> Tokenize for MorphTokenizer<A> {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let compact = text.replace(' ', "");
        let morphs  = self.analyzer.morphs(&compact)?;
        Ok(self.words.split(&morphs.join(" ")))
    }
}
