// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seams where the pipeline meets pluggable collaborators:
//
//   CorpusSource   — where Q/A pairs come from (CSV file, memory)
//   Tokenize       — text → word tokens
//   MorphAnalyzer  — external morpheme splitter (black box)
//
// The vocabulary builder and every encoder receive a &dyn Tokenize,
// so one tokenizer choice applies to the whole corpus.

use crate::domain::qa_pair::QaPair;
use crate::error::Result;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can load the question/answer corpus.
///
/// Implementations:
///   - CsvCorpus → reads a CSV file with `Q` and `A` columns
///   - Vec<QaPair> → in-memory corpus
pub trait CorpusSource {
    /// Load every pair, in source order.
    fn load_all(&self) -> Result<Vec<QaPair>>;
}

impl CorpusSource for Vec<QaPair> {
    fn load_all(&self) -> Result<Vec<QaPair>> {
        Ok(self.clone())
    }
}

// ─── Tokenize ─────────────────────────────────────────────────────────────────
/// Splits a text into word tokens.
///
/// Implementations:
///   - WordTokenizer       → punctuation filter + whitespace split
///   - MorphTokenizer<A>   → morpheme analysis, then the same filter
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

// ─── MorphAnalyzer ────────────────────────────────────────────────────────────
/// An external morphological analyzer: returns the morphemes of `text`.
///
/// Implementations:
///   - CommandAnalyzer → pipes text through an external program
pub trait MorphAnalyzer {
    fn morphs(&self, text: &str) -> Result<Vec<String>>;
}
