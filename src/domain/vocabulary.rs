// ============================================================
// Layer 3 — Vocabulary Index
// ============================================================
// An ordered list of unique words plus its inverse mapping.
//
//   index_to_word: Vec<String>          position = index
//   word_to_index: HashMap<String, u32> exact string match
//
// The four marker indices (PAD, SOS, END, UNK) are resolved by
// name when the vocabulary is built, so encoders never look them
// up again. A fresh vocabulary places them at 0..=3.
//
// A Vocabulary is immutable once constructed.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::config::Markers;
use crate::error::{PrepError, Result};

/// Word ↔ index mapping with resolved marker indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    index_to_word: Vec<String>,
    word_to_index: HashMap<String, u32>,
    pad: u32,
    sos: u32,
    end: u32,
    unk: u32,
}

impl Vocabulary {
    /// Build the index from an ordered word list.
    ///
    /// Fails if a word appears twice or a marker is missing.
    pub fn from_words(words: Vec<String>, markers: &Markers) -> Result<Self> {
        Self::from_words_at(words, markers, Path::new("<memory>"))
    }

    /// Same as [`Vocabulary::from_words`], reporting errors against `origin`.
    pub(crate) fn from_words_at(
        words:   Vec<String>,
        markers: &Markers,
        origin:  &Path,
    ) -> Result<Self> {
        let malformed = |message: String| PrepError::MalformedVocabulary {
            path: origin.to_path_buf(),
            message,
        };

        let mut word_to_index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let idx = u32::try_from(i)
                .map_err(|_| malformed(format!("more than {} entries", u32::MAX)))?;
            if word_to_index.insert(word.clone(), idx).is_some() {
                return Err(malformed(format!(
                    "duplicate word {word:?} on line {}",
                    i + 1
                )));
            }
        }

        let resolve = |marker: &str| {
            word_to_index
                .get(marker)
                .copied()
                .ok_or_else(|| malformed(format!("reserved marker {marker:?} not found")))
        };

        let pad = resolve(&markers.pad)?;
        let sos = resolve(&markers.sos)?;
        let end = resolve(&markers.end)?;
        let unk = resolve(&markers.unk)?;

        Ok(Self {
            index_to_word: words,
            word_to_index,
            pad,
            sos,
            end,
            unk,
        })
    }

    /// Number of entries, markers included
    pub fn len(&self) -> usize {
        self.index_to_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_word.is_empty()
    }

    /// Exact-match lookup.
    pub fn index_of(&self, word: &str) -> Option<u32> {
        self.word_to_index.get(word).copied()
    }

    /// Total lookup: unknown words map to the UNK index.
    pub fn index_or_unk(&self, word: &str) -> u32 {
        self.index_of(word).unwrap_or(self.unk)
    }

    pub fn word_at(&self, index: u32) -> Option<&str> {
        self.index_to_word.get(index as usize).map(String::as_str)
    }

    pub fn word_to_index(&self) -> &HashMap<String, u32> {
        &self.word_to_index
    }

    /// Words in index order
    pub fn index_to_word(&self) -> &[String] {
        &self.index_to_word
    }

    /// Split into `(word_to_index, index_to_word, vocab_size)`.
    pub fn into_parts(self) -> (HashMap<String, u32>, Vec<String>, usize) {
        let size = self.index_to_word.len();
        (self.word_to_index, self.index_to_word, size)
    }

    pub fn pad(&self) -> u32 {
        self.pad
    }

    pub fn sos(&self) -> u32 {
        self.sos
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn unk(&self) -> u32 {
        self.unk
    }

    /// Turn an encoded row back into text.
    ///
    /// Stops at the first END, skips PAD and SOS. Indices outside
    /// the vocabulary are rendered as the UNK word.
    pub fn decode(&self, ids: &[u32]) -> String {
        let unk_word = self.index_to_word[self.unk as usize].as_str();
        ids.iter()
            .take_while(|&&id| id != self.end)
            .filter(|&&id| id != self.pad && id != self.sos)
            .map(|&id| self.word_at(id).unwrap_or(unk_word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
