// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Builds, saves, and loads the vocabulary file.
//
// File format (UTF-8, one word per line, line number = index):
//
//   <PAD>
//   <SOS>
//   <END>
//   <UNK>
//   12시
//   땡
//   ...
//
// If the file exists it is loaded verbatim and never rebuilt,
// so indices stay stable across runs. Otherwise words are
// collected from the corpus in first-seen order (questions,
// then answers), written, and read back.

use std::{
    collections::HashSet,
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::data::loader::CsvCorpus;
use crate::domain::config::Markers;
use crate::domain::qa_pair::{flatten_texts, QaPair};
use crate::domain::traits::{CorpusSource, Tokenize};
use crate::domain::vocabulary::Vocabulary;
use crate::error::{PrepError, Result};

pub struct VocabStore {
    path:    PathBuf,
    markers: Markers,
}

impl VocabStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:    path.into(),
            markers: Markers::default(),
        }
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the persisted vocabulary, building it from `corpus` first
    /// if the file does not exist yet.
    pub fn load_or_build(
        &self,
        corpus:    &dyn CorpusSource,
        tokenizer: &dyn Tokenize,
    ) -> Result<Vocabulary> {
        if self.exists() {
            tracing::info!("Loading existing vocabulary from '{}'", self.path.display());
        } else {
            tracing::info!("Building new vocabulary at '{}'", self.path.display());
            let pairs = corpus.load_all()?;
            let words = build_words(&pairs, tokenizer, &self.markers)?;
            self.save(&words)?;
        }
        self.load()
    }

    /// Read the vocabulary file; line order defines index order.
    pub fn load(&self) -> Result<Vocabulary> {
        let file = File::open(&self.path).map_err(|e| PrepError::io(&self.path, e))?;

        let mut words = Vec::new();
        for line in BufReader::new(file).lines() {
            words.push(line.map_err(|e| PrepError::io(&self.path, e))?);
        }

        let vocab = Vocabulary::from_words_at(words, &self.markers, &self.path)?;
        tracing::info!("Vocabulary ready: {} entries", vocab.len());
        Ok(vocab)
    }

    /// Write one word per line, creating parent directories as needed.
    pub fn save(&self, words: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PrepError::io(parent, e))?;
        }

        let file = File::create(&self.path).map_err(|e| PrepError::io(&self.path, e))?;
        let mut out = BufWriter::new(file);
        for word in words {
            writeln!(out, "{word}").map_err(|e| PrepError::io(&self.path, e))?;
        }
        out.flush().map_err(|e| PrepError::io(&self.path, e))?;

        tracing::debug!("Wrote {} words to '{}'", words.len(), self.path.display());
        Ok(())
    }
}

/// Markers followed by every distinct corpus word in first-seen order.
///
/// Corpus words equal to a marker are skipped.
pub fn build_words(
    pairs:     &[QaPair],
    tokenizer: &dyn Tokenize,
    markers:   &Markers,
) -> Result<Vec<String>> {
    let mut words: Vec<String> = markers.in_order().iter().map(|m| m.to_string()).collect();
    let mut seen: HashSet<String> = words.iter().cloned().collect();

    for text in flatten_texts(pairs) {
        for token in tokenizer.tokenize(text)? {
            if seen.insert(token.clone()) {
                words.push(token);
            }
        }
    }

    tracing::debug!(
        "Collected {} distinct corpus words",
        words.len() - markers.in_order().len()
    );
    Ok(words)
}

/// Build (if needed) and load the vocabulary for a CSV corpus.
pub fn build_or_load_vocabulary(
    corpus_path: impl AsRef<Path>,
    vocab_path:  impl AsRef<Path>,
    tokenizer:   &dyn Tokenize,
) -> Result<Vocabulary> {
    let corpus = CsvCorpus::new(corpus_path.as_ref());
    VocabStore::new(vocab_path.as_ref()).load_or_build(&corpus, tokenizer)
}
