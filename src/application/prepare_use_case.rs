// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full preprocessing pipeline in order:
//
//   Step 1: Validate sequence settings          (Layer 3 - domain)
//   Step 2: Choose the tokenizer                (Layer 4 / 6)
//   Step 3: Load the Q/A corpus                 (Layer 4 - data)
//   Step 4: Build or load the vocabulary        (Layer 6 - infra)
//   Step 5: Encode questions and answers        (Layer 4 - data)
//   Step 6: Save arrays and settings            (Layer 6 - infra)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::Seq2SeqDataset,
    encoder::SequenceEncoder,
    loader::CsvCorpus,
    tokenizer::{MorphTokenizer, WordTokenizer},
};
use crate::domain::{
    config::{SequenceConfig, DEFAULT_MAX_SEQUENCES},
    traits::{CorpusSource, Tokenize},
    vocabulary::Vocabulary,
};
use crate::infra::{
    array_store::ArrayStore,
    morph_command::CommandAnalyzer,
    vocab_store::VocabStore,
};

// ─── Preprocessing Configuration ─────────────────────────────────────────────
// Everything a run needs. Saved next to the arrays so training
// code knows how they were produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub corpus_path:   String,
    pub vocab_path:    String,
    pub output_dir:    String,
    pub max_sequences: usize,
    /// `[program, args...]` of a morpheme analyzer; empty = word mode
    pub morph_command: Vec<String>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            corpus_path:   "data/ChatBotData.csv".to_string(),
            vocab_path:    "data/vocabulary.txt".to_string(),
            output_dir:    "data/encoded".to_string(),
            max_sequences: DEFAULT_MAX_SEQUENCES,
            morph_command: Vec::new(),
        }
    }
}

impl PrepareConfig {
    pub fn sequence_config(&self) -> SequenceConfig {
        SequenceConfig::new(self.max_sequences)
    }

    /// The tokenizer shared by vocabulary building and every encoder.
    pub fn tokenizer(&self) -> Box<dyn Tokenize> {
        build_tokenizer(&self.morph_command)
    }
}

/// Word tokenizer, or a morpheme tokenizer when a command is given.
pub fn build_tokenizer(morph_command: &[String]) -> Box<dyn Tokenize> {
    match CommandAnalyzer::from_argv(morph_command) {
        Some(analyzer) => {
            tracing::info!("Tokenizing morphemes with '{}'", morph_command.join(" "));
            Box::new(MorphTokenizer::new(analyzer))
        }
        None => Box::new(WordTokenizer::new()),
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareReport {
    pub vocab_size: usize,
    pub samples:    usize,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Build the vocabulary if needed and return it, without encoding.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        let cfg       = &self.config;
        let tokenizer = cfg.tokenizer();
        let corpus    = CsvCorpus::new(&cfg.corpus_path);

        VocabStore::new(&cfg.vocab_path)
            .with_markers(cfg.sequence_config().markers)
            .load_or_build(&corpus, tokenizer.as_ref())
            .with_context(|| format!("Cannot prepare vocabulary '{}'", cfg.vocab_path))
    }

    /// Execute the full pipeline end to end
    pub fn execute(&self) -> Result<PrepareReport> {
        let cfg = &self.config;

        // ── Step 1: Validate settings ─────────────────────────────────────────
        let seq_cfg = cfg.sequence_config();
        seq_cfg.validate()?;

        // ── Step 2: Tokenizer ─────────────────────────────────────────────────
        let tokenizer = cfg.tokenizer();

        // ── Step 3: Load corpus ───────────────────────────────────────────────
        let pairs = CsvCorpus::new(&cfg.corpus_path)
            .load_all()
            .with_context(|| format!("Cannot load corpus '{}'", cfg.corpus_path))?;

        // ── Step 4: Vocabulary ────────────────────────────────────────────────
        // Built from the pairs just loaded unless the file already exists.
        let vocab = VocabStore::new(&cfg.vocab_path)
            .with_markers(seq_cfg.markers.clone())
            .load_or_build(&pairs, tokenizer.as_ref())
            .with_context(|| format!("Cannot prepare vocabulary '{}'", cfg.vocab_path))?;

        // ── Step 5: Encode ────────────────────────────────────────────────────
        let encoder = SequenceEncoder::new(&vocab, tokenizer.as_ref(), &seq_cfg)?;
        let dataset = Seq2SeqDataset::build(&pairs, &encoder)?;
        tracing::info!(
            "Encoded {} pairs into rows of {}",
            dataset.len(),
            seq_cfg.max_sequences
        );

        // ── Step 6: Save ──────────────────────────────────────────────────────
        let store = ArrayStore::new(&cfg.output_dir);
        store
            .save_dataset(&dataset)
            .with_context(|| format!("Cannot save arrays to '{}'", cfg.output_dir))?;
        store.save_config(cfg)?;

        Ok(PrepareReport {
            vocab_size: vocab.len(),
            samples:    dataset.len(),
        })
    }
}
