// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw corpus CSV to model-ready index arrays.
//
// The pipeline flows in this order:
//
//   corpus .csv
//       │
//       ▼
//   CsvCorpus         → reads Q/A pairs
//       │
//       ▼
//   WordTokenizer     → strips punctuation, splits words
//   (MorphTokenizer)    or splits morphemes via an analyzer
//       │
//       ▼
//   VocabStore        → (infra) builds or loads the vocabulary
//       │
//       ▼
//   SequenceEncoder   → fixed-length rows with <SOS>/<END>/<PAD>
//       │
//       ▼
//   Seq2SeqDataset    → encoder input, decoder input, decoder target
//
// Each module is responsible for exactly one step.

/// Loads the Q/A corpus from CSV
pub mod loader;

/// Punctuation filter and word / morpheme tokenizers
pub mod tokenizer;

/// Fixed-length encoder-input, decoder-input and decoder-target rows
pub mod encoder;

/// Bundles the three encoded arrays for a corpus
pub mod dataset;
