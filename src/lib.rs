//! Chatbot corpus preprocessing.
//!
//! Builds a persisted word vocabulary from question/answer pairs and
//! encodes text into fixed-length index rows for a seq2seq model:
//!
//! ```no_run
//! use chatbot_prep::{build_or_load_vocabulary, SequenceConfig, SequenceEncoder, WordTokenizer};
//!
//! # fn main() -> chatbot_prep::Result<()> {
//! let tokenizer = WordTokenizer::new();
//! let vocab     = build_or_load_vocabulary("data/ChatBotData.csv", "data/vocabulary.txt", &tokenizer)?;
//! let encoder   = SequenceEncoder::new(&vocab, &tokenizer, &SequenceConfig::default())?;
//! let batch     = encoder.encode_input(&["가끔 궁금해"])?;
//! assert_eq!(batch.ids.ncols(), 25);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;

#[cfg(test)]
pub(crate) mod test_support;

pub use data::{
    dataset::Seq2SeqDataset,
    encoder::{encode_decoder_input, encode_decoder_target, encode_input, EncodedBatch, SequenceEncoder},
    loader::CsvCorpus,
    tokenizer::{MorphTokenizer, WordTokenizer},
};
pub use domain::{
    config::{Markers, SequenceConfig, DEFAULT_MAX_SEQUENCES},
    qa_pair::QaPair,
    traits::{CorpusSource, MorphAnalyzer, Tokenize},
    vocabulary::Vocabulary,
};
pub use error::{PrepError, Result};
pub use infra::{
    array_store::ArrayStore,
    morph_command::CommandAnalyzer,
    vocab_store::{build_or_load_vocabulary, VocabStore},
};
