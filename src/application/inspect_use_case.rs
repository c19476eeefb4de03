// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Loads an existing vocabulary and encodes or decodes ad-hoc
// texts with it. Used to check what the model will actually see
// for a given sentence, and to read model output back as words.

use anyhow::{Context, Result};
use ndarray::Array2;

use crate::application::prepare_use_case::build_tokenizer;
use crate::data::encoder::SequenceEncoder;
use crate::domain::{config::SequenceConfig, traits::Tokenize, vocabulary::Vocabulary};
use crate::infra::vocab_store::VocabStore;

/// Which of the three encoders to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    EncoderInput,
    DecoderInput,
    DecoderTarget,
}

/// Encoded rows; lengths are absent for decoder targets.
#[derive(Debug, Clone)]
pub struct InspectOutput {
    pub ids:     Array2<u32>,
    pub lengths: Option<Vec<usize>>,
}

pub struct InspectUseCase {
    vocab:     Vocabulary,
    tokenizer: Box<dyn Tokenize>,
    config:    SequenceConfig,
}

impl InspectUseCase {
    /// Load the vocabulary at `vocab_path`. It must already exist.
    pub fn new(vocab_path: &str, max_sequences: usize, morph_command: &[String]) -> Result<Self> {
        let vocab = VocabStore::new(vocab_path)
            .load()
            .with_context(|| format!("Cannot load vocabulary '{vocab_path}'. Run 'prepare' or 'vocab' first."))?;

        Ok(Self {
            vocab,
            tokenizer: build_tokenizer(morph_command),
            config:    SequenceConfig::new(max_sequences),
        })
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn encode(&self, kind: SequenceKind, texts: &[String]) -> Result<InspectOutput> {
        let encoder = SequenceEncoder::new(&self.vocab, self.tokenizer.as_ref(), &self.config)?;
        let out = match kind {
            SequenceKind::EncoderInput => {
                let batch = encoder.encode_input(texts)?;
                InspectOutput { ids: batch.ids, lengths: Some(batch.lengths) }
            }
            SequenceKind::DecoderInput => {
                let batch = encoder.encode_decoder_input(texts)?;
                InspectOutput { ids: batch.ids, lengths: Some(batch.lengths) }
            }
            SequenceKind::DecoderTarget => InspectOutput {
                ids:     encoder.encode_decoder_target(texts)?,
                lengths: None,
            },
        };
        Ok(out)
    }

    pub fn decode(&self, ids: &[u32]) -> String {
        self.vocab.decode(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{scratch, TempDir, WriteFile};

    fn use_case(dir: &TempDir) -> InspectUseCase {
        let path = dir.write("vocab.txt", "<PAD>\n<SOS>\n<END>\n<UNK>\nhi\nthere\n");
        InspectUseCase::new(&path.display().to_string(), 25, &[]).unwrap()
    }

    #[test]
    fn test_encode_each_kind() {
        let dir = scratch();
        let uc  = use_case(&dir);
        let texts = vec!["hi there".to_string()];

        let a = uc.encode(SequenceKind::EncoderInput, &texts).unwrap();
        assert_eq!(a.ids.row(0).to_vec()[..3], [4, 5, 0]);
        assert_eq!(a.lengths, Some(vec![2]));

        let b = uc.encode(SequenceKind::DecoderInput, &texts).unwrap();
        assert_eq!(b.ids.row(0).to_vec()[..4], [1, 4, 5, 0]);

        let c = uc.encode(SequenceKind::DecoderTarget, &texts).unwrap();
        assert_eq!(c.ids.row(0).to_vec()[..4], [4, 5, 2, 0]);
        assert!(c.lengths.is_none());
    }

    #[test]
    fn test_decode() {
        let dir = scratch();
        assert_eq!(use_case(&dir).decode(&[1, 5, 4, 2, 0]), "there hi");
    }

    #[test]
    fn test_missing_vocab_is_an_error() {
        let dir = scratch();
        let path = dir.path().join("vocab.txt").display().to_string();
        assert!(InspectUseCase::new(&path, 25, &[]).is_err());
    }
}
