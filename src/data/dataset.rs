use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::data::encoder::SequenceEncoder;
use crate::domain::qa_pair::QaPair;
use crate::error::Result;

/// Shapes of a built dataset, for logging and the output manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetShape {
    pub samples:       usize,
    pub max_sequences: usize,
}

/// The three model inputs for one corpus.
/// Questions feed the encoder; answers feed the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seq2SeqDataset {
    pub encoder_input:   Array2<u32>,
    pub encoder_lengths: Vec<usize>,
    pub decoder_input:   Array2<u32>,
    pub decoder_lengths: Vec<usize>,
    pub decoder_target:  Array2<u32>,
}

impl Seq2SeqDataset {
    pub fn build(pairs: &[QaPair], encoder: &SequenceEncoder<'_>) -> Result<Self> {
        let questions: Vec<&str> = pairs.iter().map(|p| p.question.as_str()).collect();
        let answers:   Vec<&str> = pairs.iter().map(|p| p.answer.as_str()).collect();

        let enc_in  = encoder.encode_input(&questions)?;
        let dec_in  = encoder.encode_decoder_input(&answers)?;
        let dec_out = encoder.encode_decoder_target(&answers)?;

        Ok(Self {
            encoder_input:   enc_in.ids,
            encoder_lengths: enc_in.lengths,
            decoder_input:   dec_in.ids,
            decoder_lengths: dec_in.lengths,
            decoder_target:  dec_out,
        })
    }

    pub fn len(&self) -> usize {
        self.encoder_lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoder_lengths.is_empty()
    }

    pub fn shape(&self) -> DatasetShape {
        DatasetShape {
            samples:       self.len(),
            max_sequences: self.encoder_input.ncols(),
        }
    }
}
