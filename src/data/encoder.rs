// ============================================================
// Layer 4 — Sequence Encoders
// ============================================================
// Converts variable-length texts into fixed-length index rows.
// All three variants share one skeleton:
//
//   text → tokens → indices (<UNK> fallback) → policy → pad
//
// and differ only in the marker policy:
//
//   encoder input   : [w1 .. wk]            truncate to N, length = k'
//   decoder input   : [<SOS> w1 .. wk]      truncate to N, length = k'
//   decoder target  : [w1 .. wk <END>]      if k >= N keep N-1 words then <END>
//
// With N = 25 and vocab [<PAD>,<SOS>,<END>,<UNK>,hi,there]:
//
//   encoder input  "hi there"  →  [4, 5, 0, 0, ..., 0]   length 2
//   decoder input  "hi there"  →  [1, 4, 5, 0, ..., 0]   length 3
//   decoder target "hi there"  →  [4, 5, 2, 0, ..., 0]
//
// Every row is exactly N wide; the result is an (texts, N) array.

use ndarray::Array2;

use crate::domain::config::SequenceConfig;
use crate::domain::traits::Tokenize;
use crate::domain::vocabulary::Vocabulary;
use crate::error::{PrepError, Result};

/// Encoded rows plus the true (pre-padding) length of each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBatch {
    /// Shape: [texts, max_sequences]
    pub ids: Array2<u32>,

    /// Token count per row before padding, capped at max_sequences
    pub lengths: Vec<usize>,
}

impl EncodedBatch {
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

/// Encodes texts against a fixed vocabulary and tokenizer.
pub struct SequenceEncoder<'a> {
    vocab:         &'a Vocabulary,
    tokenizer:     &'a dyn Tokenize,
    max_sequences: usize,
    pad:           u32,
    sos:           u32,
    end:           u32,
    unk:           u32,
}

impl<'a> SequenceEncoder<'a> {
    /// Create an encoder; fails if `config` does not validate or
    /// names a marker that `vocab` does not contain.
    pub fn new(
        vocab:     &'a Vocabulary,
        tokenizer: &'a dyn Tokenize,
        config:    &SequenceConfig,
    ) -> Result<Self> {
        config.validate()?;

        let marker = |word: &str| {
            vocab.index_of(word).ok_or_else(|| {
                PrepError::InvalidConfig(format!("marker {word:?} is not in the vocabulary"))
            })
        };
        let m = &config.markers;

        Ok(Self {
            vocab,
            tokenizer,
            max_sequences: config.max_sequences,
            pad: marker(&m.pad)?,
            sos: marker(&m.sos)?,
            end: marker(&m.end)?,
            unk: marker(&m.unk)?,
        })
    }

    pub fn max_sequences(&self) -> usize {
        self.max_sequences
    }

    pub fn vocab(&self) -> &Vocabulary {
        self.vocab
    }

    /// Encoder-side input: word indices only, no markers.
    pub fn encode_input<S: AsRef<str>>(&self, texts: &[S]) -> Result<EncodedBatch> {
        let mut rows    = Vec::with_capacity(texts.len());
        let mut lengths = Vec::with_capacity(texts.len());

        for text in texts {
            let mut row = self.lookup(text.as_ref())?;
            row.truncate(self.max_sequences);
            lengths.push(row.len());
            rows.push(row);
        }

        tracing::debug!("Encoded {} encoder-input rows", rows.len());
        Ok(EncodedBatch {
            ids: self.pad_rows(&rows),
            lengths,
        })
    }

    /// Decoder-side input: `<SOS>` followed by word indices.
    ///
    /// SOS is added before truncation, so a text with exactly
    /// `max_sequences` tokens loses its last token.
    pub fn encode_decoder_input<S: AsRef<str>>(&self, texts: &[S]) -> Result<EncodedBatch> {
        let mut rows    = Vec::with_capacity(texts.len());
        let mut lengths = Vec::with_capacity(texts.len());

        for text in texts {
            let mut row = vec![self.sos];
            row.extend(self.lookup(text.as_ref())?);
            row.truncate(self.max_sequences);
            lengths.push(row.len());
            rows.push(row);
        }

        tracing::debug!("Encoded {} decoder-input rows", rows.len());
        Ok(EncodedBatch {
            ids: self.pad_rows(&rows),
            lengths,
        })
    }

    /// Decoder-side target: word indices terminated by exactly one `<END>`.
    pub fn encode_decoder_target<S: AsRef<str>>(&self, texts: &[S]) -> Result<Array2<u32>> {
        let mut rows = Vec::with_capacity(texts.len());

        for text in texts {
            let mut row = self.lookup(text.as_ref())?;
            if row.len() >= self.max_sequences {
                row.truncate(self.max_sequences - 1);
            }
            row.push(self.end);
            rows.push(row);
        }

        tracing::debug!("Encoded {} decoder-target rows", rows.len());
        Ok(self.pad_rows(&rows))
    }

    /// Tokenize and map every token to its index, UNK if absent.
    fn lookup(&self, text: &str) -> Result<Vec<u32>> {
        let tokens = self.tokenizer.tokenize(text)?;
        if tokens.is_empty() {
            tracing::warn!("Text {:?} produced no tokens", text);
        }
        Ok(tokens
            .iter()
            .map(|t| self.vocab.index_of(t).unwrap_or(self.unk))
            .collect())
    }

    /// Copy rows (each at most max_sequences long) into a PAD-filled array.
    fn pad_rows(&self, rows: &[Vec<u32>]) -> Array2<u32> {
        let mut out = Array2::from_elem((rows.len(), self.max_sequences), self.pad);
        for (mut dst, src) in out.rows_mut().into_iter().zip(rows) {
            for (slot, &id) in dst.iter_mut().zip(src) {
                *slot = id;
            }
        }
        out
    }
}

// ─── Free-function forms ──────────────────────────────────────────────────────
// Convenience wrappers for callers that hold the pieces separately.

pub fn encode_input<S: AsRef<str>>(
    texts:     &[S],
    vocab:     &Vocabulary,
    tokenizer: &dyn Tokenize,
    config:    &SequenceConfig,
) -> Result<EncodedBatch> {
    SequenceEncoder::new(vocab, tokenizer, config)?.encode_input(texts)
}

pub fn encode_decoder_input<S: AsRef<str>>(
    texts:     &[S],
    vocab:     &Vocabulary,
    tokenizer: &dyn Tokenize,
    config:    &SequenceConfig,
) -> Result<EncodedBatch> {
    SequenceEncoder::new(vocab, tokenizer, config)?.encode_decoder_input(texts)
}

pub fn encode_decoder_target<S: AsRef<str>>(
    texts:     &[S],
    vocab:     &Vocabulary,
    tokenizer: &dyn Tokenize,
    config:    &SequenceConfig,
) -> Result<Array2<u32>> {
    SequenceEncoder::new(vocab, tokenizer, config)?.encode_decoder_target(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokenizer::WordTokenizer;
    use crate::domain::config::Markers;

    fn vocab() -> Vocabulary {
        let words = ["<PAD>", "<SOS>", "<END>", "<UNK>", "hi", "there"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        Vocabulary::from_words(words, &Markers::default()).unwrap()
    }

    fn expected(prefix: &[u32]) -> Vec<u32> {
        let mut row = prefix.to_vec();
        row.resize(25, 0);
        row
    }

    /// `n` space-separated copies of "hi"
    fn repeated(n: usize) -> String {
        vec!["hi"; n].join(" ")
    }

    #[test]
    fn test_encode_input_scenario() {
        let v   = vocab();
        let out = encode_input(&["hi there"], &v, &WordTokenizer, &SequenceConfig::default()).unwrap();
        assert_eq!(out.ids.shape(), &[1, 25]);
        assert_eq!(out.ids.row(0).to_vec(), expected(&[4, 5]));
        assert_eq!(out.lengths, vec![2]);
    }

    #[test]
    fn test_unknown_word_scenario() {
        let v   = vocab();
        let out = encode_input(&["hi bye"], &v, &WordTokenizer, &SequenceConfig::default()).unwrap();
        assert_eq!(out.ids.row(0).to_vec(), expected(&[4, 3]));
    }

    #[test]
    fn test_decoder_target_scenario() {
        let v   = vocab();
        let out = encode_decoder_target(&["hi there"], &v, &WordTokenizer, &SequenceConfig::default())
            .unwrap();
        assert_eq!(out.row(0).to_vec(), expected(&[4, 5, 2]));
    }

    #[test]
    fn test_punctuation_is_stripped_before_lookup() {
        let v   = vocab();
        let out = encode_input(&["hi, there!"], &v, &WordTokenizer, &SequenceConfig::default()).unwrap();
        assert_eq!(out.ids.row(0).to_vec(), expected(&[4, 5]));
    }

    #[test]
    fn test_encode_input_truncates_long_text() {
        let v   = vocab();
        let enc = SequenceEncoder::new(&v, &WordTokenizer, &SequenceConfig::default()).unwrap();
        let out = enc.encode_input(&[repeated(30)]).unwrap();
        assert_eq!(out.lengths, vec![25]);
        assert!(out.ids.iter().all(|&id| id == 4));
    }

    #[test]
    fn test_decoder_input_starts_with_sos() {
        let v   = vocab();
        let enc = SequenceEncoder::new(&v, &WordTokenizer, &SequenceConfig::default()).unwrap();
        let out = enc.encode_decoder_input(&["hi there", "", "bye"]).unwrap();
        assert!(out.ids.rows().into_iter().all(|r| r[0] == 1));
        assert_eq!(out.ids.row(0).to_vec(), expected(&[1, 4, 5]));
        assert_eq!(out.lengths, vec![3, 1, 2]);
    }

    #[test]
    fn test_decoder_input_drops_last_token_at_boundary() {
        let v    = vocab();
        let enc  = SequenceEncoder::new(&v, &WordTokenizer, &SequenceConfig::default()).unwrap();
        let text = format!("{} there", repeated(24));
        let out  = enc.encode_decoder_input(&[text]).unwrap();
        let row  = out.ids.row(0).to_vec();
        assert_eq!(row.len(), 25);
        assert_eq!(row[0], 1);
        assert!(row[1..].iter().all(|&id| id == 4), "trailing 'there' must be dropped");
        assert_eq!(out.lengths, vec![25]);
    }

    #[test]
    fn test_decoder_target_forces_end_in_last_slot() {
        let v   = vocab();
        let enc = SequenceEncoder::new(&v, &WordTokenizer, &SequenceConfig::default()).unwrap();
        for n in [25, 40] {
            let out = enc.encode_decoder_target(&[repeated(n)]).unwrap();
            let row = out.row(0).to_vec();
            assert_eq!(row[24], 2);
            assert!(row[..24].iter().all(|&id| id == 4));
        }
    }

    #[test]
    fn test_decoder_target_single_end_followed_by_pad() {
        let v     = vocab();
        let enc   = SequenceEncoder::new(&v, &WordTokenizer, &SequenceConfig::default()).unwrap();
        let texts = vec![String::new(), "hi".into(), repeated(24), repeated(25), repeated(26)];
        let out   = enc.encode_decoder_target(&texts).unwrap();
        for row in out.rows() {
            let ends: Vec<usize> = row
                .iter()
                .enumerate()
                .filter(|&(_, &id)| id == 2)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(ends.len(), 1);
            assert!(row.iter().skip(ends[0] + 1).all(|&id| id == 0));
        }
    }

    #[test]
    fn test_values_stay_in_vocab_range() {
        let v     = vocab();
        let enc   = SequenceEncoder::new(&v, &WordTokenizer, &SequenceConfig::default()).unwrap();
        let texts = ["hi there", "who are you?", "", "there there there"];
        let size  = v.len() as u32;
        let a = enc.encode_input(&texts).unwrap();
        let b = enc.encode_decoder_input(&texts).unwrap();
        let c = enc.encode_decoder_target(&texts).unwrap();
        for arr in [&a.ids, &b.ids, &c] {
            assert_eq!(arr.shape(), &[4, 25]);
            assert!(arr.iter().all(|&id| id < size));
        }
    }

    #[test]
    fn test_custom_length() {
        let v   = vocab();
        let cfg = SequenceConfig::new(3);
        let enc = SequenceEncoder::new(&v, &WordTokenizer, &cfg).unwrap();
        assert_eq!(enc.encode_input(&["hi there hi there"]).unwrap().ids.row(0).to_vec(), vec![4, 5, 4]);
        assert_eq!(enc.encode_decoder_input(&["hi there hi"]).unwrap().ids.row(0).to_vec(), vec![1, 4, 5]);
        assert_eq!(enc.encode_decoder_target(&["hi there hi"]).unwrap().row(0).to_vec(), vec![4, 5, 2]);
    }

    #[test]
    fn test_length_one_target_is_only_end() {
        let v   = vocab();
        let enc = SequenceEncoder::new(&v, &WordTokenizer, &SequenceConfig::new(1)).unwrap();
        assert_eq!(enc.encode_decoder_target(&["hi there"]).unwrap().row(0).to_vec(), vec![2]);
    }

    #[test]
    fn test_zero_length_config_rejected() {
        let v = vocab();
        assert!(SequenceEncoder::new(&v, &WordTokenizer, &SequenceConfig::new(0)).is_err());
    }

    #[test]
    fn test_markers_come_from_config() {
        let words = ["<PAD>", "<SOS>", "<END>", "<UNK>", "hi", "[BOS]"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let v = Vocabulary::from_words(words, &Markers::default()).unwrap();

        let mut cfg = SequenceConfig::new(3);
        cfg.markers.sos = "[BOS]".to_string();
        let enc = SequenceEncoder::new(&v, &WordTokenizer, &cfg).unwrap();
        assert_eq!(enc.encode_decoder_input(&["hi"]).unwrap().ids.row(0).to_vec(), vec![5, 4, 0]);
    }

    #[test]
    fn test_marker_missing_from_vocab_rejected() {
        let v       = vocab();
        let mut cfg = SequenceConfig::default();
        cfg.markers.end = "<EOS>".to_string();
        assert!(matches!(
            SequenceEncoder::new(&v, &WordTokenizer, &cfg),
            Err(PrepError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_input_gives_empty_array() {
        let v   = vocab();
        let enc = SequenceEncoder::new(&v, &WordTokenizer, &SequenceConfig::default()).unwrap();
        let out = enc.encode_input::<&str>(&[]).unwrap();
        assert_eq!(out.ids.shape(), &[0, 25]);
        assert!(out.is_empty());
    }
}
