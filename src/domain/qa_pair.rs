// ============================================================
// Layer 3 — QaPair Domain Type
// ============================================================
// One row of the chatbot corpus: a question and its answer.
//
// The corpus CSV names these columns `Q` and `A`; the serde
// renames let the csv reader deserialize rows directly.
// Any additional columns (labels, ids) are ignored.
//
// Example row:
//   Q: "12시 땡!"
//   A: "하루가 또 가네요."

use serde::{Deserialize, Serialize};

/// A single question/answer record from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    /// Text fed to the encoder
    #[serde(rename = "Q")]
    pub question: String,

    /// Text the decoder learns to produce
    #[serde(rename = "A")]
    pub answer: String,
}

impl QaPair {
    /// Create a new QaPair
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer:   answer.into(),
        }
    }
}

/// Flatten pairs into one list of texts: all questions in row
/// order, then all answers in row order.
pub fn flatten_texts(pairs: &[QaPair]) -> Vec<&str> {
    pairs
        .iter()
        .map(|p| p.question.as_str())
        .chain(pairs.iter().map(|p| p.answer.as_str()))
        .collect()
}
