// ============================================================
// Layer 3 — Sequence Configuration
// ============================================================
// Holds the reserved marker strings and the fixed sequence
// length shared by the vocabulary builder and all encoders.
//
// Defaults:
//   <PAD> <SOS> <END> <UNK>  → lines 0..=3 of a fresh vocabulary
//   max_sequences = 25       → every encoded row has 25 slots

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};

/// Default number of slots in every encoded row.
pub const DEFAULT_MAX_SEQUENCES: usize = 25;

/// The four reserved vocabulary entries, in the order they are
/// written at the top of a freshly built vocabulary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    pub pad: String,
    pub sos: String,
    pub end: String,
    pub unk: String,
}

impl Markers {
    /// Markers in vocabulary order: PAD, SOS, END, UNK.
    pub fn in_order(&self) -> [&str; 4] {
        [&self.pad, &self.sos, &self.end, &self.unk]
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            pad: "<PAD>".to_string(),
            sos: "<SOS>".to_string(),
            end: "<END>".to_string(),
            unk: "<UNK>".to_string(),
        }
    }
}

/// Settings passed explicitly to the vocabulary builder and encoders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Length of every encoded row
    pub max_sequences: usize,

    /// Reserved marker strings
    pub markers: Markers,
}

impl SequenceConfig {
    pub fn new(max_sequences: usize) -> Self {
        Self { max_sequences, ..Self::default() }
    }

    /// Check that the settings can produce well-formed rows.
    ///
    /// A decoder target always needs one slot for `<END>`, so
    /// `max_sequences` must be at least 1, and the four markers
    /// must be distinct non-empty strings without whitespace
    /// (the vocabulary file stores one word per line).
    pub fn validate(&self) -> Result<()> {
        if self.max_sequences == 0 {
            return Err(PrepError::InvalidConfig(
                "max_sequences must be at least 1".to_string(),
            ));
        }

        let markers = self.markers.in_order();
        for (i, m) in markers.iter().enumerate() {
            if m.is_empty() || m.chars().any(char::is_whitespace) {
                return Err(PrepError::InvalidConfig(format!(
                    "marker {m:?} must be non-empty and contain no whitespace"
                )));
            }
            if markers[..i].contains(m) {
                return Err(PrepError::InvalidConfig(format!("marker {m:?} is repeated")));
            }
        }
        Ok(())
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            max_sequences: DEFAULT_MAX_SEQUENCES,
            markers:       Markers::default(),
        }
    }
}
