// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs and traits describing what the pipeline works on:
// corpus rows, the vocabulary index, sequence settings, and the
// pluggable tokenizer / corpus abstractions.
//
// Rules for this layer:
//   - NO file I/O
//   - NO CSV, regex or ndarray types
//   - Only plain Rust structs, enums, and traits

/// A question-answer corpus row
pub mod qa_pair;

/// Word ↔ index mapping with resolved marker indices
pub mod vocabulary;

/// Marker strings and fixed sequence length
pub mod config;

/// Core abstractions (traits) that other layers implement
pub mod traits;
