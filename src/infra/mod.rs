// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches files or external processes:
//
//   vocab_store.rs   — Vocabulary persistence
//                      Builds the word list from the corpus if no
//                      vocabulary file exists, otherwise loads the
//                      saved one so indices never shift.
//
//   array_store.rs   — Encoded dataset persistence
//                      Writes the encoder/decoder arrays as .npy
//                      files plus a JSON record of the settings.
//
//   morph_command.rs — External morphological analyzer
//                      Pipes text through a user-supplied program.

/// Vocabulary file build / save / load
pub mod vocab_store;

/// .npy output of encoded datasets
pub mod array_store;

/// Morpheme analyzer backed by an external command
pub mod morph_command;
