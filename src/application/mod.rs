// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal each.
//
// Rules for this layer:
//   - No tokenization or encoding logic here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination

/// Corpus → vocabulary → encoded .npy arrays
pub mod prepare_use_case;

/// Encode / decode ad-hoc text with an existing vocabulary
pub mod inspect_use_case;
