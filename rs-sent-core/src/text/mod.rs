//! Conversions between raw text and token lists.

/// Sentence splitting and word tokenization of raw corpus text.
pub mod tokenizer;

/// Token list to sentence reassembly with punctuation-aware spacing.
pub mod stitch;
