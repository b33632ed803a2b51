//! Word-level n-gram language model and sentence generation.
//!
//! This module provides:
//! - A token arena with reserved sentence markers (`Vocabulary`)
//! - Corpus flattening into a delimited token stream
//! - Fixed-order conditional distribution tables (`NGramModel`)
//! - The multi-order model built from a corpus (`LanguageModel`)
//! - Generation parameters (`GenerationInput`)
//! - The sliding-window sampler (`Generator`)

/// Sentence sampling over a trained model.
///
/// Walks a context window from the start marker and stops on the end marker
/// or when the step bound is reached.
pub mod generator;

/// Language model composed of one `NGramModel` per order `1..=K`.
pub mod language_model;

/// Fixed-order conditional distribution table (`order >= 1`).
///
/// Handles transition counting over a token stream and context lookup.
pub mod ngram_model;

/// Cumulative-weight distribution of the next token for one context.
///
/// Supports maximum-likelihood probabilities and binary-search sampling.
pub mod state;

/// Generation parameters: step bound and output mode.
pub mod generation_input;

/// Corpus to token stream conversion.
pub mod sequence;

/// Token interning and sentence markers.
pub mod vocabulary;
