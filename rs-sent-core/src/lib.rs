//! Word-level Markov sentence generation.
//!
//! This crate provides:
//! - Corpus tokenization into sentences of lowercase word tokens
//! - A variable-order n-gram language model (orders `1..=K`, maximum-likelihood)
//! - Sentence sampling over a sliding context window, with a step bound
//! - Stitching of token lists back into readable text
//!
//! ```no_run
//! use rs_sent_core::io::read_corpus;
//! use rs_sent_core::model::generation_input::OutputMode;
//! use rs_sent_core::model::language_model::LanguageModel;
//!
//! # fn main() -> Result<(), rs_sent_core::error::SentGenError> {
//! let corpus = read_corpus("corpus.txt")?;
//! let model = LanguageModel::new(&corpus, 2)?;
//! println!("{}", model.generate(OutputMode::Text)?.into_text());
//! # Ok(())
//! # }
//! ```

/// Error type shared by every fallible operation.
pub mod error;

/// Language model, generation parameters and the sentence generator.
pub mod model;

/// Tokenizer and stitcher.
pub mod text;

/// Corpus file loading.
pub mod io;

pub use error::{Result, SentGenError};
pub use model::generation_input::{GenerationInput, OutputMode};
pub use model::generator::{Generator, Sentence};
pub use model::language_model::{LanguageModel, ModelStats};
pub use text::stitch::stitch;
