use thiserror::Error;

/// Errors raised while building a language model or generating from it.
#[derive(Debug, Error)]
pub enum SentGenError {
	/// The chain length (maximum context order) must be at least 1.
	#[error("chain length must be >= 1, got {0}")]
	InvalidChainLength(usize),

	/// The model was trained on a corpus that produced no transitions.
	#[error("model is empty: the corpus produced no transitions")]
	EmptyModel,

	/// The step bound was reached before the end-of-sentence marker was drawn.
	#[error("generation exhausted after {steps} steps without reaching end of sentence")]
	GenerationExhausted {
		/// Number of tokens sampled before giving up
		steps: usize,
	},

	/// The generator asked for a context the model never observed.
	///
	/// The generator only walks contexts it reached by sampling, so this
	/// signals a defect rather than a property of the corpus.
	#[error("context {context:?} was never observed at order {order}")]
	UnseenContext {
		/// Order of the queried table
		order: usize,
		/// The offending context, resolved to strings
		context: Vec<String>,
	},

	/// A generation bound of zero steps was requested.
	#[error("max_steps must be >= 1")]
	InvalidMaxSteps,

	/// Reading the corpus failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SentGenError>;
