use log::{trace, warn};
use rand::Rng;

use crate::error::{Result, SentGenError};
use crate::model::generation_input::{GenerationInput, OutputMode};
use crate::model::language_model::LanguageModel;
use crate::model::vocabulary::{END, START, TokenId};
use crate::text::stitch::stitch;

/// A generated sentence in the requested [`OutputMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentence {
	Text(String),
	Tokens(Vec<String>),
}

impl Sentence {
	/// Returns the stitched form, stitching a token list on demand.
	pub fn into_text(self) -> String {
		match self {
			Sentence::Text(text) => text,
			Sentence::Tokens(tokens) => stitch(&tokens),
		}
	}
}

/// Sliding window of the most recently emitted tokens.
///
/// Starts as `[START]`, grows to `capacity`, then evicts its oldest token
/// on every push.
///
/// # Invariants
/// - `1 <= len() <= capacity`
#[derive(Debug, Clone)]
pub struct ContextWindow {
	tokens: Vec<TokenId>,
	capacity: usize,
}

impl ContextWindow {
	pub fn new(capacity: usize) -> Self {
		let capacity = capacity.max(1);
		let mut tokens = Vec::with_capacity(capacity + 1);
		tokens.push(START);
		Self { tokens, capacity }
	}

	/// Appends `next`, evicting the oldest token once the window is full.
	pub fn push(&mut self, next: TokenId) {
		self.tokens.push(next);
		if self.tokens.len() > self.capacity {
			self.tokens.remove(0);
		}
	}

	/// The current context; its length is the order to query.
	pub fn as_slice(&self) -> &[TokenId] {
		&self.tokens
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

/// Samples sentences from a trained [`LanguageModel`].
///
/// # Responsibilities
/// - Walk the context window from `START` until `END` is drawn
/// - Query the order matching the window length (shortest first, up to K)
/// - Stop with [`SentGenError::GenerationExhausted`] once `max_steps` is hit
#[derive(Debug, Clone)]
pub struct Generator<'m> {
	model: &'m LanguageModel,
	input: GenerationInput,
}

impl<'m> Generator<'m> {
	pub fn new(model: &'m LanguageModel, input: GenerationInput) -> Self {
		Self { model, input }
	}

	pub fn input(&self) -> &GenerationInput {
		&self.input
	}

	/// Generates one sentence using the thread-local random source.
	pub fn generate(&self) -> Result<Sentence> {
		self.generate_with(&mut rand::rng())
	}

	/// Generates one sentence drawing from `rng`.
	///
	/// Callers wanting reproducible output pass a seeded generator.
	pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sentence> {
		let ids = self.sample_ids(rng)?;
		let vocabulary = self.model.vocabulary();
		let tokens: Vec<String> = ids.iter().map(|id| vocabulary.resolve(*id).to_owned()).collect();

		Ok(match self.input.output {
			OutputMode::Tokens => Sentence::Tokens(tokens),
			OutputMode::Text => Sentence::Text(stitch(&tokens)),
		})
	}

	/// Core sampling loop, returning the emitted ids without markers.
	fn sample_ids<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<TokenId>> {
		if self.model.is_empty() {
			return Err(SentGenError::EmptyModel);
		}

		let mut window = ContextWindow::new(self.model.chain_length());
		let mut sentence = Vec::new();
		for _ in 0..self.input.max_steps() {
			let context = window.as_slice();
			let Some(state) = self.model.state(context) else {
				return Err(self.unseen(context));
			};
			let Some(next) = state.sample(rng) else {
				return Err(self.unseen(context));
			};
			trace!("order {} -> {}", context.len(), self.model.vocabulary().resolve(next));

			if next == END {
				return Ok(sentence);
			}
			window.push(next);
			sentence.push(next);
		}

		warn!(
			"no end of sentence after {} steps ({} tokens emitted)",
			self.input.max_steps(),
			sentence.len()
		);
		Err(SentGenError::GenerationExhausted { steps: self.input.max_steps() })
	}

	fn unseen(&self, context: &[TokenId]) -> SentGenError {
		let vocabulary = self.model.vocabulary();
		SentGenError::UnseenContext {
			order: context.len(),
			context: context.iter().map(|id| vocabulary.resolve(*id).to_owned()).collect(),
		}
	}
}

impl LanguageModel {
	/// Generates one sentence in the given output mode.
	///
	/// Shorthand for a [`Generator`] with default parameters.
	pub fn generate(&self, output: OutputMode) -> Result<Sentence> {
		Generator::new(self, GenerationInput::new(output)).generate()
	}
}
