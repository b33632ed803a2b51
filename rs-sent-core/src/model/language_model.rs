use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use super::ngram_model::NGramModel;
use super::sequence::delimit_sentences;
use super::state::State;
use super::vocabulary::{END, END_TOKEN, START, START_TOKEN, TokenId, Vocabulary};
use crate::error::{Result, SentGenError};

/// Word-level language model of orders `1..=chain_length`.
///
/// This struct manages:
/// - `ngrams`: one [`NGramModel`] per context order.
/// - `vocabulary`: the token arena shared by every order.
///
/// Built once from a corpus snapshot and immutable afterwards, so a single
/// instance can be shared read-only between threads.
#[derive(Debug, Clone)]
pub struct LanguageModel {
	chain_length: usize,
	stream_length: usize,
	ngrams: BTreeMap<usize, NGramModel>,
	vocabulary: Vocabulary,
}

/// Summary of a trained model, suitable for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelStats {
	pub chain_length: usize,
	pub vocabulary_size: usize,
	pub stream_length: usize,
	/// Number of distinct contexts per order, lowest order first.
	pub contexts_per_order: Vec<usize>,
}

impl LanguageModel {
	/// Trains a model from a tokenized corpus.
	///
	/// # Parameters
	/// - `sentences`: sentences of word tokens, as produced by the tokenizer.
	/// - `chain_length`: maximum number of preceding tokens used as context.
	///
	/// # Errors
	/// Returns [`SentGenError::InvalidChainLength`] if `chain_length < 1`.
	///
	/// # Notes
	/// - Order 1 is trained from bigrams, order `n` from runs of `n + 1` tokens.
	/// - An empty corpus produces an empty model; generation from it fails
	///   with [`SentGenError::EmptyModel`].
	pub fn new<S, T>(sentences: &[S], chain_length: usize) -> Result<Self>
	where
		S: AsRef<[T]>,
		T: AsRef<str>,
	{
		if chain_length < 1 {
			return Err(SentGenError::InvalidChainLength(chain_length));
		}

		let mut vocabulary = Vocabulary::default();
		let stream = delimit_sentences(sentences, &mut vocabulary);

		let ngrams: BTreeMap<usize, NGramModel> = (1..=chain_length)
			.map(|order| (order, NGramModel::train(&stream, order)))
			.collect();

		debug!(
			"trained {} orders over {} tokens ({} distinct): contexts per order {:?}",
			chain_length,
			stream.len(),
			vocabulary.len(),
			ngrams.values().map(NGramModel::len).collect::<Vec<_>>()
		);

		Ok(Self { chain_length, stream_length: stream.len(), ngrams, vocabulary })
	}

	/// Maximum context order (K).
	pub fn chain_length(&self) -> usize {
		self.chain_length
	}

	/// Number of distinct corpus tokens, markers excluded.
	pub fn vocabulary_len(&self) -> usize {
		self.vocabulary.len()
	}

	/// Trained orders, ascending. Always `1..=chain_length`.
	pub fn orders(&self) -> impl Iterator<Item = usize> + '_ {
		self.ngrams.keys().copied()
	}

	/// Returns `true` when no transitions were learned at all.
	pub fn is_empty(&self) -> bool {
		self.ngrams.values().all(NGramModel::is_empty)
	}

	pub(crate) fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	pub(crate) fn ngram(&self, order: usize) -> Option<&NGramModel> {
		self.ngrams.get(&order)
	}

	/// Looks up the distribution for a context of ids.
	///
	/// The order is the context length, for every order including 1.
	pub(crate) fn state(&self, context: &[TokenId]) -> Option<&State> {
		self.ngrams.get(&context.len())?.state(context)
	}

	/// Outcome probabilities for a context given as text.
	///
	/// `context` must hold exactly `order` tokens; `"<s>"` / `"</s>"` name
	/// the sentence markers. Returns `None` for an unknown order, an unknown
	/// token, or a context never observed.
	pub fn distribution(&self, order: usize, context: &[&str]) -> Option<Vec<(&str, f64)>> {
		if context.len() != order {
			return None;
		}
		let ids = context
			.iter()
			.map(|token| self.lookup(token))
			.collect::<Option<Vec<_>>>()?;
		let state = self.ngram(order)?.state(&ids)?;
		Some(
			state
				.probabilities()
				.map(|(next, p)| (self.vocabulary.resolve(next), p))
				.collect(),
		)
	}

	/// Iterates over the observed contexts of one order, resolved to text.
	pub fn contexts(&self, order: usize) -> impl Iterator<Item = Vec<&str>> + '_ {
		self.ngram(order)
			.into_iter()
			.flat_map(NGramModel::states)
			.map(|(context, _)| context.iter().map(|id| self.vocabulary.resolve(*id)).collect())
	}

	/// Builds a reporting summary.
	pub fn stats(&self) -> ModelStats {
		ModelStats {
			chain_length: self.chain_length,
			vocabulary_size: self.vocabulary.len(),
			stream_length: self.stream_length,
			contexts_per_order: self.ngrams.values().map(NGramModel::len).collect(),
		}
	}

	fn lookup(&self, token: &str) -> Option<TokenId> {
		match token {
			START_TOKEN => Some(START),
			END_TOKEN => Some(END),
			_ => self.vocabulary.id(token),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn corpus() -> Vec<Vec<&'static str>> {
		vec![vec!["the", "cat", "sat"], vec!["the", "dog", "sat"]]
	}

	#[test]
	fn rejects_zero_chain_length() {
		let err = LanguageModel::new(&corpus(), 0).unwrap_err();
		assert!(matches!(err, SentGenError::InvalidChainLength(0)));
	}

	#[test]
	fn one_table_per_order() {
		let model = LanguageModel::new(&corpus(), 3).unwrap();
		assert_eq!(model.orders().collect::<Vec<_>>(), [1, 2, 3]);
		for order in 1..=3 {
			assert!(model.contexts(order).all(|context| context.len() == order));
		}
	}

	#[test]
	fn mle_distribution() {
		let model = LanguageModel::new(&corpus(), 2).unwrap();
		let mut dist = model.distribution(1, &["the"]).unwrap();
		dist.sort_by(|a, b| a.0.cmp(b.0));
		assert_eq!(dist, [("cat", 0.5), ("dog", 0.5)]);

		let dist = model.distribution(2, &["<s>", "the"]).unwrap();
		assert_eq!(dist.len(), 2);
		assert_eq!(model.distribution(2, &["cat", "sat"]).unwrap(), [("</s>", 1.0)]);
	}

	#[test]
	fn unknown_contexts_are_absent() {
		let model = LanguageModel::new(&corpus(), 2).unwrap();
		assert!(model.distribution(1, &["bird"]).is_none());
		assert!(model.distribution(2, &["sat", "the"]).is_none());
		assert!(model.distribution(2, &["the"]).is_none());
		assert!(model.distribution(4, &["a", "b", "c", "d"]).is_none());
	}

	#[test]
	fn stats_report_sizes() {
		let model = LanguageModel::new(&corpus(), 2).unwrap();
		let stats = model.stats();
		assert_eq!(stats.vocabulary_size, 4);
		assert_eq!(stats.stream_length, 10);
		assert_eq!(stats.contexts_per_order.len(), 2);
	}

	#[test]
	fn empty_corpus_gives_empty_model() {
		let empty: Vec<Vec<String>> = Vec::new();
		let model = LanguageModel::new(&empty, 2).unwrap();
		assert!(model.is_empty());
		assert_eq!(model.stats().stream_length, 0);
	}
}
