use super::state::{State, TransitionCounts};
use super::vocabulary::TokenId;
use std::collections::HashMap;

/// Conditional distribution table for one context order.
///
/// The `NGramModel` of order `n` stores one [`State`] per context of `n`
/// consecutive tokens and predicts the token that follows it.
///
/// # Responsibilities
/// - Build the table from every contiguous run of `n + 1` tokens
/// - Look up the distribution of a context
///
/// # Invariants
/// - `order` is always >= 1
/// - Every key has exactly `order` tokens; order 1 uses one-element keys so
///   all orders share the same lookup path
/// - Every stored state has at least one observed transition
#[derive(Clone, Debug)]
pub struct NGramModel {
	/// Number of context tokens
	order: usize,

	/// Mapping from a context (length `order`) to its distribution
	states: HashMap<Box<[TokenId]>, State>,
}

impl NGramModel {
	/// Trains a table of the given order over a token stream.
	///
	/// A stream shorter than `order + 1` tokens yields an empty table.
	pub fn train(stream: &[TokenId], order: usize) -> Self {
		let mut counts: HashMap<&[TokenId], TransitionCounts> = HashMap::new();
		for window in stream.windows(order + 1) {
			let (context, next) = window.split_at(order);
			counts.entry(context).or_default().add_transition(next[0]);
		}

		let states = counts
			.into_iter()
			.map(|(context, transitions)| (Box::from(context), transitions.into_state()))
			.collect();
		Self { order, states }
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Returns the distribution for `context`, or `None` if it was never observed.
	pub fn state(&self, context: &[TokenId]) -> Option<&State> {
		self.states.get(context)
	}

	/// Iterates over all observed contexts and their distributions.
	pub fn states(&self) -> impl Iterator<Item = (&[TokenId], &State)> {
		self.states.iter().map(|(context, state)| (&**context, state))
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}
}
