use std::collections::HashMap;

use rand::Rng;

use super::vocabulary::TokenId;

/// Transition counts accumulated for one context while training.
///
/// Frozen into a [`State`] once the whole stream has been scanned.
#[derive(Debug, Default)]
pub(crate) struct TransitionCounts {
	/// Outgoing transitions indexed by the next token.
	/// Example: { "cat" => 42, "dog" => 3 }
	transitions: HashMap<TokenId, u64>,
}

impl TransitionCounts {
	/// Records an occurrence of a transition toward `next`.
	pub(crate) fn add_transition(&mut self, next: TokenId) {
		*self.transitions.entry(next).or_insert(0) += 1;
	}

	/// Builds the cumulative table used for sampling.
	///
	/// Outcomes are sorted by id so a seeded random source always picks the
	/// same token for the same draw.
	pub(crate) fn into_state(self) -> State {
		let mut transitions: Vec<(TokenId, u64)> = self.transitions.into_iter().collect();
		transitions.sort_unstable_by_key(|(next, _)| *next);

		let mut outcomes = Vec::with_capacity(transitions.len());
		let mut cumulative = Vec::with_capacity(transitions.len());
		let mut total = 0;
		for (next, occurrence) in transitions {
			total += occurrence;
			outcomes.push(next);
			cumulative.push(total);
		}
		State { outcomes, cumulative }
	}
}

/// Conditional distribution of the next token for a single context.
///
/// Conceptually a node in a Markov chain whose outgoing edges are weighted
/// by their number of observations. Probabilities are the maximum-likelihood
/// estimate `count(context, outcome) / count(context)`.
///
/// ## Invariants
/// - `outcomes` and `cumulative` have the same non-zero length
/// - `cumulative` is strictly increasing; its last entry is the context total
#[derive(Debug, Clone)]
pub struct State {
	outcomes: Vec<TokenId>,
	cumulative: Vec<u64>,
}

impl State {
	/// Total number of observations of this context.
	pub fn total(&self) -> u64 {
		self.cumulative.last().copied().unwrap_or(0)
	}

	/// Draws the next token with probability proportional to its count.
	///
	/// One uniform draw in `0..total`, then a binary search over the
	/// cumulative weights. Returns `None` only for an empty state.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<TokenId> {
		let total = self.total();
		if total == 0 {
			return None;
		}
		let r = rng.random_range(0..total);
		let index = self.cumulative.partition_point(|&bound| bound <= r);
		self.outcomes.get(index).copied()
	}

	/// Iterates over `(outcome, probability)` pairs.
	pub fn probabilities(&self) -> impl Iterator<Item = (TokenId, f64)> + '_ {
		let total = self.total() as f64;
		let mut previous = 0;
		self.outcomes.iter().zip(&self.cumulative).map(move |(next, bound)| {
			let count = bound - previous;
			previous = *bound;
			(*next, count as f64 / total)
		})
	}

	/// Probability of one outcome, 0 when it was never observed.
	pub fn probability(&self, next: TokenId) -> f64 {
		self.probabilities()
			.find(|(outcome, _)| *outcome == next)
			.map_or(0.0, |(_, p)| p)
	}

	pub fn len(&self) -> usize {
		self.outcomes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.outcomes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn state(observations: &[TokenId]) -> State {
		let mut counts = TransitionCounts::default();
		for next in observations {
			counts.add_transition(*next);
		}
		counts.into_state()
	}

	#[test]
	fn relative_frequencies() {
		let s = state(&[5, 5, 5, 7]);
		assert_eq!(s.total(), 4);
		assert!((s.probability(5) - 0.75).abs() < 1e-12);
		assert!((s.probability(7) - 0.25).abs() < 1e-12);
		assert_eq!(s.probability(9), 0.0);
	}

	#[test]
	fn single_observation_is_certain() {
		let s = state(&[3]);
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..50 {
			assert_eq!(s.sample(&mut rng), Some(3));
		}
	}

	#[test]
	fn sampling_tracks_weights() {
		let s = state(&[2, 2, 2, 2, 2, 2, 2, 2, 2, 4]);
		let mut rng = StdRng::seed_from_u64(42);
		let hits = (0..10_000).filter(|_| s.sample(&mut rng) == Some(2)).count();
		assert!((8_500..9_500).contains(&hits), "got {hits}");
	}

	#[test]
	fn empty_state_samples_nothing() {
		let s = TransitionCounts::default().into_state();
		assert!(s.is_empty());
		assert_eq!(s.sample(&mut StdRng::seed_from_u64(0)), None);
	}
}
