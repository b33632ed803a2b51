use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_sent_core::{GenerationInput, Generator, LanguageModel, OutputMode, SentGenError, Sentence, stitch};

const WORDS: [&str; 12] = ["the", "cat", "dog", "sat", ",", ".", "(", ")", "n't", "'s", "``", "''"];

fn sentences() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
	prop::collection::vec(prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..8), 0..10)
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(200))]

	#[test]
	fn stitch_is_a_pure_function(tokens in prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..20)) {
		let first = stitch(&tokens);
		let _ = stitch(&["(", "unrelated", ")"]);
		prop_assert_eq!(stitch(&tokens), first);
	}

	#[test]
	fn stitch_never_adds_characters(tokens in prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..20)) {
		let stitched = stitch(&tokens);
		let input_len: usize = tokens.iter().map(|token| token.len()).sum();
		prop_assert!(stitched.replace(' ', "").len() <= input_len);
	}

	#[test]
	fn every_distribution_sums_to_one(corpus in sentences(), chain_length in 1usize..5) {
		let model = LanguageModel::new(&corpus, chain_length).unwrap();
		prop_assert_eq!(model.orders().count(), chain_length);
		for order in model.orders() {
			for context in model.contexts(order) {
				prop_assert_eq!(context.len(), order);
				let total: f64 = model.distribution(order, &context).unwrap().iter().map(|(_, p)| p).sum();
				prop_assert!((total - 1.0).abs() < 1e-9);
			}
		}
	}

	#[test]
	fn generation_never_hits_an_unseen_context(corpus in sentences(), chain_length in 1usize..5, seed in any::<u64>()) {
		let model = LanguageModel::new(&corpus, chain_length).unwrap();
		let input = GenerationInput::new(OutputMode::Tokens).with_max_steps(500).unwrap();
		let generator = Generator::new(&model, input);
		let mut rng = StdRng::seed_from_u64(seed);

		match generator.generate_with(&mut rng) {
			Ok(Sentence::Tokens(tokens)) => {
				prop_assert!(tokens.iter().all(|token| WORDS.contains(&token.as_str())));
			}
			Err(SentGenError::EmptyModel) => prop_assert!(corpus.is_empty()),
			Err(SentGenError::GenerationExhausted { .. }) => {}
			other => prop_assert!(false, "unexpected result {:?}", other),
		}
	}
}
