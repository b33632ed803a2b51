use super::vocabulary::{END, START, TokenId, Vocabulary};

/// Tokens dropped from the stream before training.
pub const IGNORED: [&str; 2] = ["\"", "'"];

/// Flattens a tokenized corpus into one stream of token ids.
///
/// Every sentence is wrapped in `START` / `END` and ignorable quote tokens
/// are removed. The markers sit inside the stream, so no n-gram spans two
/// sentences without passing through `END`.
pub fn delimit_sentences<S, T>(sentences: &[S], vocabulary: &mut Vocabulary) -> Vec<TokenId>
where
	S: AsRef<[T]>,
	T: AsRef<str>,
{
	let mut stream = Vec::new();
	for sentence in sentences {
		stream.push(START);
		for word in sentence.as_ref() {
			let word: &str = word.as_ref();
			if !IGNORED.contains(&word) {
				stream.push(vocabulary.intern(word));
			}
		}
		stream.push(END);
	}
	stream
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wraps_each_sentence() {
		let mut vocab = Vocabulary::default();
		let stream = delimit_sentences(&[vec!["a", "b"], vec!["c"]], &mut vocab);
		let words: Vec<&str> = stream.iter().map(|id| vocab.resolve(*id)).collect();
		assert_eq!(words, ["<s>", "a", "b", "</s>", "<s>", "c", "</s>"]);
	}

	#[test]
	fn drops_quotes() {
		let mut vocab = Vocabulary::default();
		let stream = delimit_sentences(&[vec!["\"", "hi", "'", "there"]], &mut vocab);
		assert_eq!(stream.len(), 4);
		assert_eq!(vocab.id("\""), None);
		assert_eq!(vocab.id("'"), None);
	}

	#[test]
	fn empty_corpus_gives_empty_stream() {
		let mut vocab = Vocabulary::default();
		let corpus: Vec<Vec<String>> = Vec::new();
		assert!(delimit_sentences(&corpus, &mut vocab).is_empty());
	}
}
