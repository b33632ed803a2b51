/// Tokens that attach to the previous word.
pub const NO_SPACE_BEFORE: [&str; 10] = [",", ".", "?", ":", ";", ")", "!", "n't", "''", "'t"];

/// Leading characters that make a token attach to the previous word.
pub const NO_SPACE_BEFORE_PREFIX: [char; 2] = ['.', '\''];

/// Tokens that attach to the next word.
pub const NO_SPACE_AFTER: [&str; 2] = ["(", "``"];

/// Joins a token list into a sentence with natural punctuation spacing.
///
/// Single left-to-right pass:
/// - opening tokens (`(`, ``` `` ```) are buffered and glued to what follows
/// - closing punctuation, `n't`, `''` and tokens starting with `.` or `'`
///   are appended to the previous word
/// - anything else starts a new word
///
/// A trailing opening token with nothing after it is dropped.
pub fn stitch<T: AsRef<str>>(tokens: &[T]) -> String {
	let mut words: Vec<String> = Vec::new();
	let mut glue = String::new();

	for token in tokens {
		let token = token.as_ref();
		if NO_SPACE_AFTER.contains(&token) {
			glue.push_str(token);
		} else if attaches_left(token) {
			match words.last_mut() {
				Some(last) => {
					last.push_str(&glue);
					last.push_str(token);
				}
				None => words.push(format!("{glue}{token}")),
			}
			glue.clear();
		} else {
			words.push(format!("{glue}{token}"));
			glue.clear();
		}
	}

	words.join(" ")
}

fn attaches_left(token: &str) -> bool {
	NO_SPACE_BEFORE.contains(&token)
		|| token.chars().next().is_some_and(|c| NO_SPACE_BEFORE_PREFIX.contains(&c))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn punctuation() {
		assert_eq!(stitch(&["Hello", ",", "world", "."]), "Hello, world.");
		assert_eq!(stitch(&["really", "?", "!"]), "really?!");
	}

	#[test]
	fn brackets() {
		assert_eq!(stitch(&["(", "ok", ")"]), "(ok)");
		assert_eq!(stitch(&["see", "(", "below", ")", "."]), "see (below).");
	}

	#[test]
	fn contractions() {
		assert_eq!(stitch(&["i", "do", "n't", "know"]), "i don't know");
		assert_eq!(stitch(&["it", "'s", "fine"]), "it's fine");
		assert_eq!(stitch(&["ca", "n't"]), "can't");
	}

	#[test]
	fn quotes() {
		assert_eq!(stitch(&["he", "said", "``", "go", "''"]), "he said ``go''");
	}

	#[test]
	fn leading_closer_starts_the_sentence() {
		assert_eq!(stitch(&[",", "then"]), ", then");
		assert_eq!(stitch(&["(", "."]), "(.");
	}

	#[test]
	fn trailing_opener_is_dropped() {
		assert_eq!(stitch(&["end", "("]), "end");
	}

	#[test]
	fn empty_input() {
		let tokens: [&str; 0] = [];
		assert_eq!(stitch(&tokens), "");
		assert_eq!(stitch(&["", "a"]), " a");
	}
}
