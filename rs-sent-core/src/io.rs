use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::text::tokenizer::tokenize_corpus;

/// Reads a text file into a single `String`.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> std::io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Reads a corpus file and tokenizes it.
///
/// - Reads the entire file into memory
/// - Splits it into sentences, then into lowercase word tokens
///
/// # Errors
/// Returns [`SentGenError::Io`](crate::error::SentGenError::Io) if the file
/// can't be read.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<Vec<Vec<String>>> {
	let path = filename.as_ref();
	let corpus = tokenize_corpus(&read_file(path)?);
	debug!("read {} sentences from {}", corpus.len(), path.display());
	Ok(corpus)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SentGenError;

	#[test]
	fn missing_file_is_an_io_error() {
		let err = read_corpus("./does/not/exist.txt").unwrap_err();
		assert!(matches!(err, SentGenError::Io(_)));
	}

	#[test]
	fn reads_and_tokenizes() {
		let path = std::env::temp_dir().join(format!("rs-sent-io-{}.txt", std::process::id()));
		std::fs::write(&path, "The cat sat.\nThe dog ran!").unwrap();
		let corpus = read_corpus(&path).unwrap();
		std::fs::remove_file(&path).unwrap();
		assert_eq!(corpus, [vec!["the", "cat", "sat", "."], vec!["the", "dog", "ran", "!"]]);
	}
}
