/// Characters ending a sentence.
const SENTENCE_END: [char; 3] = ['.', '!', '?'];

/// Closing characters kept with the sentence they follow.
const CLOSERS: [char; 6] = ['"', '\'', ')', ']', '}', '”'];

/// Abbreviations whose period does not end a sentence.
const ABBREVIATIONS: [&str; 13] =
	["mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "e.g", "i.e", "fig", "inc"];

/// Characters split off the front of a word.
const OPENERS: [char; 6] = ['(', '[', '{', '"', '“', '\''];

/// Characters split off the end of a word. A period is only split off the
/// last word of a sentence.
const TRAILERS: [char; 11] = [',', ';', ':', '?', '!', ')', ']', '}', '"', '”', '\''];

/// Clitics split from the word they attach to, besides `n't`.
const CONTRACTION_SUFFIXES: [&str; 6] = ["'s", "'m", "'d", "'re", "'ve", "'ll"];

/// Splits raw text into sentences.
///
/// A sentence ends on a run of `.`, `!` or `?` (plus any closing quotes or
/// brackets right after it) when the text ends there, or when whitespace
/// follows and the next character is not lowercase. A lone period after a
/// known abbreviation or a single letter does not end a sentence.
///
/// Line breaks are treated as spaces.
pub fn split_sentences(text: &str) -> Vec<String> {
	let chars: Vec<char> = text
		.chars()
		.map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
		.collect();

	let mut sentences = Vec::new();
	let mut current = String::new();
	let mut i = 0;

	while i < chars.len() {
		let c = chars[i];
		current.push(c);
		i += 1;
		if !SENTENCE_END.contains(&c) {
			continue;
		}

		let mut run = 1;
		while i < chars.len() && SENTENCE_END.contains(&chars[i]) {
			current.push(chars[i]);
			run += 1;
			i += 1;
		}
		while i < chars.len() && CLOSERS.contains(&chars[i]) {
			current.push(chars[i]);
			i += 1;
		}

		let mut j = i;
		while j < chars.len() && chars[j].is_whitespace() {
			j += 1;
		}

		let boundary = if j == chars.len() {
			true
		} else {
			j > i
				&& !chars[j].is_lowercase()
				&& !(c == '.' && run == 1 && ends_with_abbreviation(&current))
		};

		if boundary {
			push_sentence(&mut sentences, &current);
			current.clear();
			i = j;
		}
	}
	push_sentence(&mut sentences, &current);

	sentences
}

fn push_sentence(sentences: &mut Vec<String>, sentence: &str) {
	let sentence = sentence.trim();
	if !sentence.is_empty() {
		sentences.push(sentence.to_owned());
	}
}

/// Returns true if the text ends with `<abbreviation>.`, ignoring closers.
fn ends_with_abbreviation(text: &str) -> bool {
	let Some(body) = text.trim_end_matches(CLOSERS).strip_suffix('.') else {
		return false;
	};
	let word = body
		.rsplit(|c: char| c.is_whitespace() || OPENERS.contains(&c))
		.next()
		.unwrap_or_default()
		.to_lowercase();

	let mut letters = word.chars();
	let single_letter = matches!((letters.next(), letters.next()), (Some(c), None) if c.is_alphabetic());
	single_letter || ABBREVIATIONS.contains(&word.as_str())
}

/// Splits one sentence into lowercase word tokens.
///
/// Follows the usual treebank conventions:
/// - punctuation is split from words, a final period only on the last word
/// - `...` stays one token
/// - opening double quotes become ``` `` ```, closing ones `''`
/// - `n't` and the clitics `'s 'm 'd 're 've 'll` become separate tokens
///   (`can't` → `ca n't`)
pub fn tokenize_words(sentence: &str) -> Vec<String> {
	let lowered = sentence.to_lowercase().replace('’', "'");
	let chunks: Vec<&str> = lowered.split_whitespace().collect();

	let mut tokens = Vec::new();
	for (index, chunk) in chunks.iter().enumerate() {
		split_chunk(chunk, index + 1 == chunks.len(), &mut tokens);
	}
	tokens
}

/// Splits a tokenized-by-whitespace chunk into word and punctuation tokens.
fn split_chunk(chunk: &str, last: bool, tokens: &mut Vec<String>) {
	let mut rest = chunk;

	while let Some(c) = rest.chars().next() {
		if !OPENERS.contains(&c) {
			break;
		}
		tokens.push(quote_token(c, true));
		rest = &rest[c.len_utf8()..];
	}

	// Collected back to front
	let mut trailing = Vec::new();
	loop {
		if let Some(stripped) = rest.strip_suffix("...") {
			trailing.push("...".to_owned());
			rest = stripped;
			continue;
		}
		let Some(c) = rest.chars().next_back() else {
			break;
		};
		if !(TRAILERS.contains(&c) || (c == '.' && last)) {
			break;
		}
		trailing.push(quote_token(c, false));
		rest = &rest[..rest.len() - c.len_utf8()];
	}

	if !rest.is_empty() {
		split_contraction(rest, tokens);
	}
	tokens.extend(trailing.into_iter().rev());
}

fn split_contraction(word: &str, tokens: &mut Vec<String>) {
	let suffixes = std::iter::once("n't").chain(CONTRACTION_SUFFIXES);
	for suffix in suffixes {
		if let Some(stem) = word.strip_suffix(suffix) {
			if !stem.is_empty() {
				tokens.push(stem.to_owned());
				tokens.push(suffix.to_owned());
				return;
			}
		}
	}
	tokens.push(word.to_owned());
}

fn quote_token(c: char, opening: bool) -> String {
	match c {
		'"' if opening => "``".to_owned(),
		'"' => "''".to_owned(),
		'“' => "``".to_owned(),
		'”' => "''".to_owned(),
		_ => c.to_string(),
	}
}

/// Splits text into sentences and each sentence into tokens.
///
/// Sentences without any token are dropped.
pub fn tokenize_corpus(text: &str) -> Vec<Vec<String>> {
	split_sentences(text.trim())
		.iter()
		.map(|sentence| tokenize_words(sentence))
		.filter(|tokens| !tokens.is_empty())
		.collect()
}
