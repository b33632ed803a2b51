use std::collections::HashMap;

/// Index of an interned token inside a [`Vocabulary`].
pub type TokenId = u32;

/// Reserved id of the sentence-start marker.
pub const START: TokenId = 0;

/// Reserved id of the sentence-end marker.
pub const END: TokenId = 1;

/// Display form of the sentence-start marker.
pub const START_TOKEN: &str = "<s>";

/// Display form of the sentence-end marker.
pub const END_TOKEN: &str = "</s>";

/// Arena of every distinct token seen during training.
///
/// Contexts are stored as slices of [`TokenId`] so hashing and equality work
/// on small integers instead of strings.
///
/// # Invariants
/// - `START` and `END` are always present at ids 0 and 1
/// - The markers are never reachable through `id`: a corpus word spelled
///   `<s>` gets its own id, so the markers can't collide with ordinary words
#[derive(Debug, Clone)]
pub struct Vocabulary {
	tokens: Vec<String>,
	ids: HashMap<String, TokenId>,
}

impl Default for Vocabulary {
	fn default() -> Self {
		Self {
			tokens: vec![START_TOKEN.to_owned(), END_TOKEN.to_owned()],
			ids: HashMap::new(),
		}
	}
}

impl Vocabulary {
	/// Returns the id of `token`, allocating a new one on first sight.
	pub fn intern(&mut self, token: &str) -> TokenId {
		if let Some(id) = self.ids.get(token) {
			return *id;
		}
		let id = self.tokens.len() as TokenId;
		self.tokens.push(token.to_owned());
		self.ids.insert(token.to_owned(), id);
		id
	}

	/// Looks up an ordinary corpus token. Never returns a marker id.
	pub fn id(&self, token: &str) -> Option<TokenId> {
		self.ids.get(token).copied()
	}

	/// Resolves an id back to its text.
	///
	/// Ids only come from this vocabulary, so an unknown id yields an empty string.
	pub fn resolve(&self, id: TokenId) -> &str {
		self.tokens.get(id as usize).map(String::as_str).unwrap_or_default()
	}

	/// Number of ordinary tokens (markers excluded).
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}
}
