//! Vocabulary assignment over a tokenized corpus

use std::collections::HashMap;

use crate::config::OOV_TOKEN;

/// Bijective token/index mapping with index 0 reserved for the `<OOV>` sentinel.
///
/// Indices are assigned in first-occurrence order over the corpus scan, so
/// the same corpus always produces the same mapping. Lookup never yields 0:
/// an unknown word is `None`, which keeps "not in the vocabulary" distinct
/// from the sentinel row itself.
#[derive(Debug, Clone)]
pub struct Lexicon {
	tokens: Vec<String>,
	index: HashMap<String, usize>,
}

impl Lexicon {
	/// Scans pre-tokenized documents and assigns increasing indices to
	/// distinct tokens in order of first occurrence.
	pub fn build(documents: &[Vec<String>]) -> Self {
		let mut tokens = vec![OOV_TOKEN.to_string()];
		let mut index = HashMap::new();

		for document in documents {
			for token in document {
				if !index.contains_key(token) {
					index.insert(token.clone(), tokens.len());
					tokens.push(token.clone());
				}
			}
		}

		Self { tokens, index }
	}

	/// Rebuilds a lexicon from a stored token list (sentinel at position 0).
	pub fn from_tokens(tokens: Vec<String>) -> Self {
		let index = tokens
			.iter()
			.enumerate()
			.skip(1)
			.map(|(i, token)| (token.clone(), i))
			.collect();

		Self { tokens, index }
	}

	/// Index of a token, `None` for out-of-vocabulary words.
	pub fn lookup(&self, token: &str) -> Option<usize> {
		self.index.get(token).copied()
	}

	pub fn token(&self, idx: usize) -> Option<&str> {
		self.tokens.get(idx).map(String::as_str)
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Total row count including the sentinel.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// True when no real token has been assigned.
	pub fn is_empty(&self) -> bool {
		self.tokens.len() <= 1
	}
}
