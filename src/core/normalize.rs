//! Keyword normalization - lowercase, slang substitution, stemming

use std::collections::HashMap;

use crate::cli::Language;

/// Reduces a word to its morphological root.
///
/// The stemming algorithm itself is an external collaborator; implementations
/// only have to be deterministic so the same keyword always produces the same
/// lookup key.
pub trait Stemmer: Send + Sync {
	fn stem(&self, word: &str) -> String;
}

/// Snowball stemming via the rust-stemmers port.
pub struct Snowball(rust_stemmers::Stemmer);

impl Snowball {
	pub fn new(algorithm: rust_stemmers::Algorithm) -> Self {
		Self(rust_stemmers::Stemmer::create(algorithm))
	}
}

impl Stemmer for Snowball {
	fn stem(&self, word: &str) -> String {
		self.0.stem(word).into_owned()
	}
}

/// Pass-through stemmer for corpora already reduced to root forms.
pub struct Identity;

impl Stemmer for Identity {
	fn stem(&self, word: &str) -> String {
		word.to_string()
	}
}

pub fn stemmer_for(language: Language) -> Box<dyn Stemmer> {
	use rust_stemmers::Algorithm;

	match language {
		Language::None => Box::new(Identity),
		Language::Dutch => Box::new(Snowball::new(Algorithm::Dutch)),
		Language::English => Box::new(Snowball::new(Algorithm::English)),
		Language::French => Box::new(Snowball::new(Algorithm::French)),
		Language::German => Box::new(Snowball::new(Algorithm::German)),
		Language::Portuguese => Box::new(Snowball::new(Algorithm::Portuguese)),
		Language::Spanish => Box::new(Snowball::new(Algorithm::Spanish)),
		Language::Turkish => Box::new(Snowball::new(Algorithm::Turkish)),
	}
}

/// Turns a raw user keyword into the canonical vocabulary lookup key.
///
/// Pure and deterministic: lowercase, substitute through the slang
/// dictionary, then stem.
pub struct Normalizer {
	slang: HashMap<String, String>,
	stemmer: Box<dyn Stemmer>,
}

impl Normalizer {
	pub fn new(slang: HashMap<String, String>, stemmer: Box<dyn Stemmer>) -> Self {
		Self { slang, stemmer }
	}

	/// No slang substitution, no stemming.
	pub fn identity() -> Self {
		Self::new(HashMap::new(), Box::new(Identity))
	}

	pub fn normalize(&self, raw: &str) -> String {
		let lowered = raw.trim().to_lowercase();
		let canonical = self.slang.get(&lowered).cloned().unwrap_or(lowered);
		self.stemmer.stem(&canonical)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cli::Language;

	fn slang(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(informal, canonical)| (informal.to_string(), canonical.to_string()))
			.collect()
	}

	#[test]
	fn lowercases_and_trims() {
		let normalizer = Normalizer::identity();
		assert_eq!(normalizer.normalize("  MaKaN "), "makan");
	}

	#[test]
	fn applies_slang_substitution() {
		let normalizer = Normalizer::new(slang(&[("gue", "saya")]), Box::new(Identity));
		assert_eq!(normalizer.normalize("Gue"), "saya");
		assert_eq!(normalizer.normalize("kamu"), "kamu");
	}

	#[test]
	fn slang_applies_before_stemming() {
		let normalizer = Normalizer::new(
			slang(&[("runnin", "running")]),
			stemmer_for(Language::English),
		);
		assert_eq!(normalizer.normalize("RUNNIN"), "run");
	}

	#[test]
	fn snowball_english_collapses_inflections() {
		let normalizer = Normalizer::new(HashMap::new(), stemmer_for(Language::English));
		assert_eq!(normalizer.normalize("running"), "run");
		assert_eq!(normalizer.normalize("Connections"), "connect");
	}

	#[test]
	fn is_deterministic() {
		let normalizer = Normalizer::new(slang(&[("gue", "saya")]), stemmer_for(Language::English));
		for raw in ["Running", "gue", "Sekata"] {
			assert_eq!(normalizer.normalize(raw), normalizer.normalize(raw));
		}
	}
}
