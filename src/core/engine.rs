//! Similarity queries against the built index

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::{EmbeddingMatrix, Lexicon, Normalizer};
use crate::ui;

/// Ranked word-cloud entry.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredWord {
	pub word: String,
	pub score: f32,
}

/// The immutable query artifacts, built once at startup and shared read-only
/// afterwards. Queries allocate only request-local state.
pub struct WordIndex {
	lexicon: Lexicon,
	matrix: EmbeddingMatrix,
	normalizer: Normalizer,
}

impl WordIndex {
	pub fn new(lexicon: Lexicon, matrix: EmbeddingMatrix, normalizer: Normalizer) -> Self {
		debug_assert_eq!(lexicon.len(), matrix.vocab_size());
		Self { lexicon, matrix, normalizer }
	}

	pub fn lexicon(&self) -> &Lexicon {
		&self.lexicon
	}

	pub fn matrix(&self) -> &EmbeddingMatrix {
		&self.matrix
	}

	/// Top-N similar words across all keywords.
	///
	/// Each keyword is normalized and looked up; unknown keywords are
	/// skipped. Per keyword, the matrix is scanned for the N best cosine
	/// neighbours; across keywords a candidate keeps the maximum score seen.
	/// The merged set is cut to N again, so with many keywords and a small N
	/// the final list can drop candidates that made their per-keyword cut.
	pub fn similar_words(&self, keywords: &[String], top_n: usize) -> Vec<ScoredWord> {
		let mut merged: HashMap<usize, f32> = HashMap::new();

		for raw in keywords {
			let key = self.normalizer.normalize(raw);
			let Some(idx) = self.lexicon.lookup(&key) else {
				ui::debug(&format!("No vocabulary entry for '{}'", raw));
				continue;
			};

			for (candidate, score) in self.matrix.neighbors(idx, top_n) {
				merged
					.entry(candidate)
					.and_modify(|best| {
						if score > *best {
							*best = score;
						}
					})
					.or_insert(score);
			}
		}

		let mut ranked: Vec<(usize, f32)> = merged.into_iter().collect();
		ranked.sort_by(|a, b| {
			b.1.partial_cmp(&a.1)
				.unwrap_or(Ordering::Equal)
				.then(a.0.cmp(&b.0))
		});
		ranked.truncate(top_n);

		ranked
			.into_iter()
			.filter_map(|(idx, score)| {
				self.lexicon
					.token(idx)
					.map(|word| ScoredWord { word: word.to_string(), score })
			})
			.collect()
	}
}
