//! Dense embedding matrix and cosine nearest-neighbour scan

use anyhow::{Context, Result};
use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;
use std::cmp::Ordering;

use crate::config::EMBEDDING_DIM;
use crate::core::Lexicon;

/// One parsed `word v1 .. v50` entry from the pretrained vector resource.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorEntry {
	pub word: String,
	pub values: Vec<f32>,
}

/// Row-per-vocabulary-index embedding matrix.
///
/// Row 0 (the sentinel) and rows for vocabulary words missing from the
/// pretrained resource stay zero. Rows keep the exact parsed values; row
/// norms are precomputed at assembly, and a zero norm marks a word with no
/// embedding available.
pub struct EmbeddingMatrix {
	rows: Array2<f32>,
	norms: Vec<f32>,
}

impl EmbeddingMatrix {
	/// Assembles a vocabSize x 50 matrix from parsed vector entries.
	///
	/// Entries for words outside the lexicon are ignored; lexicon words
	/// without an entry keep their zero row.
	pub fn assemble(lexicon: &Lexicon, entries: impl IntoIterator<Item = VectorEntry>) -> Self {
		let mut rows = Array2::zeros((lexicon.len(), EMBEDDING_DIM));

		for entry in entries {
			let Some(idx) = lexicon.lookup(&entry.word) else {
				continue;
			};
			for (slot, value) in rows.row_mut(idx).iter_mut().zip(&entry.values) {
				*slot = *value;
			}
		}

		Self::from_rows(rows)
	}

	/// Restores a matrix from flattened row data (snapshot load).
	pub fn from_flat(flat: Vec<f32>, vocab_size: usize) -> Result<Self> {
		let rows = Array2::from_shape_vec((vocab_size, EMBEDDING_DIM), flat)
			.context("Matrix data does not match vocabulary size")?;
		Ok(Self::from_rows(rows))
	}

	fn from_rows(rows: Array2<f32>) -> Self {
		let norms = rows
			.rows()
			.into_iter()
			.map(|row| row.dot(&row).sqrt())
			.collect();
		Self { rows, norms }
	}

	pub fn vocab_size(&self) -> usize {
		self.rows.nrows()
	}

	pub fn row(&self, idx: usize) -> ArrayView1<'_, f32> {
		self.rows.row(idx)
	}

	/// Flattened row data in index order (snapshot save).
	pub fn flat(&self) -> Vec<f32> {
		self.rows.iter().copied().collect()
	}

	/// Rows with a pretrained vector, the sentinel row excluded.
	pub fn covered(&self) -> usize {
		self.norms.iter().skip(1).filter(|&&n| n > 0.0).count()
	}

	pub fn has_vector(&self, idx: usize) -> bool {
		self.norms.get(idx).is_some_and(|&n| n > 0.0)
	}

	/// Cosine similarity between two rows, 0.0 when either row is zero.
	pub fn cosine(&self, a: usize, b: usize) -> f32 {
		let denom = self.norms[a] * self.norms[b];
		if denom > 0.0 {
			self.rows.row(a).dot(&self.rows.row(b)) / denom
		} else {
			0.0
		}
	}

	/// Top-N rows by cosine similarity against row `idx`, best first.
	///
	/// Scans every row in parallel. The query row and the sentinel row are
	/// never candidates. Ties break on the lower vocabulary index so the
	/// ranking is reproducible.
	pub fn neighbors(&self, idx: usize, n: usize) -> Vec<(usize, f32)> {
		if n == 0 {
			return Vec::new();
		}

		let mut scores: Vec<(usize, f32)> = (0..self.vocab_size())
			.into_par_iter()
			.filter(|&i| i != idx && i != 0)
			.map(|i| (i, self.cosine(idx, i)))
			.collect();

		scores.sort_by(|a, b| {
			b.1.partial_cmp(&a.1)
				.unwrap_or(Ordering::Equal)
				.then(a.0.cmp(&b.0))
		});
		scores.truncate(n);
		scores
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn vec50(head: &[f32]) -> Vec<f32> {
		let mut values = vec![0.0; EMBEDDING_DIM];
		values[..head.len()].copy_from_slice(head);
		values
	}

	fn entry(word: &str, head: &[f32]) -> VectorEntry {
		VectorEntry { word: word.to_string(), values: vec50(head) }
	}

	fn lexicon(words: &[&str]) -> Lexicon {
		Lexicon::build(&[words.iter().map(|w| w.to_string()).collect()])
	}

	#[test]
	fn assembled_row_is_exactly_the_parsed_vector() {
		let lex = lexicon(&["makan", "minum"]);
		let values = vec50(&[0.25, -1.5, 3.0]);
		let matrix = EmbeddingMatrix::assemble(
			&lex,
			[VectorEntry { word: "makan".to_string(), values: values.clone() }],
		);

		assert_eq!(matrix.row(1).to_vec(), values);
	}

	#[test]
	fn unmatched_words_keep_zero_rows() {
		let lex = lexicon(&["makan", "minum"]);
		let matrix = EmbeddingMatrix::assemble(&lex, [entry("makan", &[1.0])]);

		assert!(matrix.has_vector(1));
		assert!(!matrix.has_vector(2));
		assert!(!matrix.has_vector(0));
		assert_eq!(matrix.covered(), 1);
		assert_eq!(matrix.row(2).sum(), 0.0);
	}

	#[test]
	fn resource_words_outside_the_lexicon_are_ignored() {
		let lex = lexicon(&["makan"]);
		let matrix = EmbeddingMatrix::assemble(&lex, [entry("unrelated", &[9.0])]);

		assert_eq!(matrix.vocab_size(), 2);
		assert_eq!(matrix.covered(), 0);
	}

	#[test]
	fn cosine_of_a_row_with_itself_is_one() {
		let lex = lexicon(&["makan"]);
		let matrix = EmbeddingMatrix::assemble(&lex, [entry("makan", &[0.3, 0.4, 1.2])]);

		assert!((matrix.cosine(1, 1) - 1.0).abs() < 1e-6);
	}

	#[test]
	fn cosine_with_a_zero_row_is_zero() {
		let lex = lexicon(&["makan", "kosong"]);
		let matrix = EmbeddingMatrix::assemble(&lex, [entry("makan", &[1.0])]);

		assert_eq!(matrix.cosine(1, 2), 0.0);
	}

	#[test]
	fn neighbors_exclude_self_and_sentinel() {
		let lex = lexicon(&["a", "b"]);
		let matrix =
			EmbeddingMatrix::assemble(&lex, [entry("a", &[1.0]), entry("b", &[0.8, 0.6])]);

		let hits = matrix.neighbors(1, 10);
		assert_eq!(hits.len(), 1);
		assert_eq!(hits[0].0, 2);
		assert!((hits[0].1 - 0.8).abs() < 1e-6);
	}

	#[test]
	fn neighbors_rank_descending_with_index_tiebreak() {
		let lex = lexicon(&["q", "far", "near", "alsofar"]);
		let matrix = EmbeddingMatrix::assemble(
			&lex,
			[
				entry("q", &[1.0]),
				entry("far", &[0.5, 0.866]),
				entry("near", &[0.95, 0.312]),
				entry("alsofar", &[0.5, -0.866]),
			],
		);

		let hits = matrix.neighbors(1, 3);
		let order: Vec<usize> = hits.iter().map(|(i, _)| *i).collect();
		// Equal 0.5 scores fall back to index order.
		assert_eq!(order, vec![3, 2, 4]);
	}

	#[test]
	fn neighbors_truncate_to_requested_count() {
		let lex = lexicon(&["q", "a", "b", "c"]);
		let matrix = EmbeddingMatrix::assemble(
			&lex,
			[
				entry("q", &[1.0]),
				entry("a", &[0.9, 0.436]),
				entry("b", &[0.8, 0.6]),
				entry("c", &[0.7, 0.714]),
			],
		);

		let hits = matrix.neighbors(1, 2);
		assert_eq!(hits.len(), 2);
		assert!(hits[0].1 >= hits[1].1);
	}

	#[test]
	fn flat_round_trips_through_snapshot_form() {
		let lex = lexicon(&["a", "b"]);
		let matrix = EmbeddingMatrix::assemble(&lex, [entry("a", &[1.0]), entry("b", &[0.5])]);

		let restored = EmbeddingMatrix::from_flat(matrix.flat(), matrix.vocab_size()).unwrap();
		assert_eq!(restored.vocab_size(), matrix.vocab_size());
		assert_eq!(restored.row(1).to_vec(), matrix.row(1).to_vec());
		assert_eq!(restored.covered(), matrix.covered());
	}

	#[test]
	fn from_flat_rejects_mismatched_shape() {
		assert!(EmbeddingMatrix::from_flat(vec![0.0; EMBEDDING_DIM + 1], 1).is_err());
	}
}
