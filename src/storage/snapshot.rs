//! Index snapshot persistence and staleness detection

use anyhow::{bail, Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use xxhash_rust::xxh3::Xxh3;

use crate::config::{EMBEDDING_DIM, OOV_TOKEN};
use crate::core::{EmbeddingMatrix, Lexicon};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HASH_BUFFER_SIZE: usize = 65536;

/// Content hashes of the two resource files a snapshot was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHashes {
	pub corpus: String,
	pub vectors: String,
}

impl ResourceHashes {
	pub fn compute(corpus: &Path, vectors: &Path) -> Result<Self> {
		Ok(Self {
			corpus: hash_file(corpus)?,
			vectors: hash_file(vectors)?,
		})
	}
}

/// Streaming xxh3 of the whole file.
pub fn hash_file(path: &Path) -> Result<String> {
	let mut file = File::open(path)
		.with_context(|| format!("Failed to open {} for hashing", path.display()))?;
	let mut hasher = Xxh3::new();
	let mut buffer = vec![0u8; HASH_BUFFER_SIZE];

	loop {
		let n = file.read(&mut buffer).context("Failed to read file for hashing")?;
		if n == 0 {
			break;
		}
		hasher.update(&buffer[..n]);
	}

	Ok(format!("{:016x}", hasher.digest()))
}

/// Serialized form of the built index.
///
/// Keyed by crate version and resource content hashes: a snapshot from a
/// different binary or from changed resources is rebuilt, not trusted.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
	version: String,
	built_at: String,
	corpus_hash: String,
	vectors_hash: String,
	dims: usize,
	tokens: Vec<String>,
	matrix: Vec<f32>,
}

impl Snapshot {
	pub fn capture(lexicon: &Lexicon, matrix: &EmbeddingMatrix, hashes: &ResourceHashes) -> Self {
		Self {
			version: VERSION.to_string(),
			built_at: Local::now().to_rfc3339(),
			corpus_hash: hashes.corpus.clone(),
			vectors_hash: hashes.vectors.clone(),
			dims: EMBEDDING_DIM,
			tokens: lexicon.tokens().to_vec(),
			matrix: matrix.flat(),
		}
	}

	pub fn is_current(&self, hashes: &ResourceHashes) -> bool {
		self.version == VERSION
			&& self.dims == EMBEDDING_DIM
			&& self.corpus_hash == hashes.corpus
			&& self.vectors_hash == hashes.vectors
	}

	/// Rebuilds the in-memory artifacts, validating the stored shape.
	pub fn restore(self) -> Result<(Lexicon, EmbeddingMatrix)> {
		if self.tokens.first().map(String::as_str) != Some(OOV_TOKEN) {
			bail!("Snapshot vocabulary is missing the sentinel token");
		}
		if self.matrix.len() != self.tokens.len() * self.dims {
			bail!(
				"Snapshot matrix has {} values for {} tokens",
				self.matrix.len(),
				self.tokens.len()
			);
		}

		let vocab_size = self.tokens.len();
		let lexicon = Lexicon::from_tokens(self.tokens);
		let matrix = EmbeddingMatrix::from_flat(self.matrix, vocab_size)?;
		Ok((lexicon, matrix))
	}

	pub fn save(&self, path: &Path) -> Result<()> {
		let bytes = rmp_serde::to_vec(self).context("Failed to serialize index snapshot")?;
		std::fs::write(path, bytes)
			.with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
		Ok(())
	}

	pub fn load(path: &Path) -> Result<Self> {
		let bytes = std::fs::read(path)
			.with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
		rmp_serde::from_slice(&bytes).context("Failed to deserialize index snapshot")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::matrix::VectorEntry;
	use std::io::Write;

	fn hashes() -> ResourceHashes {
		ResourceHashes { corpus: "aa".to_string(), vectors: "bb".to_string() }
	}

	fn small_index() -> (Lexicon, EmbeddingMatrix) {
		let lexicon = Lexicon::build(&[vec!["makan".to_string(), "nasi".to_string()]]);
		let mut values = vec![0.0; EMBEDDING_DIM];
		values[0] = 1.0;
		let matrix = EmbeddingMatrix::assemble(
			&lexicon,
			[VectorEntry { word: "makan".to_string(), values }],
		);
		(lexicon, matrix)
	}

	#[test]
	fn snapshot_round_trips_through_disk() {
		let (lexicon, matrix) = small_index();
		let file = tempfile::NamedTempFile::new().unwrap();

		Snapshot::capture(&lexicon, &matrix, &hashes()).save(file.path()).unwrap();
		let restored = Snapshot::load(file.path()).unwrap();
		assert!(restored.is_current(&hashes()));

		let (lex2, mat2) = restored.restore().unwrap();
		assert_eq!(lex2.len(), lexicon.len());
		assert_eq!(lex2.lookup("nasi"), lexicon.lookup("nasi"));
		assert_eq!(mat2.row(1).to_vec(), matrix.row(1).to_vec());
		assert_eq!(mat2.covered(), matrix.covered());
	}

	#[test]
	fn changed_resources_invalidate_the_snapshot() {
		let (lexicon, matrix) = small_index();
		let snapshot = Snapshot::capture(&lexicon, &matrix, &hashes());

		let changed = ResourceHashes { corpus: "aa".to_string(), vectors: "cc".to_string() };
		assert!(!snapshot.is_current(&changed));
	}

	#[test]
	fn hash_file_tracks_content() {
		let mut a = tempfile::NamedTempFile::new().unwrap();
		write!(a, "makan nasi").unwrap();
		let mut b = tempfile::NamedTempFile::new().unwrap();
		write!(b, "makan nasi").unwrap();
		let mut c = tempfile::NamedTempFile::new().unwrap();
		write!(c, "minum teh").unwrap();

		assert_eq!(hash_file(a.path()).unwrap(), hash_file(b.path()).unwrap());
		assert_ne!(hash_file(a.path()).unwrap(), hash_file(c.path()).unwrap());
	}

	#[test]
	fn restore_rejects_a_truncated_matrix() {
		let (lexicon, matrix) = small_index();
		let mut snapshot = Snapshot::capture(&lexicon, &matrix, &hashes());
		snapshot.matrix.pop();

		assert!(snapshot.restore().is_err());
	}
}
