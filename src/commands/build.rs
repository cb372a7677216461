//! Build command - construct the embedding index from the resources

use anyhow::{bail, Result};
use std::time::Instant;

use crate::config;
use crate::core::{EmbeddingMatrix, Lexicon};
use crate::storage::snapshot::ResourceHashes;
use crate::storage::{corpus, vectors, Snapshot};
use crate::ui;

/// Builds the index and writes the snapshot, skipping the work when the
/// existing snapshot still matches the resources.
pub fn run(force: bool) -> Result<()> {
	let started = Instant::now();
	let snapshot_path = config::snapshot_path();

	if !force && snapshot_path.exists() {
		if let Ok(snapshot) = Snapshot::load(&snapshot_path) {
			if snapshot.is_current(&resource_hashes()?) {
				ui::info("Index snapshot is current (use --force to rebuild)");
				return Ok(());
			}
		}
	}

	let (lexicon, matrix, hashes) = build_index()?;
	Snapshot::capture(&lexicon, &matrix, &hashes).save(&snapshot_path)?;

	ui::success(&format!(
		"Snapshot written to {} in {:.2}s",
		snapshot_path.display(),
		started.elapsed().as_secs_f32()
	));
	Ok(())
}

/// Runs the full startup pipeline: corpus scan, vocabulary assignment,
/// vector parsing, matrix assembly. Missing resources are fatal here;
/// malformed vector lines are only counted.
pub fn build_index() -> Result<(Lexicon, EmbeddingMatrix, ResourceHashes)> {
	let corpus_path = config::corpus_path();
	let vectors_path = config::vectors_path();

	ui::info(&format!("Scanning corpus: {}", corpus_path.display()));
	let documents = corpus::read_documents(&corpus_path)?;
	let lexicon = Lexicon::build(&documents);
	if lexicon.is_empty() {
		bail!("Corpus contains no tokens: {}", corpus_path.display());
	}
	ui::success(&format!("Vocabulary built with {} distinct tokens", lexicon.len() - 1));

	ui::info(&format!("Loading pretrained vectors: {}", vectors_path.display()));
	let parsed = vectors::read_entries(&vectors_path)?;
	if parsed.skipped > 0 {
		ui::warn(&format!("Skipped {} malformed vector lines", parsed.skipped));
	}

	let matrix = EmbeddingMatrix::assemble(&lexicon, parsed.entries);
	ui::success(&format!(
		"Embedding matrix ready: {} of {} tokens covered",
		matrix.covered(),
		lexicon.len() - 1
	));

	let hashes = ResourceHashes::compute(&corpus_path, &vectors_path)?;
	Ok((lexicon, matrix, hashes))
}

/// Restores the index from the snapshot when it matches the resources,
/// otherwise rebuilds and refreshes the snapshot.
pub fn load_or_build() -> Result<(Lexicon, EmbeddingMatrix)> {
	let snapshot_path = config::snapshot_path();
	let hashes = resource_hashes()?;

	if snapshot_path.exists() {
		match Snapshot::load(&snapshot_path) {
			Ok(snapshot) if snapshot.is_current(&hashes) => {
				ui::debug("Using index snapshot");
				return snapshot.restore();
			}
			Ok(_) => ui::debug("Index snapshot is stale, rebuilding"),
			Err(e) => ui::warn(&format!("Unreadable index snapshot, rebuilding: {}", e)),
		}
	}

	let (lexicon, matrix, hashes) = build_index()?;
	if let Err(e) = Snapshot::capture(&lexicon, &matrix, &hashes).save(&snapshot_path) {
		ui::warn(&format!("Could not write index snapshot: {}", e));
	}

	Ok((lexicon, matrix))
}

fn resource_hashes() -> Result<ResourceHashes> {
	let corpus_path = config::corpus_path();
	let vectors_path = config::vectors_path();

	if !corpus_path.exists() {
		bail!("Corpus file not found: {}", corpus_path.display());
	}
	if !vectors_path.exists() {
		bail!("Vector file not found: {}", vectors_path.display());
	}

	ResourceHashes::compute(&corpus_path, &vectors_path)
}
