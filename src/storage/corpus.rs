//! Tokenized corpus artifact reader

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads the cleaned corpus: one document per line, tokens separated by
/// whitespace. Blank lines are dropped. A missing file is a startup error,
/// the vocabulary cannot be built without it.
pub fn read_documents(path: &Path) -> Result<Vec<Vec<String>>> {
	let file = File::open(path)
		.with_context(|| format!("Failed to open corpus file: {}", path.display()))?;
	let reader = BufReader::new(file);

	let mut documents = Vec::new();
	for line in reader.lines() {
		let line = line.context("Failed to read corpus line")?;
		let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
		if !tokens.is_empty() {
			documents.push(tokens);
		}
	}

	Ok(documents)
}
