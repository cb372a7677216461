//! Pretrained vector file parsing

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::EMBEDDING_DIM;
use crate::core::matrix::VectorEntry;

/// Outcome of parsing one resource line. Skips are counted, never fatal;
/// a line is either applied whole or not at all.
#[derive(Debug)]
pub enum LineOutcome {
	Parsed(VectorEntry),
	Skipped(SkipReason),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SkipReason {
	/// Fewer than word + 50 fields.
	Truncated,
	/// A vector field failed to parse as a float.
	BadNumber,
}

/// Parsed entries plus how many lines were dropped on the way.
pub struct VectorFile {
	pub entries: Vec<VectorEntry>,
	pub skipped: usize,
}

/// Splits a line on whitespace and takes the word plus exactly the first 50
/// numeric fields; anything malformed skips the whole line.
pub fn parse_line(line: &str) -> LineOutcome {
	let fields: Vec<&str> = line.split_whitespace().collect();
	if fields.len() < EMBEDDING_DIM + 1 {
		return LineOutcome::Skipped(SkipReason::Truncated);
	}

	let mut values = Vec::with_capacity(EMBEDDING_DIM);
	for field in &fields[1..=EMBEDDING_DIM] {
		match field.parse::<f32>() {
			Ok(value) => values.push(value),
			Err(_) => return LineOutcome::Skipped(SkipReason::BadNumber),
		}
	}

	LineOutcome::Parsed(VectorEntry { word: fields[0].to_string(), values })
}

/// Reads the whole vector resource. An unopenable file is fatal, unlike the
/// per-line leniency: without an embedding source the service cannot serve
/// predictions at all.
pub fn read_entries(path: &Path) -> Result<VectorFile> {
	let file = File::open(path)
		.with_context(|| format!("Failed to open vector file: {}", path.display()))?;
	let reader = BufReader::new(file);

	let mut entries = Vec::new();
	let mut skipped = 0;

	for (number, line) in reader.lines().enumerate() {
		let line = line.context("Failed to read vector line")?;
		if line.trim().is_empty() {
			continue;
		}

		match parse_line(&line) {
			LineOutcome::Parsed(entry) => entries.push(entry),
			LineOutcome::Skipped(reason) => {
				crate::ui::debug(&format!("Skipping vector line {}: {:?}", number + 1, reason));
				skipped += 1;
			}
		}
	}

	Ok(VectorFile { entries, skipped })
}
