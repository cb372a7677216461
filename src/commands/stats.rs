//! Stats command - vocabulary and embedding coverage

use anyhow::Result;
use colored::*;

use crate::config::EMBEDDING_DIM;
use crate::ui;

pub fn run(uncovered_limit: usize) -> Result<()> {
	let (lexicon, matrix) = super::build::load_or_build()?;

	let vocab = lexicon.len() - 1;
	let covered = matrix.covered();
	let pct = if vocab > 0 {
		covered as f32 * 100.0 / vocab as f32
	} else {
		0.0
	};

	ui::header("Index statistics");
	println!("  {} {}", "Vocabulary:".bright_blue(), vocab);
	println!("  {} {} ({:.1}%)", "With vectors:".bright_blue(), covered, pct);
	println!("  {} {}", "Zero rows:".bright_blue(), vocab - covered);
	println!("  {} {}", "Dimensions:".bright_blue(), EMBEDDING_DIM);

	let uncovered: Vec<&str> = (1..lexicon.len())
		.filter(|&i| !matrix.has_vector(i))
		.filter_map(|i| lexicon.token(i))
		.take(uncovered_limit)
		.collect();

	if !uncovered.is_empty() {
		ui::header("Tokens without vectors");
		for token in uncovered {
			println!("  {}", token.dimmed());
		}
	}

	println!();
	Ok(())
}
