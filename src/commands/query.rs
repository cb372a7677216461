//! Query command - rank similar words for a keyword set

use anyhow::Result;
use colored::*;
use std::time::Instant;

use crate::cli::Language;
use crate::ui;

pub fn run(keywords: &[String], top_n: usize, json: bool, language: Language) -> Result<()> {
	let index = super::load_word_index(language)?;

	let started = Instant::now();
	let results = index.similar_words(keywords, top_n);

	if json {
		// The word-cloud payload, ordered best first.
		println!("{}", serde_json::to_string_pretty(&results)?);
		return Ok(());
	}

	if results.is_empty() {
		ui::warn("No keywords matched the vocabulary");
		return Ok(());
	}

	ui::header("Similar words");

	for (i, entry) in results.iter().enumerate() {
		println!(
			"  {}. {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			entry.word.bright_white(),
			format!("{:.4}", entry.score).dimmed()
		);
	}

	println!();
	ui::success(&format!(
		"{} similar words in {}ms",
		results.len(),
		started.elapsed().as_millis()
	));
	Ok(())
}
