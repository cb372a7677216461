//! REPL mode - interactive similarity session

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

use crate::cli::Language;
use crate::ui;

pub fn run(top_n: usize, language: Language) -> Result<()> {
	ui::print_logo();
	ui::info("Interactive similarity search");
	ui::info("Enter one or more keywords, or 'exit' to quit");
	println!();

	let index = super::load_word_index(language)?;
	ui::success(&format!(
		"Index ready: {} tokens, {} with vectors",
		index.lexicon().len() - 1,
		index.matrix().covered()
	));
	println!();

	loop {
		print!("{} ", "sekata>".bright_blue().bold());
		io::stdout().flush()?;

		let mut input = String::new();
		if io::stdin().read_line(&mut input)? == 0 {
			break;
		}
		let line = input.trim();

		if line.is_empty() {
			continue;
		}
		if line == "exit" || line == "quit" || line == "q" {
			ui::info("Goodbye!");
			break;
		}
		if line == "help" {
			show_help();
			continue;
		}

		let keywords: Vec<String> = line.split_whitespace().map(str::to_string).collect();
		let started = Instant::now();
		let results = index.similar_words(&keywords, top_n);

		if results.is_empty() {
			ui::warn("No matches found");
			println!();
			continue;
		}

		for (i, entry) in results.iter().enumerate() {
			println!(
				"{}. {} {}",
				format!("{:2}", i + 1).bright_blue().bold(),
				entry.word.bright_white(),
				format!("{:.4}", entry.score).dimmed()
			);
		}

		println!(
			"\n{} {} in {}ms",
			"✓".bright_blue().bold(),
			format!("{} similar words", results.len()).bright_white(),
			started.elapsed().as_millis()
		);
		println!();
	}

	Ok(())
}

fn show_help() {
	println!("{}", "REPL Commands:".bright_blue().bold());
	println!("  {}  Rank words similar to the keywords", "<keywords>".dimmed());
	println!("  {}        Show this help message", "help".dimmed());
	println!("  {}        Exit REPL mode", "exit".dimmed());
}
