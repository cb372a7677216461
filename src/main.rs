//! Sekata - semantic nearest-neighbour word search
//!
//! Command-line shell around the embedding index: build it from a tokenized
//! corpus and a pretrained vector file, then serve ranked similar-word
//! queries for word-cloud rendering.

use anyhow::Result;
use clap::Parser;

use sekata::cli::{Cli, Command};
use sekata::commands;
use sekata::config;
use sekata::ui;

fn main() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);

	if let Some(dir) = cli.data_dir {
		config::set_data_dir(dir);
	}
	if let Some(path) = cli.corpus {
		config::set_corpus_path(path);
	}
	if let Some(path) = cli.vectors {
		config::set_vectors_path(path);
	}
	if let Some(path) = cli.slang {
		config::set_slang_path(path);
	}

	match cli.command {
		Command::Build { force } => commands::build::run(force),
		Command::Query { keywords, top_n, json } => {
			commands::query::run(&keywords, top_n, json, cli.language)
		}
		Command::Repl { top_n } => commands::repl::run(top_n, cli.language),
		Command::Stats { uncovered } => commands::stats::run(uncovered),
	}
}
