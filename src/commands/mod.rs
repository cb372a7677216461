//! # Command Implementations
//!
//! Each submodule handles one CLI command (build, query, repl, stats).

pub mod build;
pub mod query;
pub mod repl;
pub mod stats;

use anyhow::Result;

use crate::cli::Language;
use crate::config;
use crate::core::{normalize, Normalizer, WordIndex};
use crate::storage::slang;

/// Assembles the immutable query artifacts shared by every query command.
pub fn load_word_index(language: Language) -> Result<WordIndex> {
	let (lexicon, matrix) = build::load_or_build()?;
	let dictionary = slang::read_dictionary(&config::slang_path());
	let normalizer = Normalizer::new(dictionary, normalize::stemmer_for(language));
	Ok(WordIndex::new(lexicon, matrix, normalizer))
}
