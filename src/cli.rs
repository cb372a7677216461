use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::DEFAULT_TOP_N;

/// Stemming applied to query keywords before vocabulary lookup
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Language {
	/// No stemming, keywords are looked up as typed
	#[default]
	None,
	/// Snowball Dutch
	Dutch,
	/// Snowball English
	English,
	/// Snowball French
	French,
	/// Snowball German
	German,
	/// Snowball Portuguese
	Portuguese,
	/// Snowball Spanish
	Spanish,
	/// Snowball Turkish
	Turkish,
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "sekata",
	version,
	about = "Semantic nearest-neighbour word search",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {build}                         {build_desc}
  {bin} {query} {query_args}      {query_desc}
  {bin} {query} {json_args}         {json_desc}
  {bin} {repl}                          {repl_desc}
  {bin} {stats}                         {stats_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "sekata".bright_blue(),
		build = "build".yellow(),
		build_desc = "Build the index and snapshot it".dimmed(),
		query = "query".yellow(),
		query_args = "makan minum -n 20",
		query_desc = "Rank similar words".dimmed(),
		json_args = "makan --json",
		json_desc = "Word-cloud JSON payload".dimmed(),
		repl = "repl".yellow(),
		repl_desc = "Interactive session".dimmed(),
		stats = "stats".yellow(),
		stats_desc = "Vocabulary and coverage".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Directory holding the corpus, vector and slang resources
	#[arg(short = 'd', long = "data-dir", global = true)]
	pub data_dir: Option<PathBuf>,

	/// Corpus file override
	#[arg(long = "corpus", global = true, value_name = "PATH")]
	pub corpus: Option<PathBuf>,

	/// Pretrained vector file override
	#[arg(long = "vectors", global = true, value_name = "PATH")]
	pub vectors: Option<PathBuf>,

	/// Slang dictionary override
	#[arg(long = "slang", global = true, value_name = "PATH")]
	pub slang: Option<PathBuf>,

	/// Stemming language: none, english, ...
	#[arg(short = 'l', long = "language", global = true, default_value = "none")]
	pub language: Language,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Build the embedding index from the resources and snapshot it
	Build {
		/// Rebuild even if the snapshot is current
		#[arg(short = 'f', long = "force")]
		force: bool,
	},

	/// Rank words similar to one or more keywords
	Query {
		/// Keywords to search for
		#[arg(value_name = "KEYWORD", required = true)]
		keywords: Vec<String>,

		/// Number of results
		#[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N)]
		top_n: usize,

		/// Emit the word-cloud JSON payload instead of a table
		#[arg(long = "json")]
		json: bool,
	},

	/// Interactive query session
	Repl {
		/// Number of results per query
		#[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N)]
		top_n: usize,
	},

	/// Vocabulary and embedding coverage statistics
	Stats {
		/// Number of uncovered tokens to list
		#[arg(long = "uncovered", default_value_t = 10)]
		uncovered: usize,
	},
}
