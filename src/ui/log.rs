//! Unified logging system

use chrono::Local;
use colored::*;
use rand::RngExt;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
   _____     __         __
  / ___/__  / /______ _/ /_____ _
  \__ \/ _ \/ //_/ __ `/ __/ __ `/
 ___/ /  __/ ,< / /_/ / /_/ /_/ /
/____/\___/_/|_|\__,_/\__/\__,_/ "#;

const SLOGANS: &[&str] = &[
	"Every word has neighbours",
	"Cosine and consequences",
	"Word clouds with receipts",
	"50 dimensions of meaning",
	"Semantics, but make it ranked",
	"argmax, but friendly",
	"Ask for makan, get nasi",
	"\"Trust me bro, they're similar\"",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
	println!();
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

fn timestamp() -> ColoredString {
	Local::now().format("%H:%M:%S").to_string().dimmed()
}

pub fn info(msg: &str) {
	println!("[{}] {} {}", timestamp(), "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("[{}] {} {}", timestamp(), "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("[{}] {} {}", timestamp(), "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	println!("[{}] {} {}", timestamp(), "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("[{}] {} {}", timestamp(), "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}
