//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_CORPUS: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_VECTORS: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_SLANG: OnceLock<PathBuf> = OnceLock::new();

// === Resource Files ===
pub const CORPUS_FILE: &str = "corpus.txt";
pub const VECTORS_FILE: &str = "token_vectors.txt";
pub const SLANG_FILE: &str = "combined_slang_words.txt";
pub const SNAPSHOT_FILE: &str = "index.msgpack";

// === Index Parameters ===
pub const EMBEDDING_DIM: usize = 50;
pub const OOV_TOKEN: &str = "<OOV>";

// === Query Defaults ===
pub const DEFAULT_TOP_N: usize = 15;

pub fn set_data_dir(path: PathBuf) {
	let _ = CUSTOM_DATA_DIR.set(path);
}

pub fn set_corpus_path(path: PathBuf) {
	let _ = CUSTOM_CORPUS.set(path);
}

pub fn set_vectors_path(path: PathBuf) {
	let _ = CUSTOM_VECTORS.set(path);
}

pub fn set_slang_path(path: PathBuf) {
	let _ = CUSTOM_SLANG.set(path);
}

/// Get data directory (--data-dir flag, SEKATA_DATA_DIR env var, or cwd)
pub fn data_dir() -> PathBuf {
	if let Some(custom) = CUSTOM_DATA_DIR.get() {
		crate::ui::debug(&format!("Using custom data dir: {}", custom.display()));
		return custom.clone();
	}

	if let Ok(env_path) = std::env::var("SEKATA_DATA_DIR") {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using SEKATA_DATA_DIR: {}", env_path));
			return path;
		}
	}

	PathBuf::from(".")
}

pub fn corpus_path() -> PathBuf {
	if let Some(custom) = CUSTOM_CORPUS.get() {
		return custom.clone();
	}
	data_dir().join(CORPUS_FILE)
}

pub fn vectors_path() -> PathBuf {
	if let Some(custom) = CUSTOM_VECTORS.get() {
		return custom.clone();
	}
	data_dir().join(VECTORS_FILE)
}

pub fn slang_path() -> PathBuf {
	if let Some(custom) = CUSTOM_SLANG.get() {
		return custom.clone();
	}
	data_dir().join(SLANG_FILE)
}

pub fn snapshot_path() -> PathBuf {
	data_dir().join(SNAPSHOT_FILE)
}
