//! Best-effort slang dictionary

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::ui;

/// Loads the informal-to-canonical token map. The dictionary is optional:
/// a missing or malformed file degrades to no substitution, it never stops
/// startup.
pub fn read_dictionary(path: &Path) -> HashMap<String, String> {
	let content = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(_) => {
			ui::warn(&format!("Slang dictionary not found: {}", path.display()));
			return HashMap::new();
		}
	};

	match serde_json::from_str::<HashMap<String, String>>(&content) {
		Ok(dictionary) => {
			ui::debug(&format!("Loaded {} slang entries", dictionary.len()));
			dictionary
		}
		Err(e) => {
			ui::warn(&format!("Ignoring malformed slang dictionary: {}", e));
			HashMap::new()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn loads_a_json_object() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{"gue": "saya", "gak": "tidak"}}"#).unwrap();

		let dictionary = read_dictionary(file.path());
		assert_eq!(dictionary.len(), 2);
		assert_eq!(dictionary.get("gue").map(String::as_str), Some("saya"));
	}

	#[test]
	fn missing_file_degrades_to_empty() {
		assert!(read_dictionary(Path::new("no-such-slang.txt")).is_empty());
	}

	#[test]
	fn malformed_json_degrades_to_empty() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "gue=saya").unwrap();

		assert!(read_dictionary(file.path()).is_empty());
	}
}
