// Keyword loader - emoji keyword lists from JSON

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// Emoji keyword lists in the order the source file declares them.
pub struct KeywordTable {
	pub entries: Vec<(String, Vec<String>)>,
}

impl KeywordTable {
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.entries.iter().map(|(emoji, keywords)| (emoji.as_str(), keywords.as_slice()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Parses a JSON object mapping each emoji to an array of keyword
/// strings. Anything else is a hard error.
pub fn parse_keywords(text: &str) -> Result<KeywordTable> {
	let map: serde_json::Map<String, serde_json::Value> =
		serde_json::from_str(text).context("Keyword file is not a JSON object")?;

	let mut entries = Vec::with_capacity(map.len());
	for (emoji, value) in map {
		let keywords: Vec<String> = serde_json::from_value(value)
			.map_err(|e| anyhow!("Keywords for '{}' are not an array of strings: {}", emoji, e))?;
		entries.push((emoji, keywords));
	}

	Ok(KeywordTable { entries })
}

pub fn load_keywords(path: &Path) -> Result<KeywordTable> {
	let text = fs::read_to_string(path)
		.with_context(|| format!("Failed to open keywords: {}", path.display()))?;
	parse_keywords(&text).with_context(|| format!("Invalid keyword JSON: {}", path.display()))
}
