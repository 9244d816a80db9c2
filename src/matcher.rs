// Matcher - nearest-emoji lookup over a built vector table

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::{UNKNOWN_PLACEHOLDER, VECTOR_DIM};
use crate::glove::EmbeddingTable;
use crate::logger::{log, Level};
use crate::types::UnitVector;

/// Emoji unit vectors read back from a built table, in file order.
pub struct EmojiTable {
	pub entries: Vec<(String, UnitVector)>,
	pub skipped_lines: usize,
}

#[derive(Debug, Clone)]
pub struct EmojiMatch {
	pub symbol: String,
	pub score: f32,
}

impl EmojiTable {
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Every emoji scored against the query, best first.
	pub fn rank(&self, query: &UnitVector) -> Vec<EmojiMatch> {
		let mut matches: Vec<EmojiMatch> = self
			.entries
			.iter()
			.map(|(symbol, vector)| EmojiMatch {
				symbol: symbol.clone(),
				score: query.similarity(vector),
			})
			.collect();
		matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
		matches
	}

	pub fn best(&self, query: &UnitVector) -> Option<EmojiMatch> {
		self.entries
			.iter()
			.map(|(symbol, vector)| EmojiMatch {
				symbol: symbol.clone(),
				score: query.similarity(vector),
			})
			.max_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
	}
}

/// Loads an `emoji v1..vD` table produced by the build step. Unlike
/// the word table, single-character tokens are kept since emoji are
/// exactly that. Lines with the wrong component count or unparseable
/// components are skipped and counted.
pub fn load_emoji_table(path: &Path) -> Result<EmojiTable> {
	let file = File::open(path).with_context(|| {
		format!("Failed to open emoji vectors: {} (run 'emovec build' first)", path.display())
	})?;
	let reader = BufReader::new(file);

	let mut entries = Vec::new();
	let mut skipped_lines = 0;

	for (index, line) in reader.lines().enumerate() {
		let line = line.with_context(|| format!("Failed to read from {}", path.display()))?;
		let mut fields = line.split_whitespace();

		let Some(symbol) = fields.next() else {
			log(Level::Debug, &format!("Skipped line {}: empty", index + 1));
			skipped_lines += 1;
			continue;
		};
		let Some(components) = fields.map(|s| s.parse::<f32>().ok()).collect::<Option<Vec<f32>>>()
		else {
			log(
				Level::Debug,
				&format!("Skipped line {}: unparseable vector for '{}'", index + 1, symbol),
			);
			skipped_lines += 1;
			continue;
		};
		if components.len() != VECTOR_DIM {
			log(
				Level::Debug,
				&format!(
					"Skipped line {}: {} components, expected {}",
					index + 1,
					components.len(),
					VECTOR_DIM
				),
			);
			skipped_lines += 1;
			continue;
		}

		entries.push((symbol.to_string(), UnitVector::raw(components)));
	}

	Ok(EmojiTable { entries, skipped_lines })
}

/// Embeds free text as the normalized mean of its known word vectors.
/// Returns `None` when no word has an embedding.
pub fn embed_query(text: &str, embeddings: &EmbeddingTable) -> Option<UnitVector> {
	let found: Vec<&[f32]> = text
		.split_whitespace()
		.filter_map(|word| embeddings.get(&word.to_lowercase()))
		.collect();

	let first = found.first()?;
	let mut mean = vec![0.0f32; first.len()];
	for vector in &found {
		for (acc, component) in mean.iter_mut().zip(vector.iter()) {
			*acc += *component;
		}
	}
	let count = found.len() as f32;
	for component in &mut mean {
		*component /= count;
	}

	UnitVector::from_raw(mean)
}

/// Replaces each word of the input with its nearest emoji. Words
/// without an embedding become [`UNKNOWN_PLACEHOLDER`]. Punctuation
/// and digits are stripped before matching.
pub fn emojify(text: &str, embeddings: &EmbeddingTable, table: &EmojiTable) -> Vec<String> {
	let cleaned: String =
		text.chars().filter(|c| c.is_alphabetic() || c.is_whitespace()).collect();

	cleaned
		.split_whitespace()
		.map(|word| {
			embeddings
				.get(&word.to_lowercase())
				.and_then(|vector| UnitVector::from_raw(vector.to_vec()))
				.and_then(|query| table.best(&query))
				.map(|m| m.symbol)
				.unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string())
		})
		.collect()
}
