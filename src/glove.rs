// GloVe loader - whitespace-delimited word vector tables

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::VECTOR_DIM;
use crate::logger::{log, Level};

/// Word embeddings keyed by token, plus a count of lines the loader
/// dropped along the way.
pub struct EmbeddingTable {
	pub vectors: HashMap<String, Vec<f32>>,
	pub skipped_lines: usize,
}

impl EmbeddingTable {
	pub fn get(&self, token: &str) -> Option<&[f32]> {
		self.vectors.get(token).map(|v| v.as_slice())
	}

	pub fn contains(&self, token: &str) -> bool {
		self.vectors.contains_key(token)
	}

	pub fn len(&self) -> usize {
		self.vectors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vectors.is_empty()
	}
}

/// Loads a GloVe-style text file: one token followed by [`VECTOR_DIM`]
/// components per line. Lines with the wrong field count, unparseable
/// components, or stray single-symbol tokens are skipped.
pub fn load_embeddings(path: &Path) -> Result<EmbeddingTable> {
	let file = File::open(path)
		.with_context(|| format!("Failed to open embeddings: {}", path.display()))?;
	let reader = BufReader::new(file);

	let mut vectors = HashMap::new();
	let mut skipped_lines = 0;

	for (index, line) in reader.lines().enumerate() {
		let line = line.with_context(|| format!("Failed to read from {}", path.display()))?;
		let fields: Vec<&str> = line.split_whitespace().collect();

		if fields.len() != VECTOR_DIM + 1 {
			log(
				Level::Debug,
				&format!(
					"Skipped line {}: {} fields, expected {}",
					index + 1,
					fields.len(),
					VECTOR_DIM + 1
				),
			);
			skipped_lines += 1;
			continue;
		}

		let token = fields[0];
		if is_stray_symbol(token) {
			log(Level::Debug, &format!("Skipped stray token '{}'", token));
			skipped_lines += 1;
			continue;
		}

		let Some(components) = parse_components(&fields[1..]) else {
			log(Level::Debug, &format!("Skipped '{}': unparseable vector", token));
			skipped_lines += 1;
			continue;
		};

		vectors.insert(token.to_string(), components);
	}

	Ok(EmbeddingTable { vectors, skipped_lines })
}

/// Single-character tokens that are not letters are noise in the
/// source table (punctuation, digits) and never match a keyword.
fn is_stray_symbol(token: &str) -> bool {
	let mut chars = token.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => !c.is_alphabetic(),
		_ => false,
	}
}

fn parse_components(fields: &[&str]) -> Option<Vec<f32>> {
	fields.iter().map(|s| s.parse::<f32>().ok()).collect()
}
