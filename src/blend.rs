// Blend - weighted keyword vectors into emoji unit vectors

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::glove::EmbeddingTable;
use crate::keywords::KeywordTable;
use crate::logger::{log, Level};
use crate::types::UnitVector;
use crate::weights::WordWeights;

pub struct BlendStats {
	pub written: usize,
	pub skipped: usize,
}

/// Combines an emoji's keyword vectors into one unit vector. Weights
/// are normalized to sum to one, so the blend is a convex combination
/// of the keyword embeddings.
///
/// Returns `None` when no keyword is usable or the combination cancels
/// out to a zero vector.
pub fn blend_keywords(
	keywords: &[String],
	embeddings: &EmbeddingTable,
	weights: &WordWeights,
) -> Option<UnitVector> {
	let mut picked: Vec<(&[f32], f32)> = Vec::with_capacity(keywords.len());

	for keyword in keywords {
		let word = keyword.to_lowercase();
		let Some(vector) = embeddings.get(&word) else {
			continue;
		};
		let Some(weight) = weights.weight(&word) else {
			continue;
		};
		picked.push((vector, weight));
	}

	if picked.is_empty() {
		return None;
	}

	let weight_sum: f32 = picked.iter().map(|(_, w)| w).sum();
	let mut blended = vec![0.0f32; picked[0].0.len()];

	for (vector, weight) in &picked {
		let share = weight / weight_sum;
		for (acc, component) in blended.iter_mut().zip(vector.iter()) {
			*acc += share * *component;
		}
	}

	UnitVector::from_raw(blended)
}

/// Blends every emoji in table order and writes one `emoji v1..vD`
/// line per success. Emoji that produce no vector are counted and
/// left out.
pub fn write_vectors(
	keywords: &KeywordTable,
	embeddings: &EmbeddingTable,
	weights: &WordWeights,
	output: &Path,
) -> Result<BlendStats> {
	let file = File::create(output)
		.with_context(|| format!("Failed to create output: {}", output.display()))?;
	let mut writer = BufWriter::new(file);

	let mut written = 0;
	let mut skipped = 0;

	for (emoji, list) in keywords.iter() {
		match blend_keywords(list, embeddings, weights) {
			Some(vector) => {
				writeln!(writer, "{} {}", emoji, vector)
					.with_context(|| format!("Failed to write to {}", output.display()))?;
				written += 1;
			}
			None => {
				log(Level::Debug, &format!("Skipped '{}': no blendable vector", emoji));
				skipped += 1;
			}
		}
	}

	writer.flush().context("Failed to flush output")?;

	Ok(BlendStats { written, skipped })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::keywords::parse_keywords;
	use crate::weights::compute_weights;
	use std::collections::HashMap;

	fn embeddings_of(pairs: &[(&str, Vec<f32>)]) -> EmbeddingTable {
		let mut vectors = HashMap::new();
		for (token, vector) in pairs {
			vectors.insert(token.to_string(), vector.clone());
		}
		EmbeddingTable { vectors, skipped_lines: 0 }
	}

	#[test]
	fn blends_toward_the_rarer_keyword() {
		// "face" appears twice as often as "happy", so "happy" carries
		// twice the share: 2/3 * [1,0] + 1/3 * [0,1] normalized.
		let keywords =
			parse_keywords(r#"{"😀": ["Happy", "Face"], "😐": ["Face"]}"#).unwrap();
		let embeddings = embeddings_of(&[("happy", vec![1.0, 0.0]), ("face", vec![0.0, 1.0])]);
		let weights = compute_weights(&keywords, &embeddings);

		let mut entries = keywords.iter();
		let (_, grinning) = entries.next().unwrap();
		let blended = blend_keywords(grinning, &embeddings, &weights).unwrap();
		assert!((blended.as_slice()[0] - 0.8944).abs() < 1e-3);
		assert!((blended.as_slice()[1] - 0.4472).abs() < 1e-3);

		let (_, neutral) = entries.next().unwrap();
		let single = blend_keywords(neutral, &embeddings, &weights).unwrap();
		assert_eq!(single.as_slice(), &[0.0, 1.0]);
	}

	#[test]
	fn single_keyword_passes_through_normalized() {
		let keywords = parse_keywords(r#"{"🍕": ["pizza"]}"#).unwrap();
		let embeddings = embeddings_of(&[("pizza", vec![0.0, 2.0])]);
		let weights = compute_weights(&keywords, &embeddings);

		let (_, list) = keywords.iter().next().unwrap();
		let blended = blend_keywords(list, &embeddings, &weights).unwrap();

		assert_eq!(blended.as_slice(), &[0.0, 1.0]);
	}

	#[test]
	fn unknown_keywords_blend_to_none() {
		let keywords = parse_keywords(r#"{"👻": ["ghost", "spooky"]}"#).unwrap();
		let embeddings = embeddings_of(&[("pizza", vec![1.0, 0.0])]);
		let weights = compute_weights(&keywords, &embeddings);

		let (_, list) = keywords.iter().next().unwrap();
		assert!(blend_keywords(list, &embeddings, &weights).is_none());
	}

	#[test]
	fn empty_keyword_list_blends_to_none() {
		let keywords = parse_keywords(r#"{"😶": []}"#).unwrap();
		let embeddings = embeddings_of(&[("pizza", vec![1.0, 0.0])]);
		let weights = compute_weights(&keywords, &embeddings);

		let (_, list) = keywords.iter().next().unwrap();
		assert!(blend_keywords(list, &embeddings, &weights).is_none());
	}

	#[test]
	fn cancelling_vectors_blend_to_none() {
		// Equal weights on opposing vectors sum to exactly zero.
		let keywords = parse_keywords(r#"{"😵": ["up", "down"]}"#).unwrap();
		let embeddings = embeddings_of(&[("up", vec![1.0, 0.0]), ("down", vec![-1.0, 0.0])]);
		let weights = compute_weights(&keywords, &embeddings);

		let (_, list) = keywords.iter().next().unwrap();
		assert!(blend_keywords(list, &embeddings, &weights).is_none());
	}

	#[test]
	fn writes_one_line_per_blendable_emoji() {
		let keywords =
			parse_keywords(r#"{"🍕": ["pizza"], "👻": ["ghost"], "😀": ["happy"]}"#).unwrap();
		let embeddings =
			embeddings_of(&[("pizza", vec![1.0, 0.0]), ("happy", vec![0.0, 1.0])]);
		let weights = compute_weights(&keywords, &embeddings);

		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("emoji.txt");
		let stats = write_vectors(&keywords, &embeddings, &weights, &output).unwrap();

		assert_eq!(stats.written, 2);
		assert_eq!(stats.skipped, 1);

		let text = std::fs::read_to_string(&output).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0], "🍕 1.000000 0.000000");
		assert_eq!(lines[1], "😀 0.000000 1.000000");
	}
}
