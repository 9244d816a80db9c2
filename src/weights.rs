// Weights - inverse-frequency keyword weighting

use std::collections::HashMap;

use crate::config::EPSILON;
use crate::glove::EmbeddingTable;
use crate::keywords::KeywordTable;

/// Relative frequencies and inverse-frequency weights for every
/// keyword that has an embedding.
pub struct WordWeights {
	pub frequencies: HashMap<String, f32>,
	pub weights: HashMap<String, f32>,
}

impl WordWeights {
	pub fn weight(&self, word: &str) -> Option<f32> {
		self.weights.get(word).copied()
	}

	pub fn frequency(&self, word: &str) -> Option<f32> {
		self.frequencies.get(word).copied()
	}

	pub fn contains(&self, word: &str) -> bool {
		self.weights.contains_key(word)
	}

	pub fn len(&self) -> usize {
		self.weights.len()
	}

	pub fn is_empty(&self) -> bool {
		self.weights.is_empty()
	}
}

/// Tallies every keyword occurrence across all emoji, lowercased, then
/// weights each word by `1 / (frequency + EPSILON)`. Rare words end up
/// dominating the blend; fillers like "face" get damped.
///
/// Keywords without an embedding never enter the tally, so they cannot
/// skew the frequencies of the words that do.
pub fn compute_weights(keywords: &KeywordTable, embeddings: &EmbeddingTable) -> WordWeights {
	let mut counts: HashMap<String, usize> = HashMap::new();
	let mut total = 0usize;

	for (_, list) in keywords.iter() {
		for keyword in list {
			let word = keyword.to_lowercase();
			if embeddings.contains(&word) {
				*counts.entry(word).or_insert(0) += 1;
				total += 1;
			}
		}
	}

	let mut frequencies = HashMap::with_capacity(counts.len());
	let mut weights = HashMap::with_capacity(counts.len());

	if total > 0 {
		for (word, count) in counts {
			let frequency = count as f32 / total as f32;
			weights.insert(word.clone(), 1.0 / (frequency + EPSILON));
			frequencies.insert(word, frequency);
		}
	}

	WordWeights { frequencies, weights }
}
