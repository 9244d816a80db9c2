//! Core domain types
//!
//! [`UnitVector`] wraps a unit-length embedding so cosine similarity
//! reduces to a dot product.

use std::fmt;

use crate::config::OUTPUT_PRECISION;

/// A vector normalized to unit length.
#[derive(Debug, Clone)]
pub struct UnitVector(Vec<f32>);

impl UnitVector {
	/// Normalizes raw components to unit length.
	///
	/// Returns `None` when the norm is exactly zero, since such a
	/// vector carries no direction.
	pub fn from_raw(data: Vec<f32>) -> Option<Self> {
		let norm = data.iter().map(|x| x * x).sum::<f32>().sqrt();
		if norm == 0.0 {
			return None;
		}
		Some(Self(data.into_iter().map(|x| x / norm).collect()))
	}

	/// Wraps components that are already unit length, e.g. rows read
	/// back from a built vector table.
	pub fn raw(data: Vec<f32>) -> Self {
		Self(data)
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Cosine similarity between two unit vectors.
	pub fn similarity(&self, other: &Self) -> f32 {
		self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
	}
}

impl fmt::Display for UnitVector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, x) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{:.prec$}", x, prec = OUTPUT_PRECISION)?;
		}
		Ok(())
	}
}
