//! Decoder settings shared by all record decoders.

pub use crate::config::part_validation::PartValidation;
use anyhow::{Result, ensure};
use std::sync::Arc;
mod part_validation;

/// Controls how strictly geometry records are checked while decoding.
///
/// The default trusts the counts and offsets declared by a record and only fails when the
/// underlying bytes run out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
	/// How declared part offsets are checked against each other and against the point count.
	pub part_validation: PartValidation,
	/// Upper bound on the number of points a single record may declare.
	pub max_points: Option<usize>,
}

impl Config {
	#[must_use]
	pub fn new_strict() -> Self {
		Self {
			part_validation: PartValidation::Strict,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_part_validation(mut self, part_validation: PartValidation) -> Self {
		self.part_validation = part_validation;
		self
	}

	#[must_use]
	pub fn with_max_points(mut self, max_points: usize) -> Self {
		self.max_points = Some(max_points);
		self
	}

	pub fn arc(self) -> Arc<Self> {
		Arc::new(self)
	}

	/// Fails if `num_points` exceeds `max_points`.
	pub fn check_point_count(&self, num_points: usize) -> Result<()> {
		if let Some(max_points) = self.max_points {
			ensure!(
				num_points <= max_points,
				"record declares {num_points} points, limit is {max_points}"
			);
		}
		Ok(())
	}
}
