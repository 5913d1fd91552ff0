use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry, traits::merge_bounds};
use anyhow::{Context, Result};
use shpkit_core::BoundingBox;
use std::fmt::Debug;

/// Represents a collection of line strings, as produced by polyline records with several parts.
#[derive(Clone, Default, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		for (index, line) in self.0.iter().enumerate() {
			line.verify().with_context(|| format!("invalid line {index}"))?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundingBox> {
		merge_bounds(self.0.iter().map(LineStringGeometry::compute_bounds))
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);

impl From<MultiLineStringGeometry> for geo::MultiLineString<f64> {
	fn from(geometry: MultiLineStringGeometry) -> Self {
		geo::MultiLineString::new(geometry.0.into_iter().map(geo::LineString::from).collect())
	}
}
