use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry, traits::merge_bounds};
use anyhow::{Context, Result};
use shpkit_core::BoundingBox;
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have an outer ring and optional inner holes.
/// This struct is used for complex, multi-part areas in 2D space.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

/// - `area()` returns the sum of all polygon areas.
/// - `verify()` checks that each polygon is valid.
impl GeometryTrait for MultiPolygonGeometry {
	fn area(&self) -> f64 {
		self.0.iter().map(GeometryTrait::area).sum()
	}

	fn verify(&self) -> Result<()> {
		for (index, polygon) in self.0.iter().enumerate() {
			polygon.verify().with_context(|| format!("invalid polygon {index}"))?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundingBox> {
		merge_bounds(self.0.iter().map(PolygonGeometry::compute_bounds))
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

/// Prints the list of polygons in a developer-friendly format.
impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl From<MultiPolygonGeometry> for geo::MultiPolygon<f64> {
	fn from(geometry: MultiPolygonGeometry) -> Self {
		geo::MultiPolygon::new(geometry.0.into_iter().map(geo::Polygon::from).collect())
	}
}
