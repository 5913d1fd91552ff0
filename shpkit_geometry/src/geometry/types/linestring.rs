use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait, traits::coordinate_bounds};
use anyhow::{Result, ensure};
use shpkit_core::BoundingBox;
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming a line, typically used for polylines or paths in 2D space.
#[derive(Clone, Default, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	/// Returns the area of the geometry.
	///
	/// For a line, this is always 0 because a line has no area.
	fn area(&self) -> f64 {
		0.0
	}

	/// Ensures that the `LineStringGeometry` has at least two points.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least two points");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundingBox> {
		coordinate_bounds(&self.0)
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	/// Creates a new, empty `LineStringGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	/// Returns a reference to the internal vector of coordinates representing the points of the line.
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	/// Returns a mutable reference to the internal vector of coordinates representing the points of the line.
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}

	/// Consumes the `LineStringGeometry` and returns the internal vector of coordinates.
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	/// Converts this single line into a `MultiLineStringGeometry` containing just this one line.
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

impl From<LineStringGeometry> for geo::LineString<f64> {
	fn from(geometry: LineStringGeometry) -> Self {
		geo::LineString::new(geometry.0.into_iter().map(geo::Coord::from).collect())
	}
}
