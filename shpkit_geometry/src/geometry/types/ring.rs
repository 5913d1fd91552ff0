use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, traits::coordinate_bounds};
use crate::math;
use anyhow::{Result, ensure};
use shpkit_core::BoundingBox;
use std::fmt::Debug;

/// Represents a closed ring, the building block of polygons.
///
/// Shapefiles store rings closed (first point repeated at the end), but the decoder copies
/// points verbatim and does not enforce this. Use [`GeometryTrait::verify`] to check.
#[derive(Clone, Default, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Returns `true` if the ring winds clockwise in a y-up coordinate system.
	///
	/// Rings with zero signed area, including rings with fewer than two points, are treated as
	/// counter-clockwise.
	#[must_use]
	pub fn is_clockwise(&self) -> bool {
		math::is_clockwise(&self.0)
	}

	/// Returns the signed area: positive for counter-clockwise, negative for clockwise rings.
	#[must_use]
	pub fn signed_area(&self) -> f64 {
		math::signed_area(&self.0)
	}
}

impl GeometryTrait for RingGeometry {
	/// Returns the unsigned area enclosed by the ring.
	fn area(&self) -> f64 {
		self.signed_area().abs()
	}

	/// Verifies that the ring is valid by checking:
	/// - It has at least 4 coordinates (3 unique points plus the closing point).
	/// - It is closed, i.e., the first and last points are identical.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.0.first() == self.0.last(), "Ring must be closed");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundingBox> {
		coordinate_bounds(&self.0)
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

/// Converts a `geo::LineString<f64>` into a `RingGeometry`, preserving the order of coordinates.
impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

impl From<RingGeometry> for geo::LineString<f64> {
	fn from(geometry: RingGeometry) -> Self {
		geo::LineString::new(geometry.0.into_iter().map(geo::Coord::from).collect())
	}
}
