use super::*;
use anyhow::{Context, Result};
use shpkit_core::BoundingBox;
use std::fmt::Debug;

/// A polygon: one exterior ring and any number of interior rings (holes).
#[derive(Clone, Default, PartialEq)]
pub struct PolygonGeometry {
	exterior: RingGeometry,
	interiors: Vec<RingGeometry>,
}

impl PolygonGeometry {
	#[must_use]
	pub fn new(exterior: RingGeometry) -> Self {
		Self {
			exterior,
			interiors: Vec::new(),
		}
	}

	/// Builds a polygon from a list of rings; the first one is the exterior, the rest are holes.
	#[must_use]
	pub fn from_rings(rings: Vec<RingGeometry>) -> Self {
		let mut rings = rings.into_iter();
		let mut polygon = Self::new(rings.next().unwrap_or_default());
		polygon.interiors.extend(rings);
		polygon
	}

	#[must_use]
	pub fn exterior(&self) -> &RingGeometry {
		&self.exterior
	}

	#[must_use]
	pub fn interiors(&self) -> &[RingGeometry] {
		&self.interiors
	}

	pub fn set_exterior(&mut self, ring: RingGeometry) {
		self.exterior = ring;
	}

	pub fn add_hole(&mut self, ring: RingGeometry) {
		self.interiors.push(ring);
	}

	/// Returns the exterior followed by all holes.
	#[must_use]
	pub fn into_rings(self) -> Vec<RingGeometry> {
		let mut rings = Vec::with_capacity(self.interiors.len() + 1);
		rings.push(self.exterior);
		rings.extend(self.interiors);
		rings
	}

	#[must_use]
	pub fn into_inner(self) -> (RingGeometry, Vec<RingGeometry>) {
		(self.exterior, self.interiors)
	}
}

impl GeometryTrait for PolygonGeometry {
	/// Area of the exterior minus the area of all holes, independent of winding.
	fn area(&self) -> f64 {
		self.exterior.area() - self.interiors.iter().map(RingGeometry::area).sum::<f64>()
	}

	fn verify(&self) -> Result<()> {
		self.exterior.verify().context("invalid exterior ring")?;
		for (index, ring) in self.interiors.iter().enumerate() {
			ring.verify().with_context(|| format!("invalid interior ring {index}"))?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundingBox> {
		self.exterior.compute_bounds()
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list()
			.entry(&self.exterior)
			.entries(&self.interiors)
			.finish()
	}
}

impl<T> From<Vec<T>> for PolygonGeometry
where
	RingGeometry: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		Self::from_rings(value.into_iter().map(RingGeometry::from).collect())
	}
}

impl<'a, T> From<&'a Vec<T>> for PolygonGeometry
where
	RingGeometry: From<&'a T>,
{
	fn from(value: &'a Vec<T>) -> Self {
		Self::from_rings(value.iter().map(RingGeometry::from).collect())
	}
}

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		PolygonGeometry {
			exterior: RingGeometry::from(exterior),
			interiors: interiors.into_iter().map(RingGeometry::from).collect(),
		}
	}
}

/// Note that `geo::Polygon` closes open rings by repeating their first point.
impl From<PolygonGeometry> for geo::Polygon<f64> {
	fn from(geometry: PolygonGeometry) -> Self {
		geo::Polygon::new(
			geometry.exterior.into(),
			geometry.interiors.into_iter().map(geo::LineString::from).collect(),
		)
	}
}
