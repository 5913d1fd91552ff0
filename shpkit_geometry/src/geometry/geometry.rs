use super::*;
use anyhow::Result;
use shpkit_core::BoundingBox;
use std::fmt::Debug;

/// The value decoded from one polyline or polygon record.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	pub fn new_line_string<T: Copy + Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(&value))
	}
	pub fn new_multi_line_string<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(&value))
	}
	pub fn new_polygon<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(&value))
	}
	pub fn new_multi_polygon<T: Copy + Into<f64>>(value: Vec<Vec<Vec<[T; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(&value))
	}

	#[must_use]
	pub fn get_type(&self) -> &'static str {
		match self {
			Geometry::LineString(_) => "LineString",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	#[must_use]
	pub fn is_multi(&self) -> bool {
		matches!(self, Geometry::MultiLineString(_) | Geometry::MultiPolygon(_))
	}

	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiLineString(_) | Geometry::MultiPolygon(_) => self,
		}
	}

	#[must_use]
	pub fn area(&self) -> f64 {
		match self {
			Geometry::LineString(g) => g.area(),
			Geometry::MultiLineString(g) => g.area(),
			Geometry::Polygon(g) => g.area(),
			Geometry::MultiPolygon(g) => g.area(),
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::LineString(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
		}
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<BoundingBox> {
		match self {
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.get_type()).field(inner).finish()
	}
}

impl From<Geometry> for geo::Geometry<f64> {
	fn from(geometry: Geometry) -> Self {
		match geometry {
			Geometry::LineString(g) => geo::Geometry::LineString(g.into()),
			Geometry::MultiLineString(g) => geo::Geometry::MultiLineString(g.into()),
			Geometry::Polygon(g) => geo::Geometry::Polygon(g.into()),
			Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(g.into()),
		}
	}
}
