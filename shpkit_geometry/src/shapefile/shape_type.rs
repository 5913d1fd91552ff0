use anyhow::{Result, bail};
use std::fmt::Display;

/// Shape type code stored in front of every record body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeType {
	Null = 0,
	Point = 1,
	PolyLine = 3,
	Polygon = 5,
	MultiPoint = 8,
	PointZ = 11,
	PolyLineZ = 13,
	PolygonZ = 15,
	MultiPointZ = 18,
	PointM = 21,
	PolyLineM = 23,
	PolygonM = 25,
	MultiPatch = 31,
}

impl ShapeType {
	pub fn from_i32(value: i32) -> Result<Self> {
		Ok(match value {
			0 => ShapeType::Null,
			1 => ShapeType::Point,
			3 => ShapeType::PolyLine,
			5 => ShapeType::Polygon,
			8 => ShapeType::MultiPoint,
			11 => ShapeType::PointZ,
			13 => ShapeType::PolyLineZ,
			15 => ShapeType::PolygonZ,
			18 => ShapeType::MultiPointZ,
			21 => ShapeType::PointM,
			23 => ShapeType::PolyLineM,
			25 => ShapeType::PolygonM,
			31 => ShapeType::MultiPatch,
			_ => bail!("unknown shape type {value}"),
		})
	}

	pub fn as_i32(self) -> i32 {
		self as i32
	}

	pub fn is_polyline(self) -> bool {
		matches!(self, ShapeType::PolyLine | ShapeType::PolyLineZ | ShapeType::PolyLineM)
	}

	pub fn is_polygon(self) -> bool {
		matches!(self, ShapeType::Polygon | ShapeType::PolygonZ | ShapeType::PolygonM)
	}

	/// Every type except `Null` and the single point types stores a bounding box.
	pub fn has_bbox(self) -> bool {
		!matches!(
			self,
			ShapeType::Null | ShapeType::Point | ShapeType::PointZ | ShapeType::PointM
		)
	}

	pub fn has_z(self) -> bool {
		matches!(
			self,
			ShapeType::PointZ
				| ShapeType::PolyLineZ
				| ShapeType::PolygonZ
				| ShapeType::MultiPointZ
				| ShapeType::MultiPatch
		)
	}

	pub fn has_m(self) -> bool {
		self.has_z()
			|| matches!(
				self,
				ShapeType::PointM | ShapeType::PolyLineM | ShapeType::PolygonM
			)
	}

	pub fn name(self) -> &'static str {
		match self {
			ShapeType::Null => "Null",
			ShapeType::Point => "Point",
			ShapeType::PolyLine => "PolyLine",
			ShapeType::Polygon => "Polygon",
			ShapeType::MultiPoint => "MultiPoint",
			ShapeType::PointZ => "PointZ",
			ShapeType::PolyLineZ => "PolyLineZ",
			ShapeType::PolygonZ => "PolygonZ",
			ShapeType::MultiPointZ => "MultiPointZ",
			ShapeType::PointM => "PointM",
			ShapeType::PolyLineM => "PolyLineM",
			ShapeType::PolygonM => "PolygonM",
			ShapeType::MultiPatch => "MultiPatch",
		}
	}
}

impl TryFrom<i32> for ShapeType {
	type Error = anyhow::Error;

	fn try_from(value: i32) -> Result<Self> {
		ShapeType::from_i32(value)
	}
}

impl Display for ShapeType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, ShapeType::Null)]
	#[case(3, ShapeType::PolyLine)]
	#[case(5, ShapeType::Polygon)]
	#[case(13, ShapeType::PolyLineZ)]
	#[case(25, ShapeType::PolygonM)]
	#[case(31, ShapeType::MultiPatch)]
	fn from_i32(#[case] code: i32, #[case] expected: ShapeType) {
		assert_eq!(ShapeType::from_i32(code).unwrap(), expected);
		assert_eq!(ShapeType::try_from(code).unwrap(), expected);
		assert_eq!(expected.as_i32(), code);
	}

	#[rstest]
	#[case(2)]
	#[case(-1)]
	#[case(32)]
	fn unknown_codes(#[case] code: i32) {
		let err = ShapeType::from_i32(code).unwrap_err();
		assert_eq!(err.to_string(), format!("unknown shape type {code}"));
	}

	#[test]
	fn families() {
		assert!(ShapeType::PolyLineM.is_polyline());
		assert!(!ShapeType::PolyLineM.is_polygon());
		assert!(ShapeType::PolygonZ.is_polygon());
		assert!(!ShapeType::MultiPoint.is_polyline());
	}

	#[test]
	fn measures() {
		assert!(!ShapeType::Polygon.has_z());
		assert!(!ShapeType::Polygon.has_m());
		assert!(ShapeType::PolygonZ.has_z());
		assert!(ShapeType::PolygonZ.has_m());
		assert!(!ShapeType::PolygonM.has_z());
		assert!(ShapeType::PolygonM.has_m());
	}

	#[test]
	fn bbox() {
		assert!(!ShapeType::Null.has_bbox());
		assert!(!ShapeType::PointM.has_bbox());
		assert!(ShapeType::MultiPoint.has_bbox());
		assert!(ShapeType::PolyLine.has_bbox());
	}

	#[test]
	fn display() {
		assert_eq!(ShapeType::PolyLineZ.to_string(), "PolyLineZ");
		assert_eq!(format!("{}", ShapeType::Null), "Null");
	}
}
