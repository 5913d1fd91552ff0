use super::parts::{read_coordinates, read_counts, read_part_lengths};
use crate::{Geometry, MultiPolygonGeometry, PolygonGeometry, RingGeometry};
use anyhow::Result;
use log::trace;
use shpkit_core::{Config, io::RecordReader};
use shpkit_derive::context;
use std::mem;

/// Reads a polygon body with the default [`Config`].
///
/// Ring roles are inferred from their order and winding, see [`PolygonBuilder`].
pub fn read_polygon(reader: &mut dyn RecordReader) -> Result<Geometry> {
	read_polygon_with_config(reader, &Config::default())
}

#[context("Failed to read polygon")]
pub fn read_polygon_with_config(reader: &mut dyn RecordReader, config: &Config) -> Result<Geometry> {
	let counts = read_counts(reader, config)?;
	trace!("polygon: {} parts, {} points", counts.num_parts, counts.num_points);

	let lengths = read_part_lengths(reader, &counts, config)?;
	let mut builder = PolygonBuilder::new();
	for length in lengths {
		builder.push_ring(RingGeometry(read_coordinates(reader, length)?));
	}
	Ok(builder.finish())
}

/// Groups the rings of a polygon record into polygons in a single forward pass.
///
/// The first ring is always an exterior. Every later clockwise ring closes the current polygon
/// and starts a new one; every later counter-clockwise ring is a hole of the current polygon.
#[derive(Debug, Default)]
pub struct PolygonBuilder {
	current: PolygonGeometry,
	completed: Vec<PolygonGeometry>,
	ring_count: usize,
}

impl PolygonBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push_ring(&mut self, ring: RingGeometry) {
		if self.ring_count == 0 {
			self.current.set_exterior(ring);
		} else if ring.is_clockwise() {
			let polygon = mem::replace(&mut self.current, PolygonGeometry::new(ring));
			self.completed.push(polygon);
		} else {
			self.current.add_hole(ring);
		}
		self.ring_count += 1;
	}

	/// Returns a [`Geometry::Polygon`] if all rings belong to one polygon, a
	/// [`Geometry::MultiPolygon`] otherwise. Without any ring the polygon is empty.
	#[must_use]
	pub fn finish(self) -> Geometry {
		if self.completed.is_empty() {
			return Geometry::Polygon(self.current);
		}
		let mut polygons = self.completed;
		polygons.push(self.current);
		Geometry::MultiPolygon(MultiPolygonGeometry(polygons))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		CompositeGeometryTrait,
		shapefile::test_utils::{encode_parts, encode_raw},
	};
	use approx::assert_relative_eq;
	use rstest::rstest;
	use shpkit_core::io::RecordReaderSlice;

	const SQUARE_CW: [[f64; 2]; 5] = [[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0], [0.0, 0.0]];
	const SQUARE_CCW: [[f64; 2]; 5] = [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]];
	const HOLE_CCW: [[f64; 2]; 5] = [[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 2.0], [1.0, 1.0]];
	const HOLE_CW: [[f64; 2]; 5] = [[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 1.0], [1.0, 1.0]];
	const FAR_CW: [[f64; 2]; 5] = [[10.0, 10.0], [10.0, 12.0], [12.0, 12.0], [12.0, 10.0], [10.0, 10.0]];
	const FAR_CCW: [[f64; 2]; 5] = [[10.0, 10.0], [12.0, 10.0], [12.0, 12.0], [10.0, 12.0], [10.0, 10.0]];

	fn decode(parts: &[&[[f64; 2]]]) -> Geometry {
		let data = encode_parts(parts);
		read_polygon(&mut RecordReaderSlice::new(&data)).unwrap()
	}

	#[rstest]
	#[case::clockwise(&SQUARE_CW)]
	#[case::counter_clockwise(&SQUARE_CCW)]
	fn single_ring_is_polygon(#[case] ring: &[[f64; 2]]) {
		let geometry = decode(&[ring]);
		assert_eq!(geometry, Geometry::new_polygon(vec![ring.to_vec()]));
	}

	#[test]
	fn exterior_with_hole() {
		let geometry = decode(&[&SQUARE_CW, &HOLE_CCW]);
		assert_eq!(geometry, Geometry::new_polygon(vec![SQUARE_CW.to_vec(), HOLE_CCW.to_vec()]));
		assert_relative_eq!(geometry.area(), 15.0);
		assert!(geometry.verify().is_ok());
	}

	#[test]
	fn two_exteriors() {
		let geometry = decode(&[&SQUARE_CW, &FAR_CW]);
		assert_eq!(
			geometry,
			Geometry::new_multi_polygon(vec![vec![SQUARE_CW.to_vec()], vec![FAR_CW.to_vec()]])
		);
		let Geometry::MultiPolygon(polygons) = geometry else {
			panic!("expected a multi polygon");
		};
		assert_eq!(polygons.len(), 2);
		assert!(polygons.as_vec().iter().all(|polygon| polygon.interiors().is_empty()));
	}

	#[test]
	fn holes_stay_with_their_exterior() {
		let geometry = decode(&[&SQUARE_CW, &HOLE_CCW, &FAR_CW, &FAR_CCW]);
		assert_eq!(
			geometry,
			Geometry::new_multi_polygon(vec![
				vec![SQUARE_CW.to_vec(), HOLE_CCW.to_vec()],
				vec![FAR_CW.to_vec(), FAR_CCW.to_vec()],
			])
		);
	}

	#[test]
	fn counter_clockwise_first_ring_is_still_exterior() {
		let geometry = decode(&[&SQUARE_CCW, &HOLE_CCW]);
		assert_eq!(geometry, Geometry::new_polygon(vec![SQUARE_CCW.to_vec(), HOLE_CCW.to_vec()]));
	}

	#[test]
	fn counter_clockwise_exterior_with_clockwise_ring() {
		// exterior wound counter-clockwise, inner ring clockwise: the inner ring starts a new polygon
		let geometry = decode(&[&SQUARE_CCW, &HOLE_CW]);
		assert_eq!(
			geometry,
			Geometry::new_multi_polygon(vec![vec![SQUARE_CCW.to_vec()], vec![HOLE_CW.to_vec()]])
		);
	}

	#[test]
	fn two_counter_clockwise_squares() {
		// the second ring is counter-clockwise and therefore a hole, even though it is disjoint
		let geometry = decode(&[&SQUARE_CCW, &FAR_CCW]);
		assert_eq!(geometry, Geometry::new_polygon(vec![SQUARE_CCW.to_vec(), FAR_CCW.to_vec()]));
	}

	#[test]
	fn zero_area_ring_is_hole() {
		let flat: &[[f64; 2]] = &[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [1.0, 1.0]];
		let geometry = decode(&[&SQUARE_CW, flat]);
		assert_eq!(geometry, Geometry::new_polygon(vec![SQUARE_CW.to_vec(), flat.to_vec()]));
	}

	#[test]
	fn no_parts() {
		let data = encode_raw(0, 0, &[], &[]);
		let geometry = read_polygon(&mut RecordReaderSlice::new(&data)).unwrap();
		assert_eq!(geometry, Geometry::Polygon(PolygonGeometry::default()));
	}

	#[test]
	fn degenerate_rings_are_kept() {
		let open: &[[f64; 2]] = &[[0.0, 0.0], [0.0, 4.0], [4.0, 4.0]];
		let geometry = decode(&[open]);
		assert_eq!(geometry, Geometry::new_polygon(vec![open.to_vec()]));
		assert!(geometry.verify().is_err());
	}

	#[test]
	fn truncated() {
		let mut data = encode_parts(&[&SQUARE_CW, &HOLE_CCW]);
		data.truncate(data.len() - 8);
		let err = read_polygon(&mut RecordReaderSlice::new(&data)).unwrap_err();
		assert_eq!(format!("{err:#}"), "Failed to read polygon: Failed to read point 4 of 5: failed to fill whole buffer");
	}

	#[test]
	fn strict_mode_rejects_nonzero_first_offset() {
		let data = encode_raw(1, 1, &[1], &[[0.0, 0.0]]);
		let err = read_polygon_with_config(&mut RecordReaderSlice::new(&data), &Config::new_strict()).unwrap_err();
		assert_eq!(err.root_cause().to_string(), "first part offset must be 0, found 1");
	}

	#[test]
	fn point_limit() {
		let data = encode_parts(&[&SQUARE_CW]);
		let config = Config::default().with_max_points(4);
		let err = read_polygon_with_config(&mut RecordReaderSlice::new(&data), &config).unwrap_err();
		assert_eq!(err.root_cause().to_string(), "record declares 5 points, limit is 4");
	}

	#[test]
	fn decoding_is_deterministic() {
		let data = encode_parts(&[&SQUARE_CW, &HOLE_CCW, &FAR_CW, &FAR_CCW]);
		let first = read_polygon(&mut RecordReaderSlice::new(&data)).unwrap();
		let second = read_polygon(&mut RecordReaderSlice::new(&data)).unwrap();
		assert_eq!(first, second);
		assert!(first.is_multi());
	}

	#[test]
	fn builder_matches_decoder() {
		let mut builder = PolygonBuilder::new();
		for ring in [&SQUARE_CW[..], &HOLE_CCW, &FAR_CW] {
			builder.push_ring(RingGeometry::from(ring.to_vec()));
		}
		assert_eq!(builder.finish(), decode(&[&SQUARE_CW, &HOLE_CCW, &FAR_CW]));
	}
}
