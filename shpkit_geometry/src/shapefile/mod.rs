//! Decoders for the geometry part of ESRI Shapefile records.
//!
//! Record headers are big-endian, everything after them is little-endian. A polyline or polygon
//! record body looks like this:
//!
//! | bytes           | content                                   |
//! |-----------------|-------------------------------------------|
//! | 4               | shape type                                |
//! | 32              | bounding box: x_min, y_min, x_max, y_max  |
//! | 4               | number of parts `P`                       |
//! | 4               | number of points `N`                      |
//! | 4 × `P`         | index of the first point of every part    |
//! | 16 × `N`        | points as x, y doubles                    |
//!
//! [`read_bbox`], [`read_polyline`] and [`read_polygon`] start after the shape type;
//! [`ShapeRecord`] handles complete records including their headers.

mod bbox;
mod parts;
mod polygon;
mod polyline;
mod record;
mod record_header;
mod shape_type;

pub use bbox::*;
pub use polygon::*;
pub use polyline::*;
pub use record::*;
pub use record_header::*;
pub use shape_type::*;

#[cfg(test)]
pub(crate) mod test_utils {
	use shpkit_core::io::{RecordWriter, RecordWriterBlob};

	/// Encodes a polyline or polygon body: counts, part offsets and points.
	pub fn encode_parts(parts: &[&[[f64; 2]]]) -> Vec<u8> {
		let num_points: usize = parts.iter().map(|part| part.len()).sum();
		let mut writer = RecordWriterBlob::new();
		writer.write_i32_le(parts.len() as i32).unwrap();
		writer.write_i32_le(num_points as i32).unwrap();
		let mut offset = 0;
		for part in parts {
			writer.write_i32_le(offset as i32).unwrap();
			offset += part.len();
		}
		for part in parts {
			writer.write_points(part).unwrap();
		}
		writer.into_vec()
	}

	/// Encodes a body with explicitly given counts and offsets.
	pub fn encode_raw(num_parts: i32, num_points: i32, offsets: &[i32], points: &[[f64; 2]]) -> Vec<u8> {
		let mut writer = RecordWriterBlob::new();
		writer.write_i32_le(num_parts).unwrap();
		writer.write_i32_le(num_points).unwrap();
		for offset in offsets {
			writer.write_i32_le(*offset).unwrap();
		}
		writer.write_points(points).unwrap();
		writer.into_vec()
	}
}
