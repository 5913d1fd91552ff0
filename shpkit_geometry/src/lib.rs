//! Geometry model and decoders for ESRI Shapefile polyline and polygon records.
//!
//! ```rust
//! use shpkit_core::io::{RecordReaderSlice, RecordWriter, RecordWriterBlob};
//! use shpkit_geometry::{Geometry, shapefile::read_polyline};
//!
//! let mut writer = RecordWriterBlob::new();
//! writer.write_i32_le(1).unwrap(); // parts
//! writer.write_i32_le(2).unwrap(); // points
//! writer.write_i32_le(0).unwrap(); // part offset
//! writer.write_points(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
//! let data = writer.into_vec();
//!
//! let geometry = read_polyline(&mut RecordReaderSlice::new(&data)).unwrap();
//! assert_eq!(geometry, Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]));
//! ```

mod geometry;
pub mod math;
pub mod shapefile;

pub use geometry::*;
