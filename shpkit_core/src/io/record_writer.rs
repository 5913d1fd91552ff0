//! This module defines the `RecordWriter` trait, the encoding counterpart of `RecordReader`.

use anyhow::Result;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::Write;

/// Sequential typed writes producing shapefile record bytes.
pub trait RecordWriter {
	/// Returns a mutable reference to the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Returns the current write position.
	fn position(&mut self) -> Result<u64>;

	fn write_i32_be(&mut self, value: i32) -> Result<()> {
		Ok(self.get_writer().write_i32::<BigEndian>(value)?)
	}

	fn write_i32_le(&mut self, value: i32) -> Result<()> {
		Ok(self.get_writer().write_i32::<LittleEndian>(value)?)
	}

	fn write_f64_le(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<LittleEndian>(value)?)
	}

	/// Writes raw bytes.
	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		Ok(self.get_writer().write_all(buf)?)
	}

	/// Writes `(x, y)` pairs as little-endian doubles.
	fn write_points(&mut self, points: &[[f64; 2]]) -> Result<()> {
		for [x, y] in points {
			self.write_f64_le(*x)?;
			self.write_f64_le(*y)?;
		}
		Ok(())
	}
}
