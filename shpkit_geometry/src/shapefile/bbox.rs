use anyhow::Result;
use shpkit_core::{BoundingBox, io::RecordReader};

/// Reads the four little-endian doubles `x_min, y_min, x_max, y_max` in front of an indexed
/// record. The values are not validated.
pub fn read_bbox(reader: &mut dyn RecordReader) -> Result<BoundingBox> {
	let x_min = reader.read_f64_le()?;
	let y_min = reader.read_f64_le()?;
	let x_max = reader.read_f64_le()?;
	let y_max = reader.read_f64_le()?;
	Ok(BoundingBox::new(x_min, y_min, x_max, y_max))
}
