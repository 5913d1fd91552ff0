use super::{RecordHeader, ShapeType, read_bbox, read_polygon_with_config, read_polyline_with_config};
use crate::Geometry;
use anyhow::{Context, Result, bail};
use log::trace;
use shpkit_core::{
	BoundingBox, Config,
	io::{RecordReader, RecordReaderSlice},
};
use shpkit_derive::context;

/// One decoded record of a `.shp` file.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeRecord {
	pub header: RecordHeader,
	pub shape_type: ShapeType,
	/// `None` for null shapes.
	pub bbox: Option<BoundingBox>,
	/// `None` for null shapes.
	pub geometry: Option<Geometry>,
}

impl ShapeRecord {
	/// Reads one record, header included.
	///
	/// The content is decoded from a sub-reader bounded by the declared content length, so
	/// `reader` always ends up behind the record, even if parts of the content (like the Z and M
	/// arrays) are not decoded.
	#[context("Failed to read shape record")]
	pub fn read(reader: &mut dyn RecordReader, config: &Config) -> Result<ShapeRecord> {
		let header = RecordHeader::read(reader)?;
		let length = header.content_bytes()?;
		let mut content = reader.get_sub_reader(length)?;
		let (shape_type, bbox, geometry) = Self::read_content(content.as_mut(), header.number, config)?;
		Ok(ShapeRecord {
			header,
			shape_type,
			bbox,
			geometry,
		})
	}

	#[context("Failed to read content of record {number}")]
	fn read_content(
		reader: &mut dyn RecordReader,
		number: i32,
		config: &Config,
	) -> Result<(ShapeType, Option<BoundingBox>, Option<Geometry>)> {
		let shape_type = ShapeType::from_i32(reader.read_i32_le().context("Failed to read shape type")?)?;
		trace!("record {number}: {shape_type}, {} bytes", reader.len());

		if shape_type == ShapeType::Null {
			return Ok((shape_type, None, None));
		}

		if !shape_type.is_polyline() && !shape_type.is_polygon() {
			bail!("unsupported shape type {shape_type}");
		}

		let bbox = read_bbox(reader).context("Failed to read bounding box")?;
		let geometry = if shape_type.is_polyline() {
			read_polyline_with_config(reader, config)?
		} else {
			read_polygon_with_config(reader, config)?
		};
		Ok((shape_type, Some(bbox), Some(geometry)))
	}

	/// Reads records back to back until `data` is exhausted.
	///
	/// `data` holds the record stream of a `.shp` file, without the 100 byte file header.
	pub fn read_all(data: &[u8], config: &Config) -> Result<Vec<ShapeRecord>> {
		let mut reader = RecordReaderSlice::new(data);
		let mut records = Vec::new();
		while reader.has_remaining() {
			let position = reader.position();
			let record = ShapeRecord::read(&mut reader, config)
				.with_context(|| format!("Failed to read record at byte {position}"))?;
			records.push(record);
		}
		Ok(records)
	}
}
