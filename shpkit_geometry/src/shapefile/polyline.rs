use super::parts::{read_coordinates, read_counts, read_part_lengths, skip_single_offset};
use crate::{Geometry, LineStringGeometry, MultiLineStringGeometry};
use anyhow::Result;
use log::trace;
use shpkit_core::{Config, io::RecordReader};
use shpkit_derive::context;

/// Reads a polyline body with the default [`Config`].
///
/// A record with exactly one part becomes a [`Geometry::LineString`], every other part count
/// (including zero) a [`Geometry::MultiLineString`].
pub fn read_polyline(reader: &mut dyn RecordReader) -> Result<Geometry> {
	read_polyline_with_config(reader, &Config::default())
}

#[context("Failed to read polyline")]
pub fn read_polyline_with_config(reader: &mut dyn RecordReader, config: &Config) -> Result<Geometry> {
	let counts = read_counts(reader, config)?;
	trace!("polyline: {} parts, {} points", counts.num_parts, counts.num_points);

	if counts.num_parts == 1 {
		skip_single_offset(reader, config)?;
		let line = LineStringGeometry(read_coordinates(reader, counts.num_points)?);
		return Ok(Geometry::LineString(line));
	}

	let lengths = read_part_lengths(reader, &counts, config)?;
	let mut lines = Vec::with_capacity(lengths.len());
	for length in lengths {
		lines.push(LineStringGeometry(read_coordinates(reader, length)?));
	}
	Ok(Geometry::MultiLineString(MultiLineStringGeometry(lines)))
}
