use crate::Coordinates;
use anyhow::{Context, Result, ensure};
use shpkit_core::{Config, PartValidation, io::RecordReader};

/// Part and point counts at the start of a polyline or polygon body.
pub(crate) struct PartCounts {
	pub num_parts: usize,
	pub num_points: usize,
}

pub(crate) fn read_counts(reader: &mut dyn RecordReader, config: &Config) -> Result<PartCounts> {
	let num_parts = reader.read_i32_le().context("Failed to read number of parts")?;
	let num_points = reader.read_i32_le().context("Failed to read number of points")?;
	ensure!(num_parts >= 0, "negative number of parts: {num_parts}");
	ensure!(num_points >= 0, "negative number of points: {num_points}");
	config.check_point_count(num_points as usize)?;
	Ok(PartCounts {
		num_parts: num_parts as usize,
		num_points: num_points as usize,
	})
}

/// Reads one part-start offset per part and returns the number of points in every part.
pub(crate) fn read_part_lengths(
	reader: &mut dyn RecordReader,
	counts: &PartCounts,
	config: &Config,
) -> Result<Vec<usize>> {
	let mut offsets = Vec::with_capacity(counts.num_parts.min(capacity_hint(reader, 4)));
	for k in 0..counts.num_parts {
		offsets.push(
			reader
				.read_i32_le()
				.with_context(|| format!("Failed to read offset of part {k}"))?,
		);
	}
	config.part_validation.part_lengths(&offsets, counts.num_points)
}

/// Handles the offset table of a single-part record, whose only entry is always 0.
pub(crate) fn skip_single_offset(reader: &mut dyn RecordReader, config: &Config) -> Result<()> {
	match config.part_validation {
		PartValidation::Trust => reader.skip(4).context("Failed to skip part offset"),
		PartValidation::Strict => {
			let offset = reader.read_i32_le().context("Failed to read part offset")?;
			ensure!(offset == 0, "first part offset must be 0, found {offset}");
			Ok(())
		}
	}
}

/// Reads `count` consecutive `(x, y)` pairs.
pub(crate) fn read_coordinates(reader: &mut dyn RecordReader, count: usize) -> Result<Vec<Coordinates>> {
	let mut coordinates = Vec::with_capacity(count.min(capacity_hint(reader, 16)));
	for i in 0..count {
		let x = reader.read_f64_le().with_context(|| format!("Failed to read point {i} of {count}"))?;
		let y = reader.read_f64_le().with_context(|| format!("Failed to read point {i} of {count}"))?;
		coordinates.push(Coordinates::new(x, y));
	}
	Ok(coordinates)
}

/// Upper bound for allocations, so that corrupt counts cannot reserve more than the record holds.
fn capacity_hint(reader: &mut dyn RecordReader, item_size: u64) -> usize {
	(reader.remaining() / item_size) as usize
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::shapefile::test_utils::encode_raw;
	use shpkit_core::io::RecordReaderSlice;

	#[test]
	fn counts() {
		let data = encode_raw(2, 7, &[], &[]);
		let counts = read_counts(&mut RecordReaderSlice::new(&data), &Config::default()).unwrap();
		assert_eq!(counts.num_parts, 2);
		assert_eq!(counts.num_points, 7);
	}

	#[test]
	fn negative_counts() {
		let data = encode_raw(-1, 7, &[], &[]);
		let err = read_counts(&mut RecordReaderSlice::new(&data), &Config::default()).err().unwrap();
		assert_eq!(err.to_string(), "negative number of parts: -1");

		let data = encode_raw(1, -7, &[], &[]);
		let err = read_counts(&mut RecordReaderSlice::new(&data), &Config::default()).err().unwrap();
		assert_eq!(err.to_string(), "negative number of points: -7");
	}

	#[test]
	fn point_limit() {
		let data = encode_raw(1, 1000, &[], &[]);
		let config = Config::default().with_max_points(999);
		let err = read_counts(&mut RecordReaderSlice::new(&data), &config).err().unwrap();
		assert_eq!(err.to_string(), "record declares 1000 points, limit is 999");
	}

	#[test]
	fn part_lengths() {
		let data = encode_raw(3, 6, &[0, 1, 4], &[]);
		let mut reader = RecordReaderSlice::new(&data);
		let counts = read_counts(&mut reader, &Config::default()).unwrap();
		let lengths = read_part_lengths(&mut reader, &counts, &Config::default()).unwrap();
		assert_eq!(lengths, vec![1, 3, 2]);
	}

	#[test]
	fn missing_offsets() {
		let data = encode_raw(3, 6, &[0, 1], &[]);
		let mut reader = RecordReaderSlice::new(&data);
		let counts = read_counts(&mut reader, &Config::default()).unwrap();
		let err = read_part_lengths(&mut reader, &counts, &Config::default()).unwrap_err();
		assert_eq!(err.to_string(), "Failed to read offset of part 2");
	}

	#[test]
	fn single_offset() {
		let data = encode_raw(1, 0, &[3], &[]);

		let mut reader = RecordReaderSlice::new(&data);
		reader.skip(8).unwrap();
		assert!(skip_single_offset(&mut reader, &Config::default()).is_ok());
		assert!(!reader.has_remaining());

		let mut reader = RecordReaderSlice::new(&data);
		reader.skip(8).unwrap();
		let err = skip_single_offset(&mut reader, &Config::new_strict()).unwrap_err();
		assert_eq!(err.to_string(), "first part offset must be 0, found 3");
	}

	#[test]
	fn coordinates() {
		let data = encode_raw(0, 0, &[], &[[1.0, 2.0], [3.0, 4.0]]);
		let mut reader = RecordReaderSlice::new(&data);
		reader.skip(8).unwrap();
		let coordinates = read_coordinates(&mut reader, 2).unwrap();
		assert_eq!(coordinates, vec![Coordinates::new(1.0, 2.0), Coordinates::new(3.0, 4.0)]);
		assert!(!reader.has_remaining());
	}

	#[test]
	fn truncated_coordinates() {
		let data = encode_raw(0, 0, &[], &[[1.0, 2.0]]);
		let mut reader = RecordReaderSlice::new(&data);
		reader.skip(8).unwrap();
		let err = read_coordinates(&mut reader, 2).unwrap_err();
		assert_eq!(err.to_string(), "Failed to read point 1 of 2");
	}

	#[test]
	fn huge_count_does_not_preallocate() {
		let data = encode_raw(0, 0, &[], &[]);
		let mut reader = RecordReaderSlice::new(&data);
		reader.skip(8).unwrap();
		assert!(read_coordinates(&mut reader, usize::MAX).is_err());
	}
}
