// This module defines the `RecordReader` trait, the only I/O dependency of the geometry decoders.
//
// # Overview
//
// A record reader is a sequential cursor over one record's bytes. It supports big-endian and
// little-endian integer reads, little-endian doubles and skipping. Every read advances the
// cursor; reading past the end fails instead of producing default values.

use anyhow::{Result, ensure};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

/// A simple alias for types implementing both `Seek` and `Read`, used for convenience.
pub trait SeekRead: Seek + Read {}

/// Sequential typed reads over the bytes of a shapefile record.
pub trait RecordReader {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current position within the readable data.
	fn position(&mut self) -> u64;

	/// Sets the current position within the readable data.
	///
	/// # Errors
	/// Returns an error if the position lies beyond the end of the data.
	fn set_position(&mut self, position: u64) -> Result<()>;

	/// Checks if there is no data to read.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of bytes remaining to be read.
	fn remaining(&mut self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	/// Checks if there are any bytes remaining to be read.
	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Reads a big-endian signed 32-bit integer, as used by record headers.
	fn read_i32_be(&mut self) -> Result<i32> {
		Ok(self.get_reader().read_i32::<BigEndian>()?)
	}

	/// Reads a little-endian signed 32-bit integer, as used by shape types, counts and offsets.
	fn read_i32_le(&mut self) -> Result<i32> {
		Ok(self.get_reader().read_i32::<LittleEndian>()?)
	}

	/// Reads a little-endian IEEE-754 double.
	fn read_f64_le(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<LittleEndian>()?)
	}

	/// Advances the cursor by `length` bytes without reading them.
	///
	/// # Errors
	/// Returns an error if fewer than `length` bytes remain.
	fn skip(&mut self, length: u64) -> Result<()> {
		let remaining = self.remaining();
		ensure!(
			length <= remaining,
			"cannot skip {length} bytes, only {remaining} bytes remaining"
		);
		self.get_reader().seek(SeekFrom::Current(length as i64))?;
		Ok(())
	}

	/// Returns a sub-reader limited to the next `length` bytes and moves this reader past them.
	///
	/// # Errors
	/// Returns an error if fewer than `length` bytes remain.
	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn RecordReader + 'b>>;
}
