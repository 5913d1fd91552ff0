//! This module provides the `RecordReaderSlice` struct for reading record values from a byte slice.
//!
//! # Examples
//!
//! ```rust
//! use shpkit_core::io::{RecordReader, RecordReaderSlice};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let data = &[0, 0, 0, 0, 0, 0, 0xF0, 0x3F, 0xFF];
//!     let mut reader = RecordReaderSlice::new(data);
//!     assert_eq!(reader.read_f64_le()?, 1.0);
//!     assert_eq!(reader.remaining(), 1);
//!     Ok(())
//! }
//! ```

use super::{RecordReader, SeekRead};
use anyhow::{Result, anyhow, bail};
use std::io::Cursor;

/// A record reader over a borrowed byte slice.
pub struct RecordReaderSlice<'a> {
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a> RecordReaderSlice<'a> {
	/// Creates a new `RecordReaderSlice` positioned at the start of `slice`.
	#[must_use]
	pub fn new(slice: &'a [u8]) -> RecordReaderSlice<'a> {
		RecordReaderSlice {
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl RecordReader for RecordReaderSlice<'_> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}

	fn set_position(&mut self, position: u64) -> Result<()> {
		if position > self.len {
			bail!("set position outside length")
		}
		self.cursor.set_position(position);
		Ok(())
	}

	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn RecordReader + 'b>> {
		let start = self.cursor.position();
		let end = start + length;
		if end > self.len {
			bail!(
				"requested {length} bytes, but only {} bytes remaining",
				self.len.saturating_sub(start)
			);
		}

		self.cursor.set_position(end);
		Ok(Box::new(RecordReaderSlice::new(
			self
				.cursor
				.get_ref()
				.get(start as usize..end as usize)
				.ok_or(anyhow!("out of bounds"))?,
		)))
	}
}
