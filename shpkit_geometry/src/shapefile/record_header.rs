use anyhow::{Context, Result, ensure};
use shpkit_core::io::RecordReader;

/// The big-endian header in front of every record of a `.shp` file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordHeader {
	/// Record number, starting at 1.
	pub number: i32,
	/// Length of the record content in 16-bit words.
	pub content_length: i32,
}

impl RecordHeader {
	pub const SIZE: u64 = 8;

	pub fn read(reader: &mut dyn RecordReader) -> Result<Self> {
		let number = reader.read_i32_be().context("Failed to read record number")?;
		let content_length = reader.read_i32_be().context("Failed to read content length")?;
		Ok(Self { number, content_length })
	}

	/// Length of the record content in bytes.
	pub fn content_bytes(&self) -> Result<u64> {
		ensure!(
			self.content_length >= 0,
			"record {} has negative content length {}",
			self.number,
			self.content_length
		);
		Ok(self.content_length as u64 * 2)
	}
}
