//! This module provides the `RecordWriterBlob` struct for writing record values into memory.
//!
//! # Examples
//!
//! ```rust
//! use shpkit_core::io::{RecordWriter, RecordWriterBlob};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut writer = RecordWriterBlob::new();
//!     writer.write_i32_be(1)?;
//!     writer.write_i32_le(1)?;
//!     assert_eq!(writer.into_vec(), vec![0, 0, 0, 1, 1, 0, 0, 0]);
//!     Ok(())
//! }
//! ```

use super::RecordWriter;
use anyhow::Result;
use std::io::{Cursor, Write};

/// A record writer collecting bytes in a growable buffer.
#[derive(Default)]
pub struct RecordWriterBlob {
	cursor: Cursor<Vec<u8>>,
}

impl RecordWriterBlob {
	#[must_use]
	pub fn new() -> RecordWriterBlob {
		RecordWriterBlob {
			cursor: Cursor::new(Vec::new()),
		}
	}

	/// Consumes the writer and returns the written bytes.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.cursor.into_inner()
	}
}

impl RecordWriter for RecordWriterBlob {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut self.cursor
	}

	fn position(&mut self) -> Result<u64> {
		Ok(self.cursor.position())
	}
}
