//! Byte cursors over shapefile record payloads.
//!
//! # Overview
//!
//! Shapefile records mix byte orders: record headers are big-endian while shape types, counts,
//! offsets and coordinates are little-endian. [`RecordReader`] offers exactly the reads the
//! decoders need, independent of where the bytes come from. [`RecordReaderSlice`] reads from an
//! in-memory slice, [`RecordWriterBlob`] produces record bytes, mainly for tests and benchmarks.
//!
//! # Examples
//!
//! ```rust
//! use shpkit_core::io::{RecordReader, RecordReaderSlice};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let data = &[0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00];
//!     let mut reader = RecordReaderSlice::new(data);
//!     assert_eq!(reader.read_i32_be()?, 1);
//!     assert_eq!(reader.read_i32_le()?, 1);
//!     Ok(())
//! }
//! ```

mod record_reader;
mod record_reader_slice;
mod record_writer;
mod record_writer_blob;

pub use record_reader::*;
pub use record_reader_slice::*;
pub use record_writer::*;
pub use record_writer_blob::*;
