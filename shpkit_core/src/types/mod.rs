//! Small value types shared by the record decoders.

mod bounding_box;
pub use bounding_box::*;
