//! Contains the record cursor, the decoder configuration and small value types like bounding boxes.

pub mod config;

pub mod io;

pub mod types;

pub use config::*;
pub use types::*;
