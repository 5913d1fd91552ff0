mod orientation;

pub use orientation::*;
