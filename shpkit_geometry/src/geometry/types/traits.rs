use anyhow::Result;
use shpkit_core::BoundingBox;
use std::fmt::Debug;

/// Defines the basic interface for geometric primitives, providing common functionality
/// for all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns the area of the geometry.
	/// For non-area geometries (lines), this returns 0.
	fn area(&self) -> f64;

	/// Verifies the geometric validity of the geometry.
	/// For example, checks if there are enough points or if rings are properly closed.
	/// Decoders never call this; deciding what to do with invalid records is up to the caller.
	fn verify(&self) -> Result<()>;

	/// Computes the bounding box of all coordinates, or `None` if the geometry is empty.
	fn compute_bounds(&self) -> Option<BoundingBox>;
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into its multi-geometry equivalent.
	fn into_multi(self) -> Multi;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a ring is made of coordinates, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Merges the bounds of several parts, skipping empty ones.
pub(crate) fn merge_bounds(bounds: impl Iterator<Item = Option<BoundingBox>>) -> Option<BoundingBox> {
	bounds.flatten().reduce(|a, b| {
		BoundingBox::new(
			a.x_min.min(b.x_min),
			a.y_min.min(b.y_min),
			a.x_max.max(b.x_max),
			a.y_max.max(b.y_max),
		)
	})
}

/// Computes the bounds of a list of coordinates.
pub(crate) fn coordinate_bounds(coords: &[super::Coordinates]) -> Option<BoundingBox> {
	let first = coords.first()?;
	let mut bbox = BoundingBox::new(first.x(), first.y(), first.x(), first.y());
	for coord in coords {
		bbox.x_min = bbox.x_min.min(coord.x());
		bbox.y_min = bbox.y_min.min(coord.y());
		bbox.x_max = bbox.x_max.max(coord.x());
		bbox.y_max = bbox.y_max.max(coord.y());
	}
	Some(bbox)
}
