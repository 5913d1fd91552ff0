use std::fmt::Debug;

/// An axis-aligned rectangle as stored in front of every indexed shapefile record.
///
/// Values are kept exactly as decoded. `x_min <= x_max` and `y_min <= y_max` are not
/// enforced, use [`BoundingBox::is_ordered`] to check.
///
/// # Examples
/// ```
/// use shpkit_core::BoundingBox;
///
/// let bbox = BoundingBox::new(-10.0, -5.0, 10.0, 5.0);
/// assert_eq!(bbox.as_tuple(), (-10.0, -5.0, 10.0, 5.0));
/// assert!(bbox.is_ordered());
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl BoundingBox {
	#[must_use]
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> BoundingBox {
		BoundingBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	/// Returns `[x_min, y_min, x_max, y_max]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}

	/// Checks that the minimum does not exceed the maximum on either axis.
	#[must_use]
	pub fn is_ordered(&self) -> bool {
		self.x_min <= self.x_max && self.y_min <= self.y_max
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.x_max - self.x_min
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.y_max - self.y_min
	}
}

impl From<[f64; 4]> for BoundingBox {
	fn from(value: [f64; 4]) -> Self {
		BoundingBox::new(value[0], value[1], value[2], value[3])
	}
}

impl From<BoundingBox> for [f64; 4] {
	fn from(value: BoundingBox) -> Self {
		value.as_array()
	}
}

impl Debug for BoundingBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"BoundingBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_values_verbatim() {
		let bbox = BoundingBox::new(3.0, 4.0, 1.0, 2.0);
		assert_eq!(bbox.as_array(), [3.0, 4.0, 1.0, 2.0]);
		assert!(!bbox.is_ordered());
	}

	#[test]
	fn size() {
		let bbox = BoundingBox::new(-1.0, 2.0, 4.0, 5.0);
		assert_eq!(bbox.width(), 5.0);
		assert_eq!(bbox.height(), 3.0);
	}

	#[test]
	fn array_conversions() {
		let bbox = BoundingBox::from([1.0, 2.0, 3.0, 4.0]);
		assert_eq!(bbox, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
		let array: [f64; 4] = bbox.into();
		assert_eq!(array, [1.0, 2.0, 3.0, 4.0]);
	}

	#[test]
	fn debug() {
		let bbox = BoundingBox::new(-10.0, -5.5, 10.0, 5.0);
		assert_eq!(format!("{bbox:?}"), "BoundingBox(-10, -5.5, 10, 5)");
	}
}
