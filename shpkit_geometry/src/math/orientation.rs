use crate::Coordinates;

/// Accumulates `x_i * y_(i+1) - y_i * x_(i+1)` over all consecutive point pairs, wrapping the
/// last point back to the first.
///
/// The result is twice the signed area: positive for counter-clockwise, negative for clockwise
/// rings in a y-up coordinate system. Empty rings yield 0.
#[must_use]
pub fn shoelace_sum(ring: &[Coordinates]) -> f64 {
	let n = ring.len();
	let mut sum = 0.0;
	for i in 0..n {
		let p0 = &ring[i];
		let p1 = &ring[(i + 1) % n];
		sum += p0.x() * p1.y() - p0.y() * p1.x();
	}
	sum
}

/// Signed area of a ring, see [`shoelace_sum`].
#[must_use]
pub fn signed_area(ring: &[Coordinates]) -> f64 {
	shoelace_sum(ring) / 2.0
}

/// Returns `true` if the ring winds clockwise, i.e. its shoelace sum is strictly negative.
///
/// A sum of exactly zero (collinear points, fewer than two distinct points, empty rings) counts
/// as counter-clockwise.
#[must_use]
pub fn is_clockwise(ring: &[Coordinates]) -> bool {
	shoelace_sum(ring) < 0.0
}
