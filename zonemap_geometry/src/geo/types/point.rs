use super::{Coordinates, GeometryTrait};
use std::fmt::Debug;

/// A single position. Points have no area and never contain anything.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl GeometryTrait for PointGeometry {
	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.0.x(), self.0.y(), self.0.x(), self.0.y()])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl From<Coordinates> for PointGeometry {
	fn from(value: Coordinates) -> Self {
		Self(value)
	}
}

impl From<[f64; 2]> for PointGeometry {
	fn from(value: [f64; 2]) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn never_contains() {
		let point = PointGeometry::from([1.0, 1.0]);
		assert!(!point.contains_point(1.0, 1.0));
		assert_eq!(point.compute_bounds(), Some([1.0, 1.0, 1.0, 1.0]));
	}
}
