use super::*;
use std::fmt::Debug;

/// A polygon: ring 0 is the outer boundary, rings 1..N are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn outer_ring(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl GeometryTrait for PolygonGeometry {
	/// Inside the outer ring and inside none of the holes.
	fn contains_point(&self, x: f64, y: f64) -> bool {
		let Some((outer, holes)) = self.0.split_first() else {
			return false;
		};
		outer.contains_point(x, y) && !holes.iter().any(|hole| hole.contains_point(x, y))
	}

	/// Holes lie within the outer ring, so the outer ring alone defines the bounds.
	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.outer_ring().and_then(RingGeometry::compute_bounds)
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_geometry!(PolygonGeometry, RingGeometry);
