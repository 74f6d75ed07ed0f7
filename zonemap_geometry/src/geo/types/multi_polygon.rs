use super::{GeometryTrait, PolygonGeometry, union_all_bounds};
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have an outer ring and optional inner holes.
/// A point is inside if it is inside any one part, honoring that part's own holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	/// The first part containing the point, in part order.
	#[must_use]
	pub fn find_part(&self, x: f64, y: f64) -> Option<&PolygonGeometry> {
		self.0.iter().find(|poly| poly.contains_point(x, y))
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	fn contains_point(&self, x: f64, y: f64) -> bool {
		self.find_part(x, y).is_some()
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		union_all_bounds(self.0.iter().map(GeometryTrait::compute_bounds))
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_geometry!(MultiPolygonGeometry, PolygonGeometry);
