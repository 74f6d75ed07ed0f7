use super::{Coordinates, GeometryTrait};
use std::fmt::Debug;

/// A closed ring: the boundary of a polygon or of one of its holes.
///
/// The closing point may be given explicitly (first == last, as in KML and GeoJSON)
/// or left implicit; containment treats the last vertex as connected to the first
/// either way. Self-intersections are not detected.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	/// Even-odd ray casting. Rings with fewer than 3 vertices or with non-finite
	/// coordinates contain nothing.
	fn contains_point(&self, x: f64, y: f64) -> bool {
		let coords = &self.0;
		if coords.len() < 3 || !x.is_finite() || !y.is_finite() {
			return false;
		}

		let mut inside = false;
		let mut j = coords.len() - 1;

		for i in 0..coords.len() {
			let (pi, pj) = (&coords[i], &coords[j]);
			if !pi.is_finite() {
				return false;
			}
			let (xi, yi, xj, yj) = (pi.x(), pi.y(), pj.x(), pj.y());

			// The edge straddles the horizontal through y and lies right of x at that height.
			if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
				inside = !inside;
			}
			j = i;
		}

		inside
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		if self.0.is_empty() {
			return None;
		}

		let mut x_min = f64::MAX;
		let mut y_min = f64::MAX;
		let mut x_max = f64::MIN;
		let mut y_max = f64::MIN;

		for coord in &self.0 {
			x_min = x_min.min(coord.x());
			y_min = y_min.min(coord.y());
			x_max = x_max.max(coord.x());
			y_max = y_max.max(coord.y());
		}

		Some([x_min, y_min, x_max, y_max])
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_geometry!(RingGeometry, Coordinates);
