use super::{Coordinates, GeometryTrait};
use std::fmt::Debug;

/// An open path. Lines have no area and never contain anything.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		let first = self.0.first()?;
		Some(self.0.iter().fold([first.x(), first.y(), first.x(), first.y()], |b, c| {
			[b[0].min(c.x()), b[1].min(c.y()), b[2].max(c.x()), b[3].max(c.y())]
		}))
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_geometry!(LineStringGeometry, Coordinates);
