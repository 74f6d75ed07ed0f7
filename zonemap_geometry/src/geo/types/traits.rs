use std::fmt::Debug;

/// Common interface of all geometry primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns whether `(x, y)` lies inside the geometry.
	///
	/// Only area geometries (rings, polygons, multi-polygons) can contain a point.
	/// A point exactly on an edge may go either way; even-odd ray casting leaves it undefined.
	fn contains_point(&self, x: f64, y: f64) -> bool;

	/// `[x_min, y_min, x_max, y_max]`, or `None` for an empty geometry.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

/// A geometry built from an ordered list of parts: a ring of coordinates, a polygon of
/// rings, a multi-polygon of polygons.
pub trait CompositeGeometryTrait<Part>: Debug + Clone {
	/// Creates an empty geometry.
	fn new() -> Self;

	/// The parts in document order.
	fn parts(&self) -> &[Part];

	fn len(&self) -> usize {
		self.parts().len()
	}

	fn is_empty(&self) -> bool {
		self.parts().is_empty()
	}
}
