use super::*;
use std::fmt::Debug;

/// Any geometry a boundary document can carry.
///
/// Only `Polygon` and `MultiPolygon` describe areas. Everything the readers do not model
/// (multi-points, geometry collections, 3D models, ...) ends up as `Unsupported` with its
/// type name, so it can be reported and filtered instead of failing the whole document.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	Unsupported(String),
}

impl Geometry {
	pub fn new_point(value: [f64; 2]) -> Self {
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string(value: Vec<[f64; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon(value: Vec<Vec<[f64; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_polygon(value: Vec<Vec<Vec<[f64; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	pub fn type_name(&self) -> &str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::Unsupported(name) => name,
		}
	}

	/// `true` for the geometries that can describe a zone.
	pub fn is_area(&self) -> bool {
		matches!(self, Geometry::Polygon(_) | Geometry::MultiPolygon(_))
	}

	/// Containment is only defined for areas; all other variants return `false`.
	pub fn contains_point(&self, point: &Coordinates) -> bool {
		match self {
			Geometry::Polygon(g) => g.contains_point(point.x(), point.y()),
			Geometry::MultiPolygon(g) => g.contains_point(point.x(), point.y()),
			_ => false,
		}
	}

	/// The outer ring of the polygon part containing `point`, if any.
	///
	/// For a multipolygon this is the first containing part in part order.
	pub fn containing_ring(&self, point: &Coordinates) -> Option<&RingGeometry> {
		let polygon = match self {
			Geometry::Polygon(g) if g.contains_point(point.x(), point.y()) => g,
			Geometry::MultiPolygon(g) => g.find_part(point.x(), point.y())?,
			_ => return None,
		};
		polygon.outer_ring()
	}

	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
			Geometry::Unsupported(_) => None,
		}
	}

	/// Number of polygon parts; 0 for non-area geometries.
	pub fn part_count(&self) -> usize {
		match self {
			Geometry::Polygon(_) => 1,
			Geometry::MultiPolygon(g) => g.len(),
			_ => 0,
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(g) => ("Point", g),
			Geometry::LineString(g) => ("LineString", g),
			Geometry::Polygon(g) => ("Polygon", g),
			Geometry::MultiPolygon(g) => ("MultiPolygon", g),
			Geometry::Unsupported(name) => ("Unsupported", name),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}
