use super::fallback_zone_name;
use zonemap_geometry::{Coordinates, GeoFeature, GeoProperties, Geometry, RingGeometry, bounds_contain};

/// A named delivery area. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
	index: usize,
	name: String,
	geometry: Geometry,
	bounds: Option<[f64; 4]>,
	properties: GeoProperties,
}

impl Zone {
	/// Creates a zone from an area geometry. Bounds are computed once here.
	///
	/// Callers are expected to pass only `Polygon` or `MultiPolygon` geometries; any other
	/// geometry yields a zone that never contains a point.
	pub fn new(index: usize, name: String, geometry: Geometry, properties: GeoProperties) -> Self {
		let bounds = geometry.compute_bounds();
		Self {
			index,
			name,
			geometry,
			bounds,
			properties,
		}
	}

	/// Builds a zone from a feature, resolving its name from `name_properties`.
	pub fn from_feature<S: AsRef<str>>(index: usize, feature: GeoFeature, name_properties: &[S]) -> Self {
		let name = feature
			.properties
			.first_label(name_properties)
			.unwrap_or_else(|| fallback_zone_name(index));
		Self::new(index, name, feature.geometry, feature.properties)
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn geometry(&self) -> &Geometry {
		&self.geometry
	}

	pub fn bounds(&self) -> Option<[f64; 4]> {
		self.bounds
	}

	pub fn properties(&self) -> &GeoProperties {
		&self.properties
	}

	/// Inclusive test against the bounding box. A zone without bounds contains nothing.
	pub fn bounds_contain(&self, point: &Coordinates) -> bool {
		self
			.bounds
			.is_some_and(|b| bounds_contain(&b, point.x(), point.y()))
	}

	pub fn contains_point(&self, point: &Coordinates) -> bool {
		self.geometry.contains_point(point)
	}

	/// The outer ring of the part containing `point`.
	pub fn containing_ring(&self, point: &Coordinates) -> Option<&RingGeometry> {
		self.geometry.containing_ring(point)
	}

	/// The zone as a GeoJSON feature, with `zone_index` and `zone_name` added to its
	/// source properties.
	pub fn to_feature(&self) -> GeoFeature {
		let mut feature = GeoFeature::new(self.geometry.clone());
		feature.properties = self.properties.clone();
		feature.set_property("zone_index", self.index);
		feature.set_property("zone_name", self.name.as_str());
		feature
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::DEFAULT_NAME_PROPERTIES;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;
	use zonemap_geometry::GeoValue;

	fn square(x: f64, y: f64, size: f64) -> Geometry {
		Geometry::new_polygon(vec![vec![[x, y], [x + size, y], [x + size, y + size], [x, y + size], [x, y]]])
	}

	#[rstest]
	#[case(vec![("name", "North")], "North")]
	#[case(vec![("Name", "Upper")], "Upper")]
	#[case(vec![("name", "  "), ("zone_name", "Z1")], "Z1")]
	#[case(vec![("title", "t"), ("Title", "T")], "t")]
	#[case(vec![("Title", "T")], "T")]
	#[case(vec![("label", "ignored")], "Zone #5")]
	#[case(vec![], "Zone #5")]
	fn name_resolution(#[case] properties: Vec<(&str, &str)>, #[case] expected: &str) {
		let mut feature = GeoFeature::new(square(0.0, 0.0, 1.0));
		feature.properties = GeoProperties::from(properties);
		let zone = Zone::from_feature(4, feature, DEFAULT_NAME_PROPERTIES);
		assert_eq!(zone.name(), expected);
		assert_eq!(zone.index(), 4);
	}

	#[test]
	fn numeric_names_are_labels() {
		let mut feature = GeoFeature::new(square(0.0, 0.0, 1.0));
		feature.set_property("name", 12);
		assert_eq!(Zone::from_feature(0, feature, DEFAULT_NAME_PROPERTIES).name(), "12");
	}

	#[test]
	fn custom_name_properties() {
		let mut feature = GeoFeature::new(square(0.0, 0.0, 1.0));
		feature.set_property("name", "default");
		feature.set_property("bezirk", "Mitte");
		assert_eq!(Zone::from_feature(0, feature, &["bezirk"]).name(), "Mitte");
	}

	#[test]
	fn bounds_and_containment() {
		let zone = Zone::new(0, String::from("A"), square(2.0, 3.0, 4.0), GeoProperties::new());
		assert_eq!(zone.bounds(), Some([2.0, 3.0, 6.0, 7.0]));
		assert!(zone.bounds_contain(&Coordinates::new(6.0, 7.0)));
		assert!(zone.contains_point(&Coordinates::new(4.0, 4.0)));
		assert!(!zone.contains_point(&Coordinates::new(7.0, 4.0)));
		assert_eq!(zone.containing_ring(&Coordinates::new(4.0, 4.0)).map(|r| r.0.len()), Some(5));
	}

	#[test]
	fn bounds_of_decimal_coordinates() {
		let zone = Zone::new(0, String::from("Mitte"), square(13.3, 52.5, 0.1), GeoProperties::new());
		let bounds = zone.bounds().unwrap();
		for (actual, expected) in bounds.into_iter().zip([13.3, 52.5, 13.4, 52.6]) {
			assert_abs_diff_eq!(actual, expected, epsilon = 1e-9);
		}
	}

	#[test]
	fn empty_area_contains_nothing() {
		let zone = Zone::new(0, String::from("broken"), Geometry::new_polygon(vec![]), GeoProperties::new());
		assert_eq!(zone.bounds(), None);
		assert!(!zone.bounds_contain(&Coordinates::new(0.0, 0.0)));
		assert!(!zone.contains_point(&Coordinates::new(0.0, 0.0)));
	}

	#[test]
	fn to_feature_adds_index_and_name() {
		let mut properties = GeoProperties::new();
		properties.insert(String::from("fee"), GeoValue::from(2));
		let zone = Zone::new(3, String::from("Zone #4"), square(0.0, 0.0, 1.0), properties);
		let feature = zone.to_feature();
		assert_eq!(feature.properties.get("zone_index"), Some(&GeoValue::UInt(3)));
		assert_eq!(feature.properties.get("zone_name"), Some(&GeoValue::from("Zone #4")));
		assert_eq!(feature.properties.get("fee"), Some(&GeoValue::UInt(2)));
	}
}
