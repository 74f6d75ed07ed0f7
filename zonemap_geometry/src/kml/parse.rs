use super::tree::{Element, parse_tree};
use crate::{
	Coordinates, GeoCollection, GeoFeature, GeoProperties, GeoValue, Geometry, LineStringGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Result, bail};

/// Parses a KML document into a feature collection.
///
/// Every `Placemark` with a geometry becomes one feature, in document order, regardless of
/// how deeply it is nested in `Document` and `Folder` elements.
pub fn parse_kml(kml: &str) -> Result<GeoCollection> {
	let root = parse_tree(kml)?;
	if root.name != "kml" {
		bail!("expected a <kml> root element, found <{}>", root.name);
	}

	let mut placemarks = Vec::new();
	collect_placemarks(&root, &mut placemarks);

	let mut features = Vec::with_capacity(placemarks.len());
	for placemark in placemarks {
		match parse_placemark(placemark) {
			Some(feature) => features.push(feature),
			None => log::debug!("skipping placemark without geometry"),
		}
	}
	Ok(GeoCollection { features })
}

fn collect_placemarks<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
	for child in &element.children {
		if child.name == "Placemark" {
			out.push(child);
		} else {
			collect_placemarks(child, out);
		}
	}
}

fn parse_placemark(placemark: &Element) -> Option<GeoFeature> {
	let geometry = placemark.children.iter().find_map(parse_geometry)?;

	let mut feature = GeoFeature::new(geometry);
	if let Some(id) = placemark.attribute("id") {
		feature.set_id(GeoValue::from(id));
	}
	feature.properties = parse_properties(placemark);
	Some(feature)
}

fn parse_properties(placemark: &Element) -> GeoProperties {
	let mut properties = GeoProperties::new();
	for key in ["name", "description"] {
		if let Some(text) = placemark.child_text(key) {
			properties.insert(key.to_string(), GeoValue::from(text));
		}
	}

	if let Some(extended) = placemark.child("ExtendedData") {
		for data in extended.children_named("Data") {
			if let Some(key) = data.attribute("name") {
				let value = data.child("value").map_or("", |v| v.text.trim());
				properties.insert(key.to_string(), GeoValue::from(value));
			}
		}
		for schema_data in extended.children_named("SchemaData") {
			for simple in schema_data.children_named("SimpleData") {
				if let Some(key) = simple.attribute("name") {
					properties.insert(key.to_string(), GeoValue::from(simple.text.trim()));
				}
			}
		}
	}
	properties
}

/// Returns `None` for elements that are not geometries at all.
fn parse_geometry(element: &Element) -> Option<Geometry> {
	Some(match element.name.as_str() {
		"Point" => match parse_coordinates(element).first() {
			Some(c) => Geometry::Point(PointGeometry::from(*c)),
			None => Geometry::Unsupported(String::from("Point")),
		},
		"LineString" | "LinearRing" => Geometry::LineString(LineStringGeometry(parse_coordinates(element))),
		"Polygon" => Geometry::Polygon(parse_polygon(element)),
		"MultiGeometry" => parse_multi_geometry(element),
		"Model" | "Track" | "MultiTrack" => Geometry::Unsupported(element.name.clone()),
		_ => return None,
	})
}

/// An area declared without a usable outer boundary still yields a polygon, with no
/// rings, so that it keeps its place in the document but contains nothing.
fn parse_polygon(element: &Element) -> PolygonGeometry {
	let outer = element
		.child("outerBoundaryIs")
		.and_then(|b| b.child("LinearRing"))
		.map(|ring| RingGeometry(parse_coordinates(ring)));

	let Some(outer) = outer else {
		log::warn!("polygon without outer boundary");
		return PolygonGeometry(Vec::new());
	};

	let mut rings = vec![outer];
	for inner in element.children_named("innerBoundaryIs") {
		for ring in inner.children_named("LinearRing") {
			rings.push(RingGeometry(parse_coordinates(ring)));
		}
	}
	PolygonGeometry(rings)
}

/// Polygon parts become one multipolygon; other parts are dropped. Without any polygon
/// part, the first other geometry stands for the whole.
fn parse_multi_geometry(element: &Element) -> Geometry {
	let mut polygons = Vec::new();
	let mut others = Vec::new();
	for part in element.children.iter().filter_map(parse_geometry) {
		match part {
			Geometry::Polygon(p) => polygons.push(p),
			Geometry::MultiPolygon(m) => polygons.extend(m.0),
			other => others.push(other),
		}
	}

	if !polygons.is_empty() {
		Geometry::MultiPolygon(MultiPolygonGeometry(polygons))
	} else {
		others
			.into_iter()
			.next()
			.unwrap_or_else(|| Geometry::Unsupported(String::from("MultiGeometry")))
	}
}

/// Reads the `coordinates` child: whitespace-separated `lon,lat[,alt]` tuples.
fn parse_coordinates(element: &Element) -> Vec<Coordinates> {
	let Some(text) = element.child("coordinates").map(|c| c.text.as_str()) else {
		return Vec::new();
	};

	text
		.split_whitespace()
		.filter_map(|tuple| {
			let coordinates = parse_tuple(tuple);
			if coordinates.is_none() {
				log::warn!("skipping invalid KML coordinate tuple '{tuple}'");
			}
			coordinates
		})
		.collect()
}

fn parse_tuple(tuple: &str) -> Option<Coordinates> {
	let mut parts = tuple.split(',');
	let lng = parts.next()?.trim().parse::<f64>().ok()?;
	let lat = parts.next()?.trim().parse::<f64>().ok()?;
	let coordinates = Coordinates::new(lng, lat);
	coordinates.is_finite().then_some(coordinates)
}
