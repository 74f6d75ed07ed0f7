use crate::{
	Coordinates, GeoCollection, GeoFeature, GeoProperties, GeoValue, Geometry, LineStringGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Parses a GeoJSON document.
///
/// Accepts a `FeatureCollection`, a single `Feature` or a bare geometry object. Broken
/// geometries do not fail the document: they are reported and read as empty geometries.
pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let value: Value = serde_json::from_str(json).context("invalid JSON")?;
	let Value::Object(object) = &value else {
		bail!("GeoJSON must be an object, found {}", json_kind(&value));
	};

	let features = match type_of(object)? {
		"FeatureCollection" => {
			let Some(Value::Array(features)) = object.get("features") else {
				bail!("FeatureCollection without a \"features\" array");
			};
			features
				.iter()
				.enumerate()
				.map(|(index, feature)| parse_feature(feature).with_context(|| format!("feature {index}")))
				.collect::<Result<Vec<_>>>()?
		}
		"Feature" => vec![parse_feature(&value)?],
		_ => vec![GeoFeature::new(parse_geometry(&value))],
	};

	Ok(GeoCollection { features })
}

fn parse_feature(value: &Value) -> Result<GeoFeature> {
	let Value::Object(object) = value else {
		bail!("feature must be an object, found {}", json_kind(value));
	};
	let kind = type_of(object)?;
	if kind != "Feature" {
		bail!("expected type \"Feature\", found \"{kind}\"");
	}

	let geometry = match object.get("geometry") {
		None | Some(Value::Null) => Geometry::Unsupported(String::from("null")),
		Some(geometry) => parse_geometry(geometry),
	};

	let mut feature = GeoFeature::new(geometry);
	match object.get("id") {
		None | Some(Value::Null) => {}
		Some(id) => feature.set_id(GeoValue::from(id)),
	}
	if let Some(Value::Object(properties)) = object.get("properties") {
		feature.properties = properties
			.iter()
			.map(|(key, value)| (key.clone(), GeoValue::from(value)))
			.collect::<GeoProperties>();
	}
	Ok(feature)
}

fn type_of(object: &Map<String, Value>) -> Result<&str> {
	object
		.get("type")
		.and_then(Value::as_str)
		.context("GeoJSON object without a \"type\" string")
}

/// Reads one geometry object. Never fails: what cannot be read is logged and turned into
/// an empty geometry (or `Unsupported`), which contains nothing.
fn parse_geometry(value: &Value) -> Geometry {
	let Some(kind) = value.get("type").and_then(Value::as_str) else {
		log::warn!("geometry without a type");
		return Geometry::Unsupported(String::from("unknown"));
	};
	let coordinates = value.get("coordinates").unwrap_or(&Value::Null);

	match kind {
		"Point" => match parse_position(coordinates) {
			Some(c) => Geometry::Point(PointGeometry::from(c)),
			None => {
				log::warn!("invalid Point coordinates");
				Geometry::Unsupported(String::from("Point"))
			}
		},
		"LineString" => Geometry::LineString(LineStringGeometry(positions_or_empty(coordinates, kind))),
		"Polygon" => Geometry::Polygon(parse_polygon(coordinates).unwrap_or_else(|| {
			log::warn!("invalid Polygon coordinates, reading it as empty");
			PolygonGeometry(Vec::new())
		})),
		"MultiPolygon" => Geometry::MultiPolygon(parse_multi_polygon(coordinates).unwrap_or_else(|| {
			log::warn!("invalid MultiPolygon coordinates, reading it as empty");
			MultiPolygonGeometry(Vec::new())
		})),
		other => Geometry::Unsupported(other.to_string()),
	}
}

fn parse_position(value: &Value) -> Option<Coordinates> {
	let array = value.as_array()?;
	if array.len() < 2 {
		return None;
	}
	let coordinates = Coordinates::new(array[0].as_f64()?, array[1].as_f64()?);
	coordinates.is_finite().then_some(coordinates)
}

fn parse_positions(value: &Value) -> Option<Vec<Coordinates>> {
	value.as_array()?.iter().map(parse_position).collect()
}

fn positions_or_empty(value: &Value, kind: &str) -> Vec<Coordinates> {
	parse_positions(value).unwrap_or_else(|| {
		log::warn!("invalid {kind} coordinates, reading it as empty");
		Vec::new()
	})
}

fn parse_polygon(value: &Value) -> Option<PolygonGeometry> {
	let rings = value
		.as_array()?
		.iter()
		.map(|ring| parse_positions(ring).map(RingGeometry))
		.collect::<Option<Vec<_>>>()?;
	Some(PolygonGeometry(rings))
}

fn parse_multi_polygon(value: &Value) -> Option<MultiPolygonGeometry> {
	let polygons = value.as_array()?.iter().map(parse_polygon).collect::<Option<Vec<_>>>()?;
	Some(MultiPolygonGeometry(polygons))
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn feature_collection() -> Result<()> {
		let collection = parse_geojson(
			r#"{"type":"FeatureCollection","features":[
				{"type":"Feature","id":7,"properties":{"name":"A","fee":2.5,"active":true},
				 "geometry":{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10],[0,0]],[[4,4],[6,4],[6,6],[4,4]]]}},
				{"type":"Feature","properties":null,"geometry":{"type":"Point","coordinates":[1,2,3]}},
				{"type":"Feature","properties":{},"geometry":null}
			]}"#,
		)?;
		assert_eq!(collection.len(), 3);

		let first = &collection.features[0];
		assert_eq!(first.id, Some(GeoValue::UInt(7)));
		assert_eq!(first.properties.get("name"), Some(&GeoValue::from("A")));
		assert_eq!(first.properties.get("fee"), Some(&GeoValue::Double(2.5)));
		assert_eq!(first.properties.get("active"), Some(&GeoValue::Bool(true)));
		assert_eq!(first.geometry.type_name(), "Polygon");
		assert!(first.geometry.contains_point(&Coordinates::new(1.0, 1.0)));

		assert_eq!(collection.features[1].geometry, Geometry::new_point([1.0, 2.0]));
		assert!(collection.features[1].properties.is_empty());
		assert_eq!(collection.features[2].geometry, Geometry::Unsupported(String::from("null")));
		Ok(())
	}

	#[test]
	fn single_feature_and_bare_geometry() -> Result<()> {
		let feature = parse_geojson(
			r#"{"type":"Feature","properties":{"name":"B"},"geometry":{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[1,1],[0,0]]]]}}"#,
		)?;
		assert_eq!(feature.len(), 1);
		assert_eq!(feature.features[0].geometry.part_count(), 1);

		let bare = parse_geojson(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#)?;
		assert_eq!(bare.features[0].geometry, Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]));
		assert!(bare.features[0].properties.is_empty());
		Ok(())
	}

	#[rstest]
	#[case(r#"{"type":"Polygon","coordinates":[[0,0],[1,0]]}"#, "Polygon")]
	#[case(r#"{"type":"Polygon","coordinates":"nope"}"#, "Polygon")]
	#[case(r#"{"type":"Polygon"}"#, "Polygon")]
	#[case(r#"{"type":"MultiPolygon","coordinates":[[[0,0],[1,0],[1,1]]]}"#, "MultiPolygon")]
	fn malformed_areas_are_empty(#[case] json: &str, #[case] type_name: &str) -> Result<()> {
		let geometry = &parse_geojson(json)?.features[0].geometry;
		assert_eq!(geometry.type_name(), type_name);
		assert_eq!(geometry.part_count(), if type_name == "Polygon" { 1 } else { 0 });
		assert!(!geometry.contains_point(&Coordinates::new(0.5, 0.2)));
		assert_eq!(geometry.compute_bounds(), None);
		Ok(())
	}

	#[rstest]
	#[case("MultiPoint")]
	#[case("MultiLineString")]
	#[case("GeometryCollection")]
	fn unsupported_types(#[case] kind: &str) -> Result<()> {
		let json = format!(r#"{{"type":"{kind}","coordinates":[]}}"#);
		let geometry = &parse_geojson(&json)?.features[0].geometry;
		assert_eq!(geometry, &Geometry::Unsupported(kind.to_string()));
		Ok(())
	}

	#[rstest]
	#[case("")]
	#[case("[]")]
	#[case("{}")]
	#[case(r#"{"type":"FeatureCollection"}"#)]
	#[case(r#"{"type":"FeatureCollection","features":[1]}"#)]
	#[case(r#"{"type":"FeatureCollection","features":[{"type":"Polygon"}]}"#)]
	#[case("<kml/>")]
	fn document_errors(#[case] json: &str) {
		assert!(parse_geojson(json).is_err());
	}
}
