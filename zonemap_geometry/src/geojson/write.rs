use crate::{Coordinates, GeoFeature, Geometry, RingGeometry};
use serde_json::{Value, json};

/// Serializes a feature as a GeoJSON `Feature`.
///
/// Coordinates are rounded to `precision` decimal places if given. `Unsupported`
/// geometries are written as `null`.
pub fn feature_to_json(feature: &GeoFeature, precision: Option<u8>) -> Value {
	let mut object = json!({
		"type": "Feature",
		"geometry": geometry_to_json(&feature.geometry, precision),
		"properties": feature.properties.to_json(),
	});
	if let Some(id) = &feature.id {
		object["id"] = id.to_json();
	}
	object
}

pub fn geometry_to_json(geometry: &Geometry, precision: Option<u8>) -> Value {
	let (kind, coordinates) = match geometry {
		Geometry::Point(g) => ("Point", position(&g.0, precision)),
		Geometry::LineString(g) => ("LineString", positions(&g.0, precision)),
		Geometry::Polygon(g) => ("Polygon", rings(&g.0, precision)),
		Geometry::MultiPolygon(g) => (
			"MultiPolygon",
			Value::Array(g.0.iter().map(|p| rings(&p.0, precision)).collect()),
		),
		Geometry::Unsupported(_) => return Value::Null,
	};
	json!({ "type": kind, "coordinates": coordinates })
}

fn position(c: &Coordinates, precision: Option<u8>) -> Value {
	json!(c.to_rounded(precision))
}

fn positions(c: &[Coordinates], precision: Option<u8>) -> Value {
	Value::Array(c.iter().map(|c| position(c, precision)).collect())
}

fn rings(r: &[RingGeometry], precision: Option<u8>) -> Value {
	Value::Array(r.iter().map(|r| positions(&r.0, precision)).collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoCollection, GeoValue};
	use pretty_assertions::assert_eq;

	#[test]
	fn feature() {
		let feature = GeoFeature::new_example();
		let json = feature_to_json(&feature, Some(1));
		assert_eq!(json["type"], "Feature");
		assert_eq!(json["id"], 13);
		assert_eq!(json["properties"], json!({"is_nice": true, "name": "Nice", "population": 348_085}));
		assert_eq!(json["geometry"]["type"], "MultiPolygon");
		assert_eq!(json["geometry"]["coordinates"][0][0][2], json!([2.5, 4.0]));
	}

	#[test]
	fn rounds_coordinates() {
		let geometry = Geometry::new_point([13.404_954, 52.520_008]);
		assert_eq!(geometry_to_json(&geometry, Some(3)), json!({"type": "Point", "coordinates": [13.405, 52.52]}));
		assert_eq!(
			geometry_to_json(&geometry, None),
			json!({"type": "Point", "coordinates": [13.404_954, 52.520_008]})
		);
	}

	#[test]
	fn unsupported_is_null() {
		let mut feature = GeoFeature::new(Geometry::Unsupported(String::from("MultiPoint")));
		feature.set_property("name", "x");
		assert_eq!(
			feature_to_json(&feature, None),
			json!({"type": "Feature", "geometry": null, "properties": {"name": "x"}})
		);
	}

	#[test]
	fn collection_survives_a_reparse() -> anyhow::Result<()> {
		let mut feature = GeoFeature::new(Geometry::new_polygon(vec![vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 0.0]]]));
		feature.set_id(GeoValue::from("z"));
		let collection = GeoCollection::from(vec![feature]);
		let text = collection.to_json(None).to_string();
		assert_eq!(crate::geojson::parse_geojson(&text)?, collection);
		Ok(())
	}
}
