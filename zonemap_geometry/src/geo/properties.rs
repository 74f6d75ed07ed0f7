use super::GeoValue;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// Feature properties, ordered by key.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties(BTreeMap<String, GeoValue>);

impl GeoProperties {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<GeoValue>) {
		self.0.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.0.get(key)
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, GeoValue> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// The label of the first key in `keys` that holds one, checked in order.
	pub fn first_label<S: AsRef<str>>(&self, keys: &[S]) -> Option<String> {
		keys
			.iter()
			.find_map(|key| self.get(key.as_ref()).and_then(GeoValue::as_label))
	}

	pub fn to_json(&self) -> serde_json::Value {
		serde_json::Value::Object(self.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
	}
}

impl<'a> IntoIterator for &'a GeoProperties {
	type Item = (&'a String, &'a GeoValue);
	type IntoIter = btree_map::Iter<'a, String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<K, V> FromIterator<(K, V)> for GeoProperties
where
	K: Into<String>,
	GeoValue: From<V>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), GeoValue::from(v))).collect())
	}
}

impl<K, V> From<Vec<(K, V)>> for GeoProperties
where
	K: Into<String>,
	GeoValue: From<V>,
{
	fn from(entries: Vec<(K, V)>) -> Self {
		entries.into_iter().collect()
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_label_checks_keys_in_order() {
		let props = GeoProperties::from(vec![("Name", "Upper"), ("title", "Title"), ("name", " ")]);
		assert_eq!(props.first_label(&["name", "Name", "title"]), Some(String::from("Upper")));
		assert_eq!(props.first_label(&["title", "Name"]), Some(String::from("Title")));
		assert_eq!(props.first_label(&["zone_name"]), None);
		assert_eq!(props.first_label::<&str>(&[]), None);
	}

	#[test]
	fn insert_replaces() {
		let mut props = GeoProperties::new();
		props.insert("fee", 2);
		props.insert(String::from("fee"), "free");
		assert_eq!(props.len(), 1);
		assert_eq!(props.get("fee"), Some(&GeoValue::from("free")));
	}

	#[test]
	fn to_json() {
		let props = GeoProperties::from(vec![("name", GeoValue::from("A")), ("n", GeoValue::from(2))]);
		assert_eq!(props.to_json(), serde_json::json!({"name": "A", "n": 2}));
	}

	#[test]
	fn debug() {
		let props = GeoProperties::from(vec![("b", "2"), ("a", "1")]);
		assert_eq!(format!("{props:?}"), r#"{"a": String("1"), "b": String("2")}"#);
	}
}
