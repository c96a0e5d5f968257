use super::GeoValue;
use geoshape_core::json::JsonObject;
use std::fmt::Debug;

/// The properties of a feature. Keys keep their insertion order, which for shapefiles is the
/// column order of the attribute table.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: Vec<(String, GeoValue)>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties { properties: Vec::new() }
	}

	#[must_use]
	pub fn with_capacity(capacity: usize) -> GeoProperties {
		GeoProperties {
			properties: Vec::with_capacity(capacity),
		}
	}

	/// Sets `key` to `value`, replacing an existing value in place.
	pub fn insert(&mut self, key: String, value: GeoValue) {
		if let Some(entry) = self.properties.iter_mut().find(|(k, _)| *k == key) {
			entry.1 = value;
		} else {
			self.properties.push((key, value));
		}
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &GeoValue)> {
		self.properties.iter().map(|(k, v)| (k, v))
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		for (key, value) in &self.properties {
			obj.set(key, value.to_json());
		}
		obj
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = std::vec::IntoIter<(String, GeoValue)>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		let mut properties = GeoProperties::new();
		for (key, value) in iter {
			properties.insert(key, value);
		}
		properties
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}
