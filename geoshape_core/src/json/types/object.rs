//! JSON object type that keeps its keys in insertion order.

use super::{JsonArray, JsonValue};
use crate::GeoError;
use anyhow::Result;

/// A JSON object backed by a `Vec` of key/value pairs.
///
/// Setting an existing key replaces its value in place, new keys are appended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonObject(pub Vec<(String, JsonValue)>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Returns the value for `key`, failing if it is missing.
	///
	/// # Errors
	/// Returns a format fault naming the missing key.
	pub fn get_required(&self, key: &str) -> Result<&JsonValue> {
		self
			.get(key)
			.ok_or_else(|| GeoError::format(format!("missing key '{key}'")).into())
	}

	/// # Errors
	/// Returns a format fault if the value exists but is not a string.
	pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
		self.get(key).map(JsonValue::as_str).transpose()
	}

	/// # Errors
	/// Returns a format fault if the value exists but is not an array.
	pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>> {
		self.get(key).map(JsonValue::as_array).transpose()
	}

	/// Sets `key` to `value`, converting it into a `JsonValue`.
	pub fn set(&mut self, key: &str, value: impl Into<JsonValue>) {
		let value = value.into();
		if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == key) {
			entry.1 = value;
		} else {
			self.0.push((key.to_owned(), value));
		}
	}

	/// Sets `key` only if `value` is `Some`.
	pub fn set_optional<T>(&mut self, key: &str, value: Option<T>)
	where
		JsonValue: From<T>,
	{
		if let Some(v) = value {
			self.set(key, JsonValue::from(v));
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter().map(|(k, v)| (k, v))
	}
}

impl IntoIterator for JsonObject {
	type Item = (String, JsonValue);
	type IntoIter = std::vec::IntoIter<(String, JsonValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		let mut object = JsonObject::new();
		for (key, value) in input {
			object.set(key, JsonValue::from(value));
		}
		object
	}
}
