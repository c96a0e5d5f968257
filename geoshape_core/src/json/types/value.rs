//! JSON value enum representing any valid JSON data.

use super::{JsonArray, JsonObject};
use crate::{
	GeoError,
	json::{parse_json_str, stringify, stringify_pretty},
};
use anyhow::Result;

/// Represents any JSON data: arrays, objects, numbers, strings, booleans and null.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parses JSON text into a `JsonValue`.
	///
	/// # Errors
	/// Returns a format fault if the text is not valid JSON.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Returns the JSON type as a lowercase string (`"array"`, `"object"`, ...).
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		match self {
			JsonValue::Array(_) => "array",
			JsonValue::Boolean(_) => "boolean",
			JsonValue::Null => "null",
			JsonValue::Number(_) => "number",
			JsonValue::Object(_) => "object",
			JsonValue::String(_) => "string",
		}
	}

	/// Serializes to a compact JSON string.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	/// Serializes to a multi-line JSON string indented with tabs.
	#[must_use]
	pub fn stringify_pretty(&self) -> String {
		stringify_pretty(self)
	}

	fn mismatch(&self, expected: &str) -> anyhow::Error {
		GeoError::format(format!("expected a JSON {expected}, found {}", self.type_as_str())).into()
	}

	/// # Errors
	/// Returns a format fault if the value is not an array.
	pub fn as_array(&self) -> Result<&JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => Err(self.mismatch("array")),
		}
	}

	/// # Errors
	/// Returns a format fault if the value is not an array.
	pub fn into_array(self) -> Result<JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => Err(self.mismatch("array")),
		}
	}

	/// # Errors
	/// Returns a format fault if the value is not an object.
	pub fn as_object(&self) -> Result<&JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => Err(self.mismatch("object")),
		}
	}

	/// # Errors
	/// Returns a format fault if the value is not an object.
	pub fn into_object(self) -> Result<JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => Err(self.mismatch("object")),
		}
	}

	/// # Errors
	/// Returns a format fault if the value is not a string.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => Err(self.mismatch("string")),
		}
	}

	/// # Errors
	/// Returns a format fault if the value is not a number.
	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(number) => Ok(*number),
			_ => Err(self.mismatch("number")),
		}
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.clone())
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

impl From<usize> for JsonValue {
	#[allow(clippy::cast_precision_loss)]
	fn from(input: usize) -> Self {
		JsonValue::Number(input as f64)
	}
}

impl From<JsonArray> for JsonValue {
	fn from(input: JsonArray) -> Self {
		JsonValue::Array(input)
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl<T> From<Option<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Option<T>) -> Self {
		input.map_or(JsonValue::Null, JsonValue::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeoErrorKind;

	#[test]
	fn test_type_as_str() {
		assert_eq!(JsonValue::from("a").type_as_str(), "string");
		assert_eq!(JsonValue::from(1.5).type_as_str(), "number");
		assert_eq!(JsonValue::from(true).type_as_str(), "boolean");
		assert_eq!(JsonValue::Null.type_as_str(), "null");
		assert_eq!(JsonValue::Array(JsonArray::default()).type_as_str(), "array");
		assert_eq!(JsonValue::Object(JsonObject::default()).type_as_str(), "object");
	}

	#[test]
	fn test_accessors() {
		assert_eq!(JsonValue::from("x").as_str().unwrap(), "x");
		assert_eq!(JsonValue::from(2.0).as_number().unwrap(), 2.0);
		assert!(JsonValue::Null.is_null());
		assert_eq!(JsonValue::from(None::<f64>), JsonValue::Null);
		assert_eq!(JsonValue::from(Some(3usize)), JsonValue::Number(3.0));
	}

	#[test]
	fn test_mismatch_is_a_format_fault() {
		let err = JsonValue::from(1.0).as_array().unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::Format));
		assert_eq!(err.to_string(), "format error: expected a JSON array, found number");
		assert!(JsonValue::from("x").into_object().is_err());
	}
}
