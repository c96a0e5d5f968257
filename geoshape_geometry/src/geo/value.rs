use geoshape_core::json::JsonValue;
use std::fmt::{Debug, Display};

/// A property value.
///
/// Attribute tables only produce `String` and `Double`; `Bool` and `Null` exist so that
/// properties read from GeoJSON survive a round trip.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Null,
	String(String),
}

impl GeoValue {
	/// Parses `text` as a number, keeping the text itself if that fails.
	#[must_use]
	pub fn parse_number_or_string(text: &str) -> Self {
		text
			.parse::<f64>()
			.map_or_else(|_| GeoValue::String(text.to_string()), GeoValue::Double)
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self {
			GeoValue::Bool(v) => JsonValue::Boolean(*v),
			GeoValue::Double(v) => JsonValue::Number(*v),
			GeoValue::Null => JsonValue::Null,
			GeoValue::String(v) => JsonValue::String(v.clone()),
		}
	}

	/// Converts a GeoJSON property value. Nested arrays and objects are kept as their compact
	/// JSON text.
	#[must_use]
	pub fn from_json(value: &JsonValue) -> Self {
		match value {
			JsonValue::Boolean(v) => GeoValue::Bool(*v),
			JsonValue::Number(v) => GeoValue::Double(*v),
			JsonValue::Null => GeoValue::Null,
			JsonValue::String(v) => GeoValue::String(v.clone()),
			JsonValue::Array(_) | JsonValue::Object(_) => GeoValue::String(value.stringify()),
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Null => write!(f, "null"),
			GeoValue::String(v) => write!(f, "{v}"),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		GeoValue::Double(f64::from(value))
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}
