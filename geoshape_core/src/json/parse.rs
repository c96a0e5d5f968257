//! JSON parsing on top of the [`ByteIterator`] helpers.

use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::Result;

/// Parses a complete JSON document.
///
/// # Errors
/// Returns a format fault on malformed JSON or trailing content.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_text(json, true);
	let value = parse_json_iter(&mut iter)?;
	iter.expect_end()?;
	Ok(value)
}

/// Parses one JSON value at the current position of `iter`.
///
/// # Errors
/// Returns a format fault on malformed JSON.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => parse_json_array(iter).map(JsonValue::Array),
		b'{' => parse_json_object(iter).map(JsonValue::Object),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		b'0'..=b'9' | b'-' | b'.' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_array(iter: &mut ByteIterator) -> Result<JsonArray> {
	let mut array = JsonArray::new();
	parse_array_entries(iter, |iter| {
		array.push(parse_json_iter(iter)?);
		Ok(())
	})?;
	Ok(array)
}

fn parse_json_object(iter: &mut ByteIterator) -> Result<JsonObject> {
	let mut object = JsonObject::new();
	parse_object_entries(iter, |key, iter| {
		object.set(&key, parse_json_iter(iter)?);
		Ok(())
	})?;
	Ok(object)
}
