use super::JsonValue;
use std::fmt::Write;

/// Serializes a `JsonValue` without any whitespace.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	let mut output = String::new();
	write_compact(&mut output, json);
	output
}

/// Serializes a `JsonValue` over multiple lines, one tab per nesting level.
///
/// Empty arrays and objects stay on one line as `[]` and `{}`.
#[must_use]
pub fn stringify_pretty(json: &JsonValue) -> String {
	let mut output = String::new();
	write_pretty(&mut output, json, 0);
	output
}

fn write_compact(output: &mut String, json: &JsonValue) {
	match json {
		JsonValue::Array(array) => {
			output.push('[');
			for (index, value) in array.iter().enumerate() {
				if index > 0 {
					output.push(',');
				}
				write_compact(output, value);
			}
			output.push(']');
		}
		JsonValue::Object(object) => {
			output.push('{');
			for (index, (key, value)) in object.iter().enumerate() {
				if index > 0 {
					output.push(',');
				}
				write_string(output, key);
				output.push(':');
				write_compact(output, value);
			}
			output.push('}');
		}
		_ => write_scalar(output, json),
	}
}

fn write_pretty(output: &mut String, json: &JsonValue, depth: usize) {
	match json {
		JsonValue::Array(array) if !array.is_empty() => {
			output.push('[');
			for (index, value) in array.iter().enumerate() {
				if index > 0 {
					output.push(',');
				}
				newline(output, depth + 1);
				write_pretty(output, value, depth + 1);
			}
			newline(output, depth);
			output.push(']');
		}
		JsonValue::Object(object) if !object.is_empty() => {
			output.push('{');
			for (index, (key, value)) in object.iter().enumerate() {
				if index > 0 {
					output.push(',');
				}
				newline(output, depth + 1);
				write_string(output, key);
				output.push_str(": ");
				write_pretty(output, value, depth + 1);
			}
			newline(output, depth);
			output.push('}');
		}
		_ => write_compact(output, json),
	}
}

fn newline(output: &mut String, depth: usize) {
	output.push('\n');
	for _ in 0..depth {
		output.push('\t');
	}
}

fn write_scalar(output: &mut String, json: &JsonValue) {
	match json {
		JsonValue::String(text) => write_string(output, text),
		JsonValue::Number(number) if number.is_finite() => {
			let _ = write!(output, "{number}");
		}
		JsonValue::Number(_) | JsonValue::Null => output.push_str("null"),
		JsonValue::Boolean(value) => output.push_str(if *value { "true" } else { "false" }),
		JsonValue::Array(_) | JsonValue::Object(_) => write_compact(output, json),
	}
}

fn write_string(output: &mut String, text: &str) {
	output.push('"');
	output.push_str(&escape_json_string(text));
	output.push('"');
}

#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => escaped.push_str("\\\""),
			'\\' => escaped.push_str("\\\\"),
			'\n' => escaped.push_str("\\n"),
			'\r' => escaped.push_str("\\r"),
			'\t' => escaped.push_str("\\t"),
			'\u{08}' => escaped.push_str("\\b"),
			'\u{0c}' => escaped.push_str("\\f"),
			c if c.is_control() => {
				let _ = write!(escaped, "\\u{:04x}", c as u32);
			}
			c => escaped.push(c),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::json::parse_json_str;
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case("\"Hello, World!\"")]
	#[case("42")]
	#[case("-0.5")]
	#[case("true")]
	#[case("null")]
	#[case("[\"item1\",123,false,null]")]
	#[case("[]")]
	#[case("{}")]
	#[case("{\"zeta\":1,\"alpha\":{\"list\":[1,2]}}")]
	#[case("\"Line1\\nLine2\\tTab\\\\\"")]
	#[case("\"Unicode: 😊\"")]
	fn test_compact_keeps_text(#[case] text: &str) -> Result<()> {
		assert_eq!(stringify(&parse_json_str(text)?), text);
		Ok(())
	}

	#[test]
	fn test_non_finite_numbers_become_null() {
		assert_eq!(stringify(&JsonValue::Number(f64::NAN)), "null");
	}

	#[test]
	fn test_escape_json_string_control() {
		assert_eq!(escape_json_string("Control:\x01\x02"), "Control:\\u0001\\u0002");
	}

	#[test]
	fn test_pretty() -> Result<()> {
		let json = parse_json_str(r#"{"type":"Feature","coordinates":[1,2],"properties":{}}"#)?;
		assert_eq!(
			stringify_pretty(&json),
			"{\n\t\"type\": \"Feature\",\n\t\"coordinates\": [\n\t\t1,\n\t\t2\n\t],\n\t\"properties\": {}\n}"
		);
		Ok(())
	}
}
