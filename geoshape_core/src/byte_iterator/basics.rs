//! Small parsing helpers built on top of [`ByteIterator`].
//!
//! - `parse_tag` matches a fixed ASCII tag
//! - `parse_quoted_json_string` reads a JSON string literal with escapes
//! - `parse_number_as_string` and `parse_number_as<T>` read JSON number syntax
//! - `parse_object_entries` and `parse_array_entries` walk object and array contents
//!
//! Parsers consume only what they need and leave the iterator on the next token.

use super::ByteIterator;
use anyhow::{Context, Result};
use std::str::FromStr;

/// Matches a fixed ASCII tag at the current position.
///
/// # Errors
/// Returns a format fault on the first mismatching byte or at the end of the input.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

/// Parses a JSON quoted string literal and leaves the iterator after the closing quote.
///
/// # Errors
/// Returns a format fault on missing quotes, bad escapes or an unterminated string.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(0x08),
				b'f' => bytes.push(0x0C),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut code_point = 0u32;
					for _ in 0..4 {
						let digit = (iter.expect_next_byte()? as char)
							.to_digit(16)
							.ok_or_else(|| iter.format_error("invalid unicode escape"))?;
						code_point = code_point * 16 + digit;
					}
					let c = char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER);
					let mut buf = [0u8; 4];
					bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(|_| iter.format_error("string is not valid UTF-8"))
}

/// Parses a JSON number and returns its text.
///
/// Accepts an optional sign, integer digits, an optional fraction and an optional exponent.
///
/// # Errors
/// Returns a format fault if required digits are missing.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	fn digits(iter: &mut ByteIterator, number: &mut String) -> bool {
		let mut found = false;
		while let Some(b @ b'0'..=b'9') = iter.peek() {
			number.push(b as char);
			iter.advance();
			found = true;
		}
		found
	}

	let mut number = String::with_capacity(16);

	if let Some(b @ (b'+' | b'-')) = iter.peek() {
		number.push(b as char);
		iter.advance();
	}

	let integer = digits(iter, &mut number);

	if iter.peek() == Some(b'.') {
		number.push('.');
		iter.advance();
		if !digits(iter, &mut number) && !integer {
			return Err(iter.format_error("expected digits in number"));
		}
	} else if !integer {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b @ (b'e' | b'E')) = iter.peek() {
		number.push(b as char);
		iter.advance();
		if let Some(b @ (b'+' | b'-')) = iter.peek() {
			number.push(b as char);
			iter.advance();
		}
		if !digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	Ok(number)
}

/// Parses a number and converts it with `FromStr`.
///
/// # Errors
/// Returns a format fault if the text is not a number of type `R`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	let number = parse_number_as_string(iter)?;
	number
		.parse::<R>()
		.map_err(|_| iter.format_error(&format!("invalid number '{number}'")))
}

/// Walks the entries of a JSON object, handing each key and the positioned iterator to
/// `parse_value`, which must consume the value.
///
/// # Errors
/// Returns a format fault on malformed objects, or the error of `parse_value`.
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		return Err(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if iter.peek() == Some(b'}') {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':' after object key"));
		}

		iter.skip_whitespace();
		parse_value(key.clone(), iter).with_context(|| format!("while parsing the value of key '{key}'"))?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => return Ok(()),
			_ => return Err(iter.format_error("expected ',' or '}' in object")),
		}
	}
}

/// Walks the entries of a JSON array, handing the positioned iterator to `parse_value`
/// for each element.
///
/// # Errors
/// Returns a format fault on malformed arrays, or the error of `parse_value`.
pub fn parse_array_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		return Err(iter.format_error("expected '[' while parsing an array"));
	}

	iter.skip_whitespace();
	if iter.peek() == Some(b']') {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		parse_value(iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b']' => return Ok(()),
			_ => return Err(iter.format_error("expected ',' or ']' in array")),
		}
	}
}
