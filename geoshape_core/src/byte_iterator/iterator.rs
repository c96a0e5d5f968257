//! A peekable byte iterator for hand-written text parsers.
//!
//! `ByteIterator` keeps one byte of look-ahead and the absolute position of that byte, so
//! parsers can report where they failed. With debug mode enabled it also remembers the last
//! few bytes and includes them in error messages.

use crate::GeoError;
use anyhow::Error;

const DEBUG_WINDOW: usize = 24;

/// An iterator over bytes with support for peeking, consuming and positioned errors.
pub struct ByteIterator<'a> {
	source: Box<dyn Iterator<Item = u8> + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	debug_window: Option<Vec<u8>>,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` from any byte iterator.
	///
	/// With `debug` set, error messages include the bytes read right before the failure.
	pub fn from_iterator(iter: impl Iterator<Item = u8> + 'a, debug: bool) -> Self {
		let mut instance = ByteIterator {
			source: Box::new(iter),
			peeked_byte: None,
			position: 0,
			debug_window: debug.then(|| Vec::with_capacity(DEBUG_WINDOW)),
		};
		instance.peeked_byte = instance.source.next();
		instance
	}

	pub fn from_text(text: &'a str, debug: bool) -> Self {
		Self::from_iterator(text.bytes(), debug)
	}

	/// Builds a format fault that names the current position.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let mut message = format!("{msg} at position {}", self.position);
		if let Some(window) = &self.debug_window {
			message.push_str(": ");
			message.push_str(&String::from_utf8_lossy(window));
			if self.peeked_byte.is_none() {
				message.push_str("<EOF>");
			}
		}
		GeoError::format(message).into()
	}

	/// Returns the position of the peeked byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	/// Drops the peeked byte and loads the next one.
	#[inline]
	pub fn advance(&mut self) {
		if let Some(byte) = self.peeked_byte
			&& let Some(window) = &mut self.debug_window
		{
			if window.len() == DEBUG_WINDOW {
				window.remove(0);
			}
			window.push(byte);
		}
		self.peeked_byte = self.source.next();
		self.position += 1;
	}

	/// Returns the peeked byte and advances.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current = self.peeked_byte;
		self.advance();
		current
	}

	/// Returns the peeked byte and advances, failing at the end of the input.
	///
	/// # Errors
	/// Returns a format fault if the input is exhausted.
	#[inline]
	pub fn expect_next_byte(&mut self) -> anyhow::Result<u8> {
		match self.peeked_byte {
			Some(byte) => {
				self.advance();
				Ok(byte)
			}
			None => Err(self.format_error("unexpected end")),
		}
	}

	/// Returns the peeked byte without advancing, failing at the end of the input.
	///
	/// # Errors
	/// Returns a format fault if the input is exhausted.
	#[inline]
	pub fn expect_peeked_byte(&self) -> anyhow::Result<u8> {
		self.peeked_byte.ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peeked_byte {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Consumes an ASCII word made of letters, returned in upper case.
	pub fn consume_word(&mut self) -> String {
		let mut word = String::new();
		while let Some(byte) = self.peeked_byte {
			if !byte.is_ascii_alphabetic() {
				break;
			}
			word.push(byte.to_ascii_uppercase() as char);
			self.advance();
		}
		word
	}

	/// Fails unless only whitespace is left.
	///
	/// # Errors
	/// Returns a format fault naming the first unexpected byte.
	pub fn expect_end(&mut self) -> anyhow::Result<()> {
		self.skip_whitespace();
		match self.peeked_byte {
			None => Ok(()),
			Some(byte) => Err(self.format_error(&format!("unexpected trailing character '{}'", byte as char))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeoErrorKind;

	#[test]
	fn test_peek_and_consume() {
		let mut b = ByteIterator::from_text("123", false);
		assert_eq!(b.peek(), Some(b'1'));
		assert_eq!(b.consume(), Some(b'1'));
		assert_eq!(b.peek(), Some(b'2'));
		assert_eq!(b.consume(), Some(b'2'));
		assert_eq!(b.consume(), Some(b'3'));
		assert_eq!(b.peek(), None);
		assert_eq!(b.consume(), None);
	}

	#[test]
	fn test_expect_next_byte() {
		let mut b = ByteIterator::from_iterator(vec![b'A', b'B'].into_iter(), false);
		assert_eq!(b.expect_next_byte().unwrap(), b'A');
		assert_eq!(b.expect_next_byte().unwrap(), b'B');
		assert!(b.expect_next_byte().is_err());
		assert!(b.expect_peeked_byte().is_err());
	}

	#[test]
	fn test_skip_whitespace() {
		let mut b = ByteIterator::from_text(" \t\nAB", false);
		b.skip_whitespace();
		assert_eq!(b.position(), 3);
		assert_eq!(b.consume(), Some(b'A'));
	}

	#[test]
	fn test_consume_word() {
		let mut b = ByteIterator::from_text("MultiPoint (", false);
		assert_eq!(b.consume_word(), "MULTIPOINT");
		assert_eq!(b.peek(), Some(b' '));
	}

	#[test]
	fn test_expect_end() {
		assert!(ByteIterator::from_text("  \n", false).expect_end().is_ok());
		let err = ByteIterator::from_text(" x", false).expect_end().unwrap_err();
		assert!(err.to_string().contains("unexpected trailing character 'x'"));
	}

	#[test]
	fn test_error_is_a_format_fault_with_debug_window() {
		let mut b = ByteIterator::from_text("Rust", true);
		b.consume();
		b.consume();
		let err = b.format_error("testing");
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::Format));
		assert_eq!(err.to_string(), "format error: testing at position 2: Ru");
	}

	#[test]
	fn test_debug_window_is_bounded() {
		let text = "a".repeat(DEBUG_WINDOW + 10);
		let mut b = ByteIterator::from_text(&text, true);
		while b.consume().is_some() {}
		let err = b.format_error("end");
		assert!(err.to_string().ends_with(&format!("{}<EOF>", "a".repeat(DEBUG_WINDOW))));
	}
}
