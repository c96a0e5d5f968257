//! This module provides the `ValueReaderSlice` struct for reading values from a byte slice.
//!
//! # Overview
//!
//! The `ValueReaderSlice` struct reads integers, floats and byte windows from a slice using
//! either little-endian or big-endian byte order. Besides the [`ValueReader`] methods it
//! knows the total length of its data, so callers can check up front whether a declared
//! count of elements actually fits into the remaining bytes.
//!
//! # Examples
//!
//! ```rust
//! use geoshape_core::io::{ValueReader, ValueReaderSlice};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let data = &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
//!
//!     let mut reader = ValueReaderSlice::new_le(data);
//!     assert_eq!(reader.read_u16()?, 0x0201);
//!     assert_eq!(reader.remaining(), 4);
//!     assert!(reader.ensure_remaining(8, "two points").is_err());
//!
//!     Ok(())
//! }
//! ```

use super::ValueReader;
use crate::GeoError;
use anyhow::Result;
use byteorder::{ByteOrder, LittleEndian};
use std::{
	io::{self, Cursor, Read},
	marker::PhantomData,
};

/// A struct that provides reading capabilities from a byte slice using a specified byte order.
pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	/// Creates a new `ValueReaderSlice` from a byte slice.
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}

	/// Returns the number of bytes remaining to be read.
	#[must_use]
	pub fn remaining(&self) -> u64 {
		self.len.saturating_sub(self.cursor.position())
	}

	/// Fails with a format fault unless at least `length` bytes are left.
	///
	/// # Errors
	/// Returns a [`GeoError::Format`] naming `what` was expected.
	pub fn ensure_remaining(&self, length: u64, what: &str) -> Result<()> {
		let remaining = self.remaining();
		if remaining < length {
			return Err(GeoError::format(format!(
				"{what} needs {length} bytes, but only {remaining} are left"
			))
			.into());
		}
		Ok(())
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	/// Creates a new `ValueReaderSlice` with little-endian byte order.
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<E: ByteOrder> ValueReader<E> for ValueReaderSlice<'_, E> {
	fn fill(&mut self, buffer: &mut [u8]) -> io::Result<()> {
		self.cursor.read_exact(buffer)
	}

	fn position(&self) -> u64 {
		self.cursor.position()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeoErrorKind;
	use byteorder::BigEndian;

	#[test]
	fn test_remaining() {
		let data = [0x01, 0x02, 0x03, 0x04];
		let mut reader = ValueReaderSlice::new_le(&data);
		assert_eq!(reader.remaining(), 4);
		reader.read_u16().unwrap();
		assert_eq!(reader.remaining(), 2);
		reader.read_u16().unwrap();
		assert_eq!(reader.remaining(), 0);
	}

	#[test]
	fn test_empty() {
		let reader = ValueReaderSlice::new_le(&[]);
		assert_eq!(reader.remaining(), 0);
		assert!(reader.ensure_remaining(0, "nothing").is_ok());
	}

	#[test]
	fn test_byte_order_is_a_type_parameter() {
		let data = [0x01, 0x02];
		assert_eq!(ValueReaderSlice::new_le(&data).read_u16().unwrap(), 0x0201);
		assert_eq!(ValueReaderSlice::<BigEndian>::new(&data).read_u16().unwrap(), 0x0102);
	}

	#[test]
	fn test_ensure_remaining() {
		let data = [0u8; 10];
		let reader = ValueReaderSlice::new_le(&data);
		assert!(reader.ensure_remaining(10, "ten bytes").is_ok());
		let err = reader.ensure_remaining(11, "points").unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::Format));
		assert_eq!(
			err.to_string(),
			"format error: points needs 11 bytes, but only 10 are left"
		);
	}

	#[test]
	fn test_ensure_remaining_does_not_consume() {
		let data = [0x01, 0x02, 0x03];
		let mut reader = ValueReaderSlice::new_le(&data);
		assert!(reader.ensure_remaining(4, "u32").is_err());
		assert_eq!(reader.position(), 0);
		assert_eq!(reader.read_u8().unwrap(), 1);
	}
}
