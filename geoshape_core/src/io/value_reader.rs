// This module defines the `ValueReader` trait for reading typed values sequentially.
//
// # Overview
//
// A `ValueReader` walks through binary data front to back and hands out integers, floats
// and raw byte windows. The byte order is a type parameter of the reader, and every numeric
// read is delegated to `parse_value`, so a reader can never decode a field with the wrong
// width or byte order. Every read either fills its buffer completely or fails: running out
// of data is reported as a format fault, any other I/O problem as an I/O fault.
//
// # Examples
//
// ```rust
// use geoshape_core::io::{ValueReader, ValueReaderSlice};
//
// let data = &[0x01, 0x02, 0x03, 0x04];
//
// let mut reader = ValueReaderSlice::new_le(data);
// assert_eq!(reader.read_u16()?, 0x0201);
// assert_eq!(reader.position(), 2);
// ```

use super::{FixedWidth, parse_value};
use crate::GeoError;
use anyhow::Result;
use byteorder::ByteOrder;
use std::io;

/// A trait for reading values sequentially with a fixed byte order `E`.
pub trait ValueReader<E: ByteOrder> {
	/// Fills `buffer` completely from the underlying source.
	///
	/// # Errors
	/// Returns the error of the underlying source, `UnexpectedEof` if it ends early.
	fn fill(&mut self, buffer: &mut [u8]) -> io::Result<()>;

	/// Returns the number of bytes consumed so far.
	fn position(&self) -> u64;

	/// Reads exactly `length` bytes.
	///
	/// # Errors
	/// Returns a format fault if the data ends early, an I/O fault on any other failure.
	fn read_bytes(&mut self, length: usize, what: &str) -> Result<Vec<u8>> {
		let mut buffer = vec![0u8; length];
		self.fill(&mut buffer).map_err(|e| GeoError::from_read(e, what))?;
		Ok(buffer)
	}

	/// Reads exactly `buffer.len()` bytes into `buffer`.
	///
	/// # Errors
	/// Returns a format fault if the data ends early, an I/O fault on any other failure.
	fn read_into(&mut self, buffer: &mut [u8], what: &str) -> Result<()> {
		self.fill(buffer).map_err(|e| GeoError::from_read(e, what))?;
		Ok(())
	}

	/// Skips `length` bytes.
	///
	/// # Errors
	/// Returns a format fault if fewer than `length` bytes are left.
	fn skip(&mut self, length: usize) -> Result<()> {
		self.read_bytes(length, "skipped bytes").map(|_| ())
	}

	/// Reads one value of kind `T`.
	///
	/// # Errors
	/// Returns a format fault if the data ends before the value is complete.
	fn read_value<T: FixedWidth>(&mut self) -> Result<T> {
		let mut buffer = [0u8; 8];
		let window = &mut buffer[..T::WIDTH];
		self.read_into(window, T::NAME)?;
		parse_value::<E, T>(window)
	}

	fn read_u8(&mut self) -> Result<u8> {
		self.read_value()
	}

	fn read_u16(&mut self) -> Result<u16> {
		self.read_value()
	}

	fn read_i32(&mut self) -> Result<i32> {
		self.read_value()
	}

	fn read_u32(&mut self) -> Result<u32> {
		self.read_value()
	}

	fn read_f64(&mut self) -> Result<f64> {
		self.read_value()
	}
}

#[cfg(test)]
mod tests {
	use super::super::ValueReaderSlice;
	use super::*;
	use byteorder::BigEndian;
	use crate::GeoErrorKind;

	#[test]
	fn read_f64_le() {
		let mut reader = ValueReaderSlice::new_le(&[0, 0, 0, 0, 0, 0, 0xF0, 0x3F]); // 1.0 in f64
		assert_eq!(reader.read_f64().unwrap(), 1.0);
	}

	#[test]
	fn read_f64_be() {
		let mut reader = ValueReaderSlice::<BigEndian>::new(&[0x3F, 0xF0, 0, 0, 0, 0, 0, 0]); // 1.0 in f64
		assert_eq!(reader.read_f64().unwrap(), 1.0);
	}

	#[test]
	fn read_i32() {
		let mut reader = ValueReaderSlice::new_le(&[0xFF, 0xFF, 0xFF, 0xFF]);
		assert_eq!(reader.read_i32().unwrap(), -1);
	}

	#[test]
	fn read_u32() {
		let mut reader = ValueReaderSlice::new_le(&[0xFF, 0xFF, 0xFF, 0xFF]);
		assert_eq!(reader.read_u32().unwrap(), 4_294_967_295);
	}

	#[test]
	fn read_sequence_advances_position() {
		let mut reader = ValueReaderSlice::new_le(&[0x01, 0x02, 0x00, 0x03, 0x00, 0x00, 0x00]);
		assert_eq!(reader.read_u8().unwrap(), 1);
		assert_eq!(reader.read_u16().unwrap(), 2);
		assert_eq!(reader.position(), 3);
		assert_eq!(reader.read_u32().unwrap(), 3);
		assert_eq!(reader.position(), 7);
	}

	#[test]
	fn read_bytes_and_skip() {
		let mut reader = ValueReaderSlice::new_le(&[1, 2, 3, 4, 5]);
		reader.skip(2).unwrap();
		assert_eq!(reader.read_bytes(3, "tail").unwrap(), vec![3, 4, 5]);
	}

	#[test]
	fn short_read_is_a_format_fault() {
		let mut reader = ValueReaderSlice::new_le(&[1, 2, 3]);
		let err = reader.read_u32().unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::Format));
		assert!(err.to_string().contains("while reading u32"));
	}
}
