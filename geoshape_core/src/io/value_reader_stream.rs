//! This module provides the `ValueReaderStream` struct for reading values from any `Read` source.
//!
//! # Overview
//!
//! Unlike [`ValueReaderSlice`](super::ValueReaderSlice), a stream does not know its total
//! length up front. `ValueReaderStream` counts the bytes it has consumed, which is what
//! record-oriented formats need to compare their position against a length declared in a
//! file header.
//!
//! # Examples
//!
//! ```rust
//! use byteorder::BigEndian;
//! use geoshape_core::io::{ValueReader, ValueReaderStream};
//! use std::io::Cursor;
//!
//! let mut reader = ValueReaderStream::<_, BigEndian>::new(Cursor::new(vec![0, 0, 0, 7, 9, 0, 0, 0]));
//! assert_eq!(reader.read_i32().unwrap(), 7);
//! assert_eq!(reader.position(), 4);
//! ```

use super::ValueReader;
use byteorder::ByteOrder;
use std::{
	io::{self, Read},
	marker::PhantomData,
};

/// A struct that provides reading capabilities from a `Read` source using a specified byte order.
pub struct ValueReaderStream<R: Read, E: ByteOrder> {
	_phantom: PhantomData<E>,
	source: R,
	position: u64,
}

impl<R: Read, E: ByteOrder> ValueReaderStream<R, E> {
	/// Creates a new `ValueReaderStream` that starts counting at position 0.
	pub fn new(source: R) -> Self {
		ValueReaderStream {
			_phantom: PhantomData,
			source,
			position: 0,
		}
	}
}

impl<R: Read, E: ByteOrder> ValueReader<E> for ValueReaderStream<R, E> {
	fn fill(&mut self, buffer: &mut [u8]) -> io::Result<()> {
		self.source.read_exact(buffer)?;
		self.position += buffer.len() as u64;
		Ok(())
	}

	fn position(&self) -> u64 {
		self.position
	}
}
