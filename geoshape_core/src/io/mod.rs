//! Binary value decoding.
//!
//! # Overview
//!
//! - [`parse_value`] / [`parse_value_at`] decode one fixed-width field from a byte window.
//!   This is the only place where a byte order is applied.
//! - [`ValueReader`] is the sequential interface on top of it, implemented by
//!   [`ValueReaderSlice`] for in-memory data and [`ValueReaderStream`] for `Read` sources.

mod value_parser;
mod value_reader;
mod value_reader_slice;
mod value_reader_stream;

pub use value_parser::*;
pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_reader_stream::*;
