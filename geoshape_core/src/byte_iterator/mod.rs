//! Byte-level iteration for the hand-written text parsers (JSON, GeoJSON, WKT).
//!
//! [`ByteIterator`] provides peeking and positioned errors, the functions in `basics` parse
//! the JSON building blocks on top of it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
