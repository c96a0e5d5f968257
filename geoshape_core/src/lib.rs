//! Binary and text decoding primitives shared by the geoshape crates.
//!
//! - [`io`]: byte-order explicit fixed-width value parsing and sequential readers
//! - [`byte_iterator`]: a peekable byte iterator with positioned errors
//! - [`json`]: an insertion-ordered JSON model with parser and serializers
//! - [`GeoError`]: the error taxonomy every decoder reports through

pub mod byte_iterator;
pub mod io;
pub mod json;

mod error;
pub use error::*;
