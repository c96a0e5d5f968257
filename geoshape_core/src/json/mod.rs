//! A small JSON model with an insertion-ordered object type.
//!
//! GeoJSON output has to keep property columns in their original order, so
//! [`JsonObject`] stores its entries in a `Vec` rather than a map.

mod parse;
mod stringify;
mod types;

pub use parse::*;
pub use stringify::*;
pub use types::*;
