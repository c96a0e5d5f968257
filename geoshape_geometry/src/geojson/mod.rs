//! The GeoJSON interface of the feature model: parsing documents into [`crate::GeoCollection`]
//! and serializing collections back, compact, tab-indented or as a bare feature array.

mod parse;
mod read;
mod write;

pub use parse::*;
pub use read::*;
