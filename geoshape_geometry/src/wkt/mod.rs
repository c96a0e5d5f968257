//! Well-known text for single features and whole collections.
//!
//! Writing is lossless for coordinates and drops properties. Parsing accepts the six geometry
//! tags in any letter case, 2 or 3 ordinates per position, and both the flat
//! `MULTIPOINT (1 2, 3 4)` and the parenthesised `MULTIPOINT ((1 2), (3 4))` forms.

mod parse;
mod write;

pub use parse::*;
