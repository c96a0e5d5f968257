//! ESRI shapefiles: the `.shp` geometry file, the `.dbf` attribute table and the join of both.
//!
//! The two files are decoded independently ([`read_shp`], [`read_dbf`]) and combined
//! positionally by [`join_features`]. [`read_shapefile`] does all of it for a path, running
//! both decoders as concurrent blocking tasks.

mod dbf;
mod join;
mod shape_type;
mod shp;

#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use dbf::*;
pub use join::*;
pub use shape_type::*;
pub use shp::*;
