mod geo;
pub mod geojson;
pub mod shapefile;
pub mod wkt;

pub use geo::*;
pub use geojson::*;
pub use shapefile::*;
pub use wkt::*;
