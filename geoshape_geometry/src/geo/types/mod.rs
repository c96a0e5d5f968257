// The geometric primitives of the feature model: `PointGeometry`, `LineStringGeometry`,
// `RingGeometry`, `PolygonGeometry` and their multi-geometry counterparts. They share
// `GeometryTrait` (coordinate JSON, WKT body, bounds) and the composites additionally
// implement `CompositeGeometryTrait`.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
