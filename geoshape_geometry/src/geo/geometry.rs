use super::*;
use geoshape_core::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// The closed set of geometries a feature can carry. The variant is the type tag.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	pub fn new_point<T: Copy + Into<f64>>(value: [T; 2]) -> Self {
		Self::Point(PointGeometry::from(&value))
	}
	pub fn new_multi_point<T: Copy + Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(&value))
	}
	pub fn new_line_string<T: Copy + Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(&value))
	}
	pub fn new_polygon<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(&value))
	}
	pub fn new_multi_line_string<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(&value))
	}
	pub fn new_multi_polygon<T: Copy + Into<f64>>(value: Vec<Vec<Vec<[T; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(&value))
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
		}
	}

	#[must_use]
	pub fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		match self {
			Geometry::Point(g) => g.to_coord_json(precision),
			Geometry::MultiPoint(g) => g.to_coord_json(precision),
			Geometry::LineString(g) => g.to_coord_json(precision),
			Geometry::Polygon(g) => g.to_coord_json(precision),
			Geometry::MultiLineString(g) => g.to_coord_json(precision),
			Geometry::MultiPolygon(g) => g.to_coord_json(precision),
		}
	}

	/// Builds the GeoJSON geometry object `{"type": ..., "coordinates": ...}`.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", self.geometry_type().as_str());
		obj.set("coordinates", self.to_coord_json(precision));
		obj
	}

	/// Writes the geometry as WKT, e.g. `POLYGON ((0 0, 1 0, 1 1, 0 0))`.
	#[must_use]
	pub fn to_wkt(&self) -> String {
		let mut output = String::from(self.geometry_type().wkt_tag());
		output.push(' ');
		match self {
			Geometry::Point(g) => g.write_wkt_body(&mut output),
			Geometry::MultiPoint(g) => g.write_wkt_body(&mut output),
			Geometry::LineString(g) => g.write_wkt_body(&mut output),
			Geometry::Polygon(g) => g.write_wkt_body(&mut output),
			Geometry::MultiLineString(g) => g.write_wkt_body(&mut output),
			Geometry::MultiPolygon(g) => g.write_wkt_body(&mut output),
		}
		output
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.geometry_type().as_str()).field(inner).finish()
	}
}
