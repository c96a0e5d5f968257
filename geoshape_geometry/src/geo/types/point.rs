use super::{Coordinates, GeometryTrait};
use geoshape_core::json::JsonValue;
use std::fmt::Debug;

/// A single position, the simplest geometric type and the building block for all others.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	/// Returns the point as a JSON array `[x, y]`, optionally rounded to the given precision.
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		self.0.to_json(precision)
	}

	fn write_wkt_body(&self, output: &mut String) {
		output.push('(');
		self.0.write_wkt(output);
		output.push(')');
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.0.x(), self.0.y(), self.0.x(), self.0.y()])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accessors() {
		let point = PointGeometry::new(Coordinates::new(1.0, 2.0));
		assert_eq!(point.x(), 1.0);
		assert_eq!(point.y(), 2.0);
		assert_eq!(point.as_coord(), &Coordinates::new(1.0, 2.0));
		assert_eq!(point, PointGeometry::from(&[1, 2]));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}

	#[test]
	fn to_coord_json() {
		let json = PointGeometry::from([1.23456, 2.34567]).to_coord_json(Some(2));
		assert_eq!(json, JsonValue::from(vec![1.23, 2.35]));
	}

	#[test]
	fn wkt_body() {
		assert_eq!(PointGeometry::from([1.5, -2.0]).to_wkt_body(), "(1.5 -2)");
	}

	#[test]
	fn compute_bounds() {
		let bounds = PointGeometry::from([3.0, 7.0]).compute_bounds();
		assert_eq!(bounds, Some([3.0, 7.0, 3.0, 7.0]));
	}
}
