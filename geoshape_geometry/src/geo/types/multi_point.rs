use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry, merge_bounds, write_wkt_list};
use geoshape_core::json::JsonValue;
use std::fmt::Debug;

/// A collection of discrete points in source order.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.0.iter().map(|p| p.to_coord_json(precision)).collect::<Vec<_>>())
	}

	/// Writes the flat form `(x y, x y)`.
	fn write_wkt_body(&self, output: &mut String) {
		write_wkt_list(output, &self.0, |point, output| point.as_coord().write_wkt(output));
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(PointGeometry::compute_bounds))
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_and_len() {
		let mut points = MultiPointGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(points.len(), 2);
		points.push(PointGeometry::from([5.0, 6.0]));
		assert_eq!(points.last(), Some(&PointGeometry::from([5.0, 6.0])));
		assert!(MultiPointGeometry::new().is_empty());
	}

	#[test]
	fn to_coord_json() {
		let points = MultiPointGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(points.to_coord_json(None).stringify(), "[[1,2],[3,4]]");
	}

	#[test]
	fn wkt_body() {
		let points = MultiPointGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(points.to_wkt_body(), "(1 2, 3 4)");
		assert_eq!(MultiPointGeometry::new().to_wkt_body(), "EMPTY");
	}

	#[test]
	fn compute_bounds() {
		let points = MultiPointGeometry::from(&[[5, -2], [1, 4], [3, 0]]);
		assert_eq!(points.compute_bounds(), Some([1.0, -2.0, 5.0, 4.0]));
		assert_eq!(MultiPointGeometry::new().compute_bounds(), None);
	}
}
