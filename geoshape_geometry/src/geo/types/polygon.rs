use super::{CompositeGeometryTrait, GeometryTrait, RingGeometry, merge_bounds, write_wkt_list};
use geoshape_core::json::JsonValue;
use std::fmt::Debug;

/// An ordered list of rings; the first is the outer boundary, the rest are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl GeometryTrait for PolygonGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.0.iter().map(|r| r.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn write_wkt_body(&self, output: &mut String) {
		write_wkt_list(output, &self.0, RingGeometry::write_wkt_body);
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(RingGeometry::compute_bounds))
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	fn example() -> PolygonGeometry {
		PolygonGeometry::from(&[
			vec![[0, 0], [5, 0], [5, 5], [0, 5], [0, 0]],
			vec![[1, 1], [2, 1], [2, 2], [1, 1]],
		])
	}

	#[test]
	fn to_coord_json() {
		assert_eq!(
			example().to_coord_json(None).stringify(),
			"[[[0,0],[5,0],[5,5],[0,5],[0,0]],[[1,1],[2,1],[2,2],[1,1]]]"
		);
	}

	#[test]
	fn wkt_body() {
		assert_eq!(
			example().to_wkt_body(),
			"((0 0, 5 0, 5 5, 0 5, 0 0), (1 1, 2 1, 2 2, 1 1))"
		);
	}

	#[test]
	fn compute_bounds() {
		assert_eq!(example().compute_bounds(), Some([0.0, 0.0, 5.0, 5.0]));
	}
}
