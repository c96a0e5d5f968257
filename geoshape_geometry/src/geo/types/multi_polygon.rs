use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry, merge_bounds, write_wkt_list};
use geoshape_core::json::JsonValue;
use std::fmt::Debug;

/// A collection of polygons, each with an outer ring and optional holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.0.iter().map(|p| p.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn write_wkt_body(&self, output: &mut String) {
		write_wkt_list(output, &self.0, PolygonGeometry::write_wkt_body);
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(PolygonGeometry::compute_bounds))
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nesting() {
		let polygons = MultiPolygonGeometry::from(&[
			vec![vec![[0, 0], [1, 0], [1, 1], [0, 0]]],
			vec![vec![[5, 5], [6, 5], [6, 6], [5, 5]]],
		]);
		assert_eq!(polygons.len(), 2);
		assert_eq!(
			polygons.to_coord_json(None).stringify(),
			"[[[[0,0],[1,0],[1,1],[0,0]]],[[[5,5],[6,5],[6,6],[5,5]]]]"
		);
		assert_eq!(
			polygons.to_wkt_body(),
			"(((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))"
		);
		assert_eq!(polygons.compute_bounds(), Some([0.0, 0.0, 6.0, 6.0]));
	}
}
