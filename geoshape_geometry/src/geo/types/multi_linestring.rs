use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry, merge_bounds, write_wkt_list};
use geoshape_core::json::JsonValue;
use std::fmt::Debug;

/// A collection of lines, e.g. the parts of a shapefile polyline.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.0.iter().map(|l| l.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn write_wkt_body(&self, output: &mut String) {
		write_wkt_list(output, &self.0, LineStringGeometry::write_wkt_body);
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(LineStringGeometry::compute_bounds))
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parts_keep_their_lengths() {
		let lines = MultiLineStringGeometry::from(&[vec![[0, 0], [1, 1], [2, 2]], vec![[5, 5], [6, 6]]]);
		let lengths: Vec<usize> = lines.as_vec().iter().map(|line| line.len()).collect();
		assert_eq!(lengths, vec![3, 2]);
		assert_eq!(lines.to_wkt_body(), "((0 0, 1 1, 2 2), (5 5, 6 6))");
		assert_eq!(lines.compute_bounds(), Some([0.0, 0.0, 6.0, 6.0]));
	}
}
