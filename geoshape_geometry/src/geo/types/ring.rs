use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, merge_bounds, write_wkt_list};
use geoshape_core::json::JsonValue;
use std::fmt::Debug;

/// One ring of a polygon. Closure is not enforced: the first and last coordinates are kept
/// exactly as they were read.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.0.iter().map(|c| c.to_json(precision)).collect::<Vec<_>>())
	}

	fn write_wkt_body(&self, output: &mut String) {
		write_wkt_list(output, &self.0, Coordinates::write_wkt);
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(|c| Some([c.x(), c.y(), c.x(), c.y()])))
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);
