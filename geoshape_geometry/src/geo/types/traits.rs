use geoshape_core::json::JsonValue;
use std::fmt::Debug;

/// The interface shared by all geometric primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Converts the geometry into the nested GeoJSON coordinate arrays.
	/// Optionally rounds coordinate values to the given number of decimals.
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue;

	/// Appends the parenthesised WKT coordinate list, e.g. `((1 2, 3 4), (5 6, 7 8))`.
	fn write_wkt_body(&self, output: &mut String);

	/// Returns `[x_min, y_min, x_max, y_max]`, or `None` if the geometry has no coordinates.
	fn compute_bounds(&self) -> Option<[f64; 4]>;

	fn to_wkt_body(&self) -> String {
		let mut output = String::new();
		self.write_wkt_body(&mut output);
		output
	}
}

/// Geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Merges bounding boxes, ignoring `None` entries.
pub fn merge_bounds(bounds: impl IntoIterator<Item = Option<[f64; 4]>>) -> Option<[f64; 4]> {
	bounds.into_iter().flatten().reduce(|a, b| {
		[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
	})
}

/// Writes `(item, item, ...)` using `write_item` for every element, or `EMPTY`.
pub(crate) fn write_wkt_list<T>(output: &mut String, items: &[T], mut write_item: impl FnMut(&T, &mut String)) {
	if items.is_empty() {
		output.push_str("EMPTY");
		return;
	}
	output.push('(');
	for (index, item) in items.iter().enumerate() {
		if index > 0 {
			output.push_str(", ");
		}
		write_item(item, output);
	}
	output.push(')');
}
