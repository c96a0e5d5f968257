use crate::GeoCollection;

impl GeoCollection {
	/// Writes all features as one `GEOMETRYCOLLECTION (...)`.
	#[must_use]
	pub fn to_wkt(&self) -> String {
		if self.features.is_empty() {
			return String::from("GEOMETRYCOLLECTION EMPTY");
		}
		let geometries = self.features.iter().map(|f| f.to_wkt()).collect::<Vec<_>>();
		format!("GEOMETRYCOLLECTION ({})", geometries.join(", "))
	}
}

#[cfg(test)]
mod tests {
	use crate::{GeoCollection, GeoFeature, Geometry};

	#[test]
	fn geometry_collection() {
		let collection = GeoCollection::new(vec![
			GeoFeature::new(Geometry::new_point([1, 2])),
			GeoFeature::new(Geometry::new_line_string(vec![[0.0, 0.0], [1.5, 1.0]])),
		]);
		assert_eq!(
			collection.to_wkt(),
			"GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1.5 1))"
		);
		assert_eq!(GeoCollection::default().to_wkt(), "GEOMETRYCOLLECTION EMPTY");
	}
}
