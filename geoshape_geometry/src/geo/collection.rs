use super::{GeoFeature, GeometryType, merge_bounds};
use std::collections::BTreeMap;

/// An ordered list of features with an optional name and reference-system label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub name: Option<String>,
	pub crs: Option<String>,
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn new(features: Vec<GeoFeature>) -> Self {
		Self {
			name: None,
			crs: None,
			features,
		}
	}

	#[must_use]
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}

	/// Returns `[x_min, y_min, x_max, y_max]` over all features.
	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.features.iter().map(|f| f.geometry.compute_bounds()))
	}

	/// Counts the features per geometry type, in the order of [`GeometryType`].
	#[must_use]
	pub fn count_by_type(&self) -> BTreeMap<GeometryType, usize> {
		let mut counts = BTreeMap::new();
		for feature in &self.features {
			*counts.entry(feature.geometry_type()).or_insert(0) += 1;
		}
		counts
	}
}

impl IntoIterator for GeoCollection {
	type Item = GeoFeature;
	type IntoIter = std::vec::IntoIter<GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Geometry;

	fn collection() -> GeoCollection {
		GeoCollection::new(vec![
			GeoFeature::new(Geometry::new_point([1, 1])),
			GeoFeature::new(Geometry::new_line_string(vec![[-2, 0], [3, 4]])),
			GeoFeature::new(Geometry::new_point([0, 9])),
		])
	}

	#[test]
	fn compute_bounds() {
		assert_eq!(collection().compute_bounds(), Some([-2.0, 0.0, 3.0, 9.0]));
		assert_eq!(GeoCollection::default().compute_bounds(), None);
	}

	#[test]
	fn count_by_type() {
		let counts = collection().count_by_type();
		assert_eq!(
			counts.into_iter().collect::<Vec<_>>(),
			vec![(GeometryType::Point, 2), (GeometryType::LineString, 1)]
		);
	}

	#[test]
	fn name_and_len() {
		let collection = collection().with_name("roads");
		assert_eq!(collection.name.as_deref(), Some("roads"));
		assert_eq!(collection.len(), 3);
		assert!(!collection.is_empty());
		assert_eq!(collection.iter().count(), 3);
	}
}
