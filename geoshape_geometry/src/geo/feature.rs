use super::*;
use geoshape_core::json::{JsonObject, JsonValue};

/// A geometry together with its properties.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key, GeoValue::from(value));
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		self.geometry.geometry_type()
	}

	/// Builds the GeoJSON feature object. `properties` is always present, possibly empty.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", "Feature");
		obj.set("geometry", self.geometry.to_json(precision));
		obj.set("properties", self.properties.to_json());
		obj
	}

	#[must_use]
	pub fn to_geojson_string(&self, precision: Option<u8>) -> String {
		JsonValue::from(self.to_json(precision)).stringify()
	}

	/// Writes the geometry as WKT. Properties have no WKT representation and are dropped.
	#[must_use]
	pub fn to_wkt(&self) -> String {
		self.geometry.to_wkt()
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		let mut feature = Self::new(Geometry::new_polygon(vec![vec![[0, 0], [5, 0], [2, 4], [0, 0]]]));
		feature.set_property("name".to_string(), "Nice");
		feature.set_property("population".to_string(), 348_085);
		feature.set_property("is_nice".to_string(), true);
		feature
	}
}
