use crate::GeoCollection;
use geoshape_core::json::{JsonArray, JsonObject, JsonValue};

impl GeoCollection {
	/// Builds the GeoJSON `FeatureCollection` object. `name` and `crs` are written only when set.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", "FeatureCollection");
		obj.set_optional("name", self.name.as_deref());
		if let Some(crs) = &self.crs {
			let mut properties = JsonObject::new();
			properties.set("name", crs);
			let mut crs_obj = JsonObject::new();
			crs_obj.set("type", "name");
			crs_obj.set("properties", properties);
			obj.set("crs", crs_obj);
		}
		obj.set("features", self.features_to_json(precision));
		obj
	}

	fn features_to_json(&self, precision: Option<u8>) -> JsonArray {
		JsonArray(
			self
				.features
				.iter()
				.map(|f| JsonValue::from(f.to_json(precision)))
				.collect(),
		)
	}

	#[must_use]
	pub fn to_geojson_string(&self, precision: Option<u8>) -> String {
		JsonValue::from(self.to_json(precision)).stringify()
	}

	/// Like [`GeoCollection::to_geojson_string`], indented with tabs.
	#[must_use]
	pub fn to_pretty_geojson_string(&self, precision: Option<u8>) -> String {
		JsonValue::from(self.to_json(precision)).stringify_pretty()
	}

	/// Writes only the array of features, dropping the collection wrapper.
	#[must_use]
	pub fn to_geojson_feature_array(&self, precision: Option<u8>) -> String {
		JsonValue::from(self.features_to_json(precision)).stringify()
	}
}
