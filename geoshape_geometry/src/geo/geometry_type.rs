use geoshape_core::GeoError;
use std::{fmt::Display, str::FromStr};

/// Names the six geometry kinds of the feature model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeometryType {
	Point,
	MultiPoint,
	LineString,
	Polygon,
	MultiLineString,
	MultiPolygon,
}

impl GeometryType {
	pub const ALL: [GeometryType; 6] = [
		GeometryType::Point,
		GeometryType::MultiPoint,
		GeometryType::LineString,
		GeometryType::Polygon,
		GeometryType::MultiLineString,
		GeometryType::MultiPolygon,
	];

	/// The GeoJSON type tag, e.g. `MultiLineString`.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
		}
	}

	/// The WKT tag, e.g. `MULTILINESTRING`.
	#[must_use]
	pub fn wkt_tag(&self) -> &'static str {
		match self {
			GeometryType::Point => "POINT",
			GeometryType::MultiPoint => "MULTIPOINT",
			GeometryType::LineString => "LINESTRING",
			GeometryType::Polygon => "POLYGON",
			GeometryType::MultiLineString => "MULTILINESTRING",
			GeometryType::MultiPolygon => "MULTIPOLYGON",
		}
	}

	/// Looks up a WKT tag, ignoring case.
	///
	/// # Errors
	/// Returns a [`GeoError::Type`] for unknown tags.
	pub fn from_wkt_tag(tag: &str) -> Result<Self, GeoError> {
		GeometryType::ALL
			.into_iter()
			.find(|t| t.wkt_tag().eq_ignore_ascii_case(tag))
			.ok_or_else(|| GeoError::unsupported(tag))
	}
}

impl FromStr for GeometryType {
	type Err = GeoError;

	/// Parses a GeoJSON type tag. Tags are case sensitive, as in GeoJSON.
	fn from_str(tag: &str) -> Result<Self, Self::Err> {
		GeometryType::ALL
			.into_iter()
			.find(|t| t.as_str() == tag)
			.ok_or_else(|| GeoError::unsupported(tag))
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geoshape_core::GeoErrorKind;
	use rstest::rstest;

	#[rstest]
	#[case("Point", "POINT")]
	#[case("MultiPoint", "MULTIPOINT")]
	#[case("LineString", "LINESTRING")]
	#[case("Polygon", "POLYGON")]
	#[case("MultiLineString", "MULTILINESTRING")]
	#[case("MultiPolygon", "MULTIPOLYGON")]
	fn tags(#[case] name: &str, #[case] wkt: &str) {
		let geometry_type: GeometryType = name.parse().unwrap();
		assert_eq!(geometry_type.as_str(), name);
		assert_eq!(geometry_type.to_string(), name);
		assert_eq!(geometry_type.wkt_tag(), wkt);
		assert_eq!(GeometryType::from_wkt_tag(&wkt.to_lowercase()).unwrap(), geometry_type);
	}

	#[rstest]
	#[case("GeometryCollection")]
	#[case("point")]
	#[case("")]
	fn unknown_tags_are_type_faults(#[case] name: &str) {
		assert_eq!(name.parse::<GeometryType>().unwrap_err().kind(), GeoErrorKind::Type);
	}
}
