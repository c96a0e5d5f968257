use crate::{
	Coordinates, GeoCollection, GeoFeature, GeoProperties, GeoValue, Geometry, GeometryType, LineStringGeometry,
	MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result};
use geoshape_core::{
	GeoError,
	byte_iterator::{ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string},
	json::{JsonValue, parse_json_iter},
};
use log::debug;

/// Parses a GeoJSON `FeatureCollection`.
///
/// Features without a geometry (`"geometry": null` or no geometry type) are skipped.
///
/// # Errors
/// Returns a [`GeoError::Type`] for unknown geometry types and a [`GeoError::Format`] for
/// malformed JSON or coordinates nested at the wrong depth.
pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let mut iter = ByteIterator::from_text(json, true);
	let collection = parse_geojson_collection(&mut iter)?;
	iter.expect_end()?;
	Ok(collection)
}

pub fn parse_geojson_collection(iter: &mut ByteIterator) -> Result<GeoCollection> {
	let mut collection = GeoCollection::default();
	let mut object_type: Option<String> = None;
	let mut skipped = 0usize;

	parse_object_entries(iter, |key, iter2| {
		match key.as_str() {
			"type" => object_type = Some(parse_quoted_json_string(iter2)?),
			"name" => collection.name = parse_optional_string(iter2)?,
			"crs" => collection.crs = parse_crs_name(iter2)?,
			"features" => parse_array_entries(iter2, |iter3| {
				let index = collection.features.len() + skipped;
				match parse_geojson_feature(iter3).with_context(|| format!("while parsing feature {index}"))? {
					Some(feature) => collection.features.push(feature),
					None => skipped += 1,
				}
				Ok(())
			})?,
			_ => _ = parse_json_iter(iter2)?,
		}
		Ok(())
	})?;

	check_type(object_type, "FeatureCollection")?;

	if skipped > 0 {
		debug!("skipped {skipped} GeoJSON features without geometry");
	}
	Ok(collection)
}

fn check_type(object_type: Option<String>, name: &str) -> Result<()> {
	let object_type = object_type.ok_or_else(|| GeoError::format(format!("{name} must have a type")))?;
	if object_type != name {
		return Err(GeoError::format(format!("type must be '{name}', found '{object_type}'")).into());
	}
	Ok(())
}

fn parse_optional_string(iter: &mut ByteIterator) -> Result<Option<String>> {
	match parse_json_iter(iter)? {
		JsonValue::String(text) => Ok(Some(text)),
		JsonValue::Null => Ok(None),
		other => Err(GeoError::format(format!("expected a string, found {}", other.type_as_str())).into()),
	}
}

/// Reads the name of a named CRS: `{"type": "name", "properties": {"name": "..."}}`.
fn parse_crs_name(iter: &mut ByteIterator) -> Result<Option<String>> {
	let crs = parse_json_iter(iter)?;
	if crs.is_null() {
		return Ok(None);
	}
	let name = crs
		.as_object()?
		.get("properties")
		.filter(|p| !p.is_null())
		.map(|p| p.as_object().and_then(|p| p.get_str("name")))
		.transpose()?
		.flatten();
	Ok(name.map(str::to_string))
}

/// Parses one GeoJSON `Feature`, returning `None` if it has no geometry.
pub fn parse_geojson_feature(iter: &mut ByteIterator) -> Result<Option<GeoFeature>> {
	let mut object_type: Option<String> = None;
	let mut geometry: Option<Geometry> = None;
	let mut properties: Option<GeoProperties> = None;

	parse_object_entries(iter, |key, iter2| {
		match key.as_str() {
			"type" => object_type = Some(parse_quoted_json_string(iter2)?),
			"geometry" => geometry = parse_geojson_geometry(iter2)?,
			"properties" => properties = Some(parse_geojson_properties(iter2)?),
			_ => _ = parse_json_iter(iter2)?,
		}
		Ok(())
	})?;

	check_type(object_type, "Feature")?;

	Ok(geometry.map(|geometry| GeoFeature {
		geometry,
		properties: properties.unwrap_or_default(),
	}))
}

fn parse_geojson_properties(iter: &mut ByteIterator) -> Result<GeoProperties> {
	match parse_json_iter(iter)? {
		JsonValue::Null => Ok(GeoProperties::new()),
		JsonValue::Object(object) => Ok(object
			.into_iter()
			.map(|(key, value)| (key, GeoValue::from_json(&value)))
			.collect()),
		other => Err(GeoError::format(format!("properties must be an object, found {}", other.type_as_str())).into()),
	}
}

/// Parses a geometry object, returning `None` for `null` or a geometry without type.
fn parse_geojson_geometry(iter: &mut ByteIterator) -> Result<Option<Geometry>> {
	iter.skip_whitespace();
	if iter.peek() == Some(b'n') {
		parse_json_iter(iter)?;
		return Ok(None);
	}

	let mut geometry_type: Option<String> = None;
	let mut coordinates: Option<TemporaryCoordinates> = None;

	parse_object_entries(iter, |key, iter2| {
		match key.as_str() {
			"type" => geometry_type = Some(parse_quoted_json_string(iter2)?),
			"coordinates" => coordinates = Some(parse_geojson_coordinates(iter2)?),
			_ => _ = parse_json_iter(iter2)?,
		}
		Ok(())
	})?;

	let Some(geometry_type) = geometry_type.filter(|t| !t.is_empty()) else {
		return Ok(None);
	};
	let geometry_type: GeometryType = geometry_type.parse()?;
	let coordinates =
		coordinates.ok_or_else(|| GeoError::format(format!("{geometry_type} geometry must have coordinates")))?;

	let geometry = match geometry_type {
		GeometryType::Point => Geometry::Point(PointGeometry(coordinates.into_position(geometry_type)?)),
		GeometryType::MultiPoint => Geometry::MultiPoint(MultiPointGeometry(
			coordinates
				.into_line(geometry_type)?
				.into_iter()
				.map(PointGeometry)
				.collect(),
		)),
		GeometryType::LineString => Geometry::LineString(LineStringGeometry(coordinates.into_line(geometry_type)?)),
		GeometryType::Polygon => Geometry::Polygon(PolygonGeometry(
			coordinates
				.into_lines(geometry_type)?
				.into_iter()
				.map(RingGeometry)
				.collect(),
		)),
		GeometryType::MultiLineString => Geometry::MultiLineString(MultiLineStringGeometry(
			coordinates
				.into_lines(geometry_type)?
				.into_iter()
				.map(LineStringGeometry)
				.collect(),
		)),
		GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry(
			coordinates
				.into_polygons(geometry_type)?
				.into_iter()
				.map(|rings| PolygonGeometry(rings.into_iter().map(RingGeometry).collect()))
				.collect(),
		)),
	};

	Ok(Some(geometry))
}

/// Coordinate arrays of unknown depth, as found while parsing.
#[derive(Debug)]
enum TemporaryCoordinates {
	Value(f64),
	Position(Coordinates),
	Line(Vec<Coordinates>),
	Lines(Vec<Vec<Coordinates>>),
	Polygons(Vec<Vec<Vec<Coordinates>>>),
	Empty,
}

impl TemporaryCoordinates {
	fn depth(&self) -> Option<usize> {
		match self {
			TemporaryCoordinates::Value(_) => Some(0),
			TemporaryCoordinates::Position(_) => Some(1),
			TemporaryCoordinates::Line(_) => Some(2),
			TemporaryCoordinates::Lines(_) => Some(3),
			TemporaryCoordinates::Polygons(_) => Some(4),
			TemporaryCoordinates::Empty => None,
		}
	}

	fn depth_error(geometry_type: GeometryType, depth: usize) -> anyhow::Error {
		GeoError::format(format!(
			"coordinates of a {geometry_type} must be nested {depth} levels deep"
		))
		.into()
	}

	fn into_position(self, geometry_type: GeometryType) -> Result<Coordinates> {
		match self {
			TemporaryCoordinates::Position(c) => Ok(c),
			_ => Err(Self::depth_error(geometry_type, 1)),
		}
	}

	fn into_line(self, geometry_type: GeometryType) -> Result<Vec<Coordinates>> {
		match self {
			TemporaryCoordinates::Line(v) => Ok(v),
			TemporaryCoordinates::Empty => Ok(Vec::new()),
			_ => Err(Self::depth_error(geometry_type, 2)),
		}
	}

	fn into_lines(self, geometry_type: GeometryType) -> Result<Vec<Vec<Coordinates>>> {
		match self {
			TemporaryCoordinates::Lines(v) => Ok(v),
			TemporaryCoordinates::Empty => Ok(Vec::new()),
			_ => Err(Self::depth_error(geometry_type, 3)),
		}
	}

	fn into_polygons(self, geometry_type: GeometryType) -> Result<Vec<Vec<Vec<Coordinates>>>> {
		match self {
			TemporaryCoordinates::Polygons(v) => Ok(v),
			TemporaryCoordinates::Empty => Ok(Vec::new()),
			_ => Err(Self::depth_error(geometry_type, 4)),
		}
	}

	/// Combines the elements of one array into the next nesting level.
	fn from_list(list: Vec<TemporaryCoordinates>) -> Result<TemporaryCoordinates> {
		use TemporaryCoordinates::*;

		let Some(depth) = list.iter().find_map(TemporaryCoordinates::depth) else {
			return if list.is_empty() {
				Ok(Empty)
			} else {
				Err(GeoError::format("cannot determine the depth of nested empty coordinate arrays").into())
			};
		};

		let mixed = || -> anyhow::Error { GeoError::format("coordinate arrays of mixed depth").into() };

		Ok(match depth {
			0 => {
				let values = list
					.into_iter()
					.map(|e| match e {
						Value(v) => Ok(v),
						_ => Err(mixed()),
					})
					.collect::<Result<Vec<f64>>>()?;
				match values.as_slice() {
					[x, y] => Position(Coordinates::new(*x, *y)),
					[x, y, z] => Position(Coordinates::new_3d(*x, *y, *z)),
					_ => {
						return Err(GeoError::format(format!(
							"a position must have 2 or 3 values, found {}",
							values.len()
						))
						.into());
					}
				}
			}
			1 => Line(
				list
					.into_iter()
					.map(|e| match e {
						Position(c) => Ok(c),
						_ => Err(mixed()),
					})
					.collect::<Result<_>>()?,
			),
			2 => Lines(
				list
					.into_iter()
					.map(|e| match e {
						Line(v) => Ok(v),
						Empty => Ok(Vec::new()),
						_ => Err(mixed()),
					})
					.collect::<Result<_>>()?,
			),
			3 => Polygons(
				list
					.into_iter()
					.map(|e| match e {
						Lines(v) => Ok(v),
						Empty => Ok(Vec::new()),
						_ => Err(mixed()),
					})
					.collect::<Result<_>>()?,
			),
			_ => return Err(GeoError::format("coordinates are nested too deep").into()),
		})
	}
}

fn parse_geojson_coordinates(iter: &mut ByteIterator) -> Result<TemporaryCoordinates> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => {
			let mut list = Vec::new();
			parse_array_entries(iter, |iter2| {
				list.push(parse_geojson_coordinates(iter2)?);
				Ok(())
			})?;
			TemporaryCoordinates::from_list(list)
		}
		d if d.is_ascii_digit() || d == b'.' || d == b'-' => parse_number_as(iter).map(TemporaryCoordinates::Value),
		c => Err(iter.format_error(&format!(
			"expected an array or number while parsing coordinates, but got character '{}'",
			c as char
		))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geoshape_core::GeoErrorKind;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn wrap_geometry(geometry: &str) -> String {
		format!(
			r#"{{"type":"FeatureCollection","features":[{{"type":"Feature","geometry":{geometry},"properties":{{}}}}]}}"#
		)
	}

	fn parse_single_geometry(geometry: &str) -> Result<Geometry> {
		let mut collection = parse_geojson(&wrap_geometry(geometry))?;
		Ok(collection.features.remove(0).geometry)
	}

	#[test]
	fn valid_feature_collection() -> Result<()> {
		let json = r#"
        {
            "type": "FeatureCollection",
            "name": "cities",
            "features": [
                {
                    "type": "Feature",
                    "id": 7,
                    "geometry": {
                        "type": "Point",
                        "coordinates": [102.0, 0.5]
                    },
                    "properties": {
                        "prop0": "value0",
                        "count": 3,
                        "flag": false,
                        "none": null
                    }
                }
            ]
        }
        "#;

		let collection = parse_geojson(json)?;
		assert_eq!(collection.name.as_deref(), Some("cities"));
		assert_eq!(collection.features.len(), 1);

		let feature = &collection.features[0];
		assert_eq!(feature.geometry, Geometry::new_point([102.0, 0.5]));
		assert_eq!(
			feature.properties,
			GeoProperties::from(vec![
				("prop0", GeoValue::from("value0")),
				("count", GeoValue::from(3)),
				("flag", GeoValue::from(false)),
				("none", GeoValue::Null),
			])
		);
		Ok(())
	}

	#[rstest]
	#[case(r#"{"type":"Point","coordinates":[1,2]}"#, Geometry::new_point([1, 2]))]
	#[case(r#"{"type":"MultiPoint","coordinates":[[1,2],[3,4]]}"#, Geometry::new_multi_point(vec![[1, 2], [3, 4]]))]
	#[case(r#"{"type":"LineString","coordinates":[[1,2],[3,4]]}"#, Geometry::new_line_string(vec![[1, 2], [3, 4]]))]
	#[case(r#"{"coordinates":[[[0,0],[1,0],[0,0]]],"type":"Polygon"}"#, Geometry::new_polygon(vec![vec![[0, 0], [1, 0], [0, 0]]]))]
	#[case(r#"{"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[[2,2],[3,3]]]}"#, Geometry::new_multi_line_string(vec![vec![[0, 0], [1, 1]], vec![[2, 2], [3, 3]]]))]
	#[case(r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[0,0]]]]}"#, Geometry::new_multi_polygon(vec![vec![vec![[0, 0], [1, 0], [0, 0]]]]))]
	#[case(r#"{"type":"MultiPoint","coordinates":[]}"#, Geometry::new_multi_point(Vec::<[f64; 2]>::new()))]
	fn all_geometry_types(#[case] json: &str, #[case] expected: Geometry) -> Result<()> {
		assert_eq!(parse_single_geometry(json)?, expected);
		Ok(())
	}

	#[test]
	fn three_dimensional_positions() -> Result<()> {
		let geometry = parse_single_geometry(r#"{"type":"Point","coordinates":[1,2,3]}"#)?;
		assert_eq!(geometry, Geometry::Point(PointGeometry(Coordinates::new_3d(1.0, 2.0, 3.0))));
		Ok(())
	}

	#[rstest]
	#[case("null")]
	#[case(r#"{"coordinates":[1,2]}"#)]
	#[case(r#"{"type":"","coordinates":[1,2]}"#)]
	fn features_without_geometry_are_skipped(#[case] geometry: &str) -> Result<()> {
		assert!(parse_geojson(&wrap_geometry(geometry))?.is_empty());
		Ok(())
	}

	#[test]
	fn missing_geometry_key_is_skipped() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"a":1}}]}"#;
		assert!(parse_geojson(json)?.is_empty());
		Ok(())
	}

	#[rstest]
	#[case(r#"{"type":"Circle","coordinates":[1,2]}"#)]
	#[case(r#"{"type":"GeometryCollection","geometries":[]}"#)]
	fn unknown_geometry_types_are_type_faults(#[case] geometry: &str) {
		let err = parse_single_geometry(geometry).unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::Type));
	}

	#[rstest]
	#[case(r#"{"type":"Point","coordinates":[[1,2]]}"#)]
	#[case(r#"{"type":"Polygon","coordinates":[[1,2],[3,4]]}"#)]
	#[case(r#"{"type":"LineString","coordinates":[[1,2],[[3,4]]]}"#)]
	#[case(r#"{"type":"Point","coordinates":[1]}"#)]
	#[case(r#"{"type":"Point","coordinates":[1,2,3,4]}"#)]
	#[case(r#"{"type":"Point"}"#)]
	#[case(r#"{"type":"Point","coordinates":["a","b"]}"#)]
	fn malformed_coordinates_are_format_faults(#[case] geometry: &str) {
		let err = parse_single_geometry(geometry).unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::Format), "{err:#}");
	}

	#[rstest]
	#[case(r#"{"type":"InvalidCollection","features":[]}"#)]
	#[case(r#"{"features":[]}"#)]
	#[case(r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":null},]}"#)]
	#[case(r#"{"type":"FeatureCollection","features":[]} trailing"#)]
	fn invalid_documents(#[case] json: &str) {
		let err = parse_geojson(json).unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::Format));
	}

	#[test]
	fn crs_name_is_read() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","crs":{"type":"name","properties":{"name":"EPSG:3006"}},"features":[]}"#;
		assert_eq!(parse_geojson(json)?.crs.as_deref(), Some("EPSG:3006"));
		Ok(())
	}

	#[test]
	fn nested_property_values_are_kept_as_json_text() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{"tags":["a","b"]}}]}"#;
		let collection = parse_geojson(json)?;
		assert_eq!(
			collection.features[0].properties.get("tags"),
			Some(&GeoValue::from(r#"["a","b"]"#))
		);
		Ok(())
	}
}
