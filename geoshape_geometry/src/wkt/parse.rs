use crate::{
	Coordinates, GeoFeature, Geometry, GeometryType, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::Result;
use geoshape_core::byte_iterator::{ByteIterator, parse_number_as};

/// Parses a WKT geometry into a feature with empty properties.
///
/// # Errors
/// Returns a [`geoshape_core::GeoError::Type`] for unknown tags and a
/// [`geoshape_core::GeoError::Format`] for malformed text.
pub fn parse_wkt(text: &str) -> Result<GeoFeature> {
	let mut iter = ByteIterator::from_text(text, true);
	let geometry = parse_wkt_geometry(&mut iter)?;
	iter.expect_end()?;
	Ok(GeoFeature::new(geometry))
}

pub fn parse_wkt_geometry(iter: &mut ByteIterator) -> Result<Geometry> {
	iter.skip_whitespace();
	let tag = iter.consume_word();
	if tag.is_empty() {
		return Err(iter.format_error("expected a geometry tag"));
	}
	let geometry_type = GeometryType::from_wkt_tag(&tag)?;

	iter.skip_whitespace();
	if iter.peek().is_some_and(|b| b.is_ascii_alphabetic() && b != b'E') {
		let modifier = iter.consume_word();
		if modifier != "Z" {
			return Err(iter.format_error(&format!("unexpected '{modifier}' after {tag}")));
		}
	}

	let geometry = match geometry_type {
		GeometryType::Point => Geometry::Point(PointGeometry(parse_point_body(iter)?)),
		GeometryType::MultiPoint => Geometry::MultiPoint(MultiPointGeometry(parse_list(iter, parse_multi_point_member)?)),
		GeometryType::LineString => Geometry::LineString(LineStringGeometry(parse_list(iter, parse_position)?)),
		GeometryType::Polygon => Geometry::Polygon(PolygonGeometry(parse_list(iter, |iter| {
			parse_list(iter, parse_position).map(RingGeometry)
		})?)),
		GeometryType::MultiLineString => Geometry::MultiLineString(MultiLineStringGeometry(parse_list(iter, |iter| {
			parse_list(iter, parse_position).map(LineStringGeometry)
		})?)),
		GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry(parse_list(iter, |iter| {
			parse_list(iter, |iter| parse_list(iter, parse_position).map(RingGeometry)).map(PolygonGeometry)
		})?)),
	};
	Ok(geometry)
}

/// Parses `(item, item, ...)` with at least one item, or `EMPTY`.
fn parse_list<T>(iter: &mut ByteIterator, mut parse_item: impl FnMut(&mut ByteIterator) -> Result<T>) -> Result<Vec<T>> {
	iter.skip_whitespace();
	if iter.peek() == Some(b'E') {
		let word = iter.consume_word();
		if word != "EMPTY" {
			return Err(iter.format_error(&format!("unexpected '{word}'")));
		}
		return Ok(Vec::new());
	}
	if iter.expect_next_byte()? != b'(' {
		return Err(iter.format_error("expected '('"));
	}
	let mut items = Vec::new();
	loop {
		iter.skip_whitespace();
		items.push(parse_item(iter)?);
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b')' => return Ok(items),
			_ => return Err(iter.format_error("expected ',' or ')'")),
		}
	}
}

fn parse_point_body(iter: &mut ByteIterator) -> Result<Coordinates> {
	let mut positions = parse_list(iter, parse_position)?;
	if positions.len() != 1 {
		return Err(iter.format_error("a point must have exactly one position"));
	}
	Ok(positions.remove(0))
}

fn parse_multi_point_member(iter: &mut ByteIterator) -> Result<PointGeometry> {
	let position = if iter.peek() == Some(b'(') {
		parse_point_body(iter)?
	} else {
		parse_position(iter)?
	};
	Ok(PointGeometry(position))
}

/// Parses `x y` or `x y z`.
fn parse_position(iter: &mut ByteIterator) -> Result<Coordinates> {
	iter.skip_whitespace();
	let x = parse_number_as::<f64>(iter)?;
	iter.skip_whitespace();
	let y = parse_number_as::<f64>(iter)?;
	iter.skip_whitespace();
	match iter.peek() {
		Some(b'0'..=b'9' | b'-' | b'+' | b'.') => Ok(Coordinates::new_3d(x, y, parse_number_as::<f64>(iter)?)),
		_ => Ok(Coordinates::new(x, y)),
	}
}
