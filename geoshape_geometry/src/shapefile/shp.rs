//! Decoder for the `.shp` geometry file.
//!
//! The file starts with a 100-byte header, followed by records made of an 8-byte header and
//! a payload. Header fields are big-endian, everything inside a payload is little-endian.
//! Decoding is all-or-nothing: the first bad record fails the whole file.

use super::ShapeType;
use crate::{
	Coordinates, GeoFeature, Geometry, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result};
use byteorder::{BigEndian, LittleEndian};
use geoshape_core::{
	GeoError,
	io::{ValueReader, ValueReaderSlice, ValueReaderStream, parse_value_at},
};
use log::{debug, trace, warn};
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

const HEADER_SIZE: usize = 100;
const FILE_CODE: i32 = 9994;
const RECORD_HEADER_SIZE: u64 = 8;
const BBOX_SIZE: usize = 32;
const POINT_SIZE: u64 = 16;

/// Decodes all records of a geometry file into features without properties.
///
/// # Errors
/// Returns a [`GeoError::Type`] for an unsupported shape type, a [`GeoError::Format`] for
/// truncated or inconsistent data and a [`GeoError::Io`] if reading fails.
pub fn read_shp(reader: impl Read) -> Result<Vec<GeoFeature>> {
	let mut reader = ValueReaderStream::<_, BigEndian>::new(reader);

	let header = reader.read_bytes(HEADER_SIZE, "file header")?;
	let file_code = parse_value_at::<BigEndian, i32>(&header, 0)?;
	if file_code != FILE_CODE {
		warn!("unexpected shapefile file code {file_code}, expected {FILE_CODE}");
	}
	let file_length = parse_value_at::<BigEndian, i32>(&header, 24)?;
	if file_length < 0 {
		return Err(GeoError::format(format!("negative file length {file_length}")).into());
	}
	let bound = file_length as u64 * 2;
	debug!("decoding shapefile geometry of {bound} bytes");

	let mut features = Vec::new();
	while reader.position() < bound {
		let offset = reader.position();
		let record_number = reader.read_i32()?;
		let content_length = reader.read_i32()?;
		if content_length < 0 {
			return Err(GeoError::format(format!(
				"record {record_number} at byte offset {offset} has negative content length {content_length}"
			))
			.into());
		}

		let content_size = content_length as u64 * 2;
		if offset + RECORD_HEADER_SIZE + content_size > bound {
			return Err(GeoError::format(format!(
				"record {record_number} at byte offset {offset} with {content_size} content bytes runs past the declared file length of {bound} bytes"
			))
			.into());
		}

		let content = reader.read_bytes(content_size as usize, "record content")?;
		let geometry = decode_record(&content)
			.with_context(|| format!("while decoding record {record_number} at byte offset {offset}"))?;
		trace!(
			"record {record_number}: {} with {} content bytes",
			geometry.geometry_type(),
			content.len()
		);
		features.push(GeoFeature::new(geometry));
	}

	debug!("decoded {} shapes", features.len());
	Ok(features)
}

/// Opens and decodes a geometry file.
pub fn read_shp_file(path: &Path) -> Result<Vec<GeoFeature>> {
	let file = File::open(path)
		.map_err(GeoError::from)
		.with_context(|| format!("while opening {path:?}"))?;
	read_shp(BufReader::new(file)).with_context(|| format!("while reading {path:?}"))
}

/// Decodes one record payload, starting at its shape-type code.
pub fn decode_record(content: &[u8]) -> Result<Geometry> {
	let mut reader = ValueReaderSlice::new_le(content);
	let code = reader.read_i32()?;

	Ok(match ShapeType::from_code(code)? {
		ShapeType::Point => Geometry::Point(read_point(&mut reader, ShapeType::is_plain_code(code))?),
		ShapeType::MultiPoint => Geometry::MultiPoint(read_multi_point(&mut reader)?),
		ShapeType::PolyLine => Geometry::MultiLineString(MultiLineStringGeometry(
			read_parts(&mut reader)?.into_iter().map(LineStringGeometry).collect(),
		)),
		ShapeType::Polygon => Geometry::Polygon(PolygonGeometry(
			read_parts(&mut reader)?.into_iter().map(RingGeometry).collect(),
		)),
	})
}

fn read_coordinates(reader: &mut ValueReaderSlice<LittleEndian>) -> Result<Coordinates> {
	let x = reader.read_f64()?;
	let y = reader.read_f64()?;
	Ok(Coordinates::new(x, y))
}

fn read_count(reader: &mut ValueReaderSlice<LittleEndian>, what: &str) -> Result<u64> {
	let count = reader.read_i32()?;
	if count < 0 {
		return Err(GeoError::format(format!("negative {what} {count}")).into());
	}
	Ok(count as u64)
}

fn read_point(reader: &mut ValueReaderSlice<LittleEndian>, plain: bool) -> Result<PointGeometry> {
	let remaining = reader.remaining();
	if (plain && remaining != POINT_SIZE) || remaining < POINT_SIZE {
		return Err(GeoError::format(format!("a point needs {POINT_SIZE} bytes, got {remaining}")).into());
	}
	Ok(PointGeometry(read_coordinates(reader)?))
}

fn read_multi_point(reader: &mut ValueReaderSlice<LittleEndian>) -> Result<MultiPointGeometry> {
	reader.skip(BBOX_SIZE)?;
	let count = read_count(reader, "point count")?;
	reader.ensure_remaining(count * POINT_SIZE, &format!("a multipoint of {count} points"))?;

	let mut points = Vec::with_capacity(count as usize);
	for _ in 0..count {
		points.push(PointGeometry(read_coordinates(reader)?));
	}
	Ok(MultiPointGeometry(points))
}

/// Reads the part layout shared by polylines and polygons and splits the points into parts.
fn read_parts(reader: &mut ValueReaderSlice<LittleEndian>) -> Result<Vec<Vec<Coordinates>>> {
	reader.skip(BBOX_SIZE)?;
	let part_count = read_count(reader, "part count")?;
	let point_count = read_count(reader, "point count")?;
	reader.ensure_remaining(
		part_count * 4 + point_count * POINT_SIZE,
		&format!("{part_count} parts with {point_count} points"),
	)?;

	let mut offsets = Vec::with_capacity(part_count as usize);
	let mut previous = 0;
	for index in 0..part_count {
		let offset = reader.read_i32()?;
		if offset < previous || offset as u64 > point_count {
			return Err(GeoError::format(format!(
				"offset {offset} of part {index} is outside {previous}..={point_count}"
			))
			.into());
		}
		offsets.push(offset as usize);
		previous = offset;
	}

	let mut points = Vec::with_capacity(point_count as usize);
	for _ in 0..point_count {
		points.push(read_coordinates(reader)?);
	}

	let mut parts = Vec::with_capacity(offsets.len());
	for (index, start) in offsets.iter().enumerate() {
		let end = offsets.get(index + 1).copied().unwrap_or(points.len());
		parts.push(points[*start..end].to_vec());
	}
	Ok(parts)
}
