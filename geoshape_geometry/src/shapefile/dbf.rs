//! Decoder for the dBASE `.dbf` attribute table that accompanies a geometry file.
//!
//! The table is read into memory as a whole. The header is decoded from fixed offsets,
//! then every row becomes one [`GeoProperties`] with the columns in descriptor order.

use crate::{GeoProperties, GeoValue};
use anyhow::{Context, Result};
use byteorder::LittleEndian;
use geoshape_core::{GeoError, io::parse_value_at};
use log::{debug, info};
use std::{
	fs::File,
	io::{ErrorKind, Read},
	path::Path,
};

const HEADER_SIZE: usize = 32;
const DESCRIPTOR_SIZE: usize = 32;
const NAME_SIZE: usize = 11;

/// A column descriptor of an attribute table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbfColumn {
	pub name: String,
	/// dBASE type code, such as `C` for text or `N` for numbers.
	pub data_type: char,
	/// Width of the field in bytes.
	pub size: u8,
}

impl DbfColumn {
	/// Returns `true` for the type codes whose values are decoded as numbers.
	#[must_use]
	pub fn is_numeric(&self) -> bool {
		matches!(self.data_type, 'N' | 'F' | 'O')
	}

	fn decode_field(&self, field: &[u8]) -> GeoValue {
		let field = field.iter().position(|b| *b == 0).map_or(field, |end| &field[..end]);
		let text = String::from_utf8_lossy(field);
		let text = text.trim();
		if self.is_numeric() {
			GeoValue::parse_number_or_string(text)
		} else {
			GeoValue::from(text)
		}
	}
}

/// A decoded attribute table: the column descriptors and one property map per row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DbfTable {
	pub columns: Vec<DbfColumn>,
	pub rows: Vec<GeoProperties>,
}

impl DbfTable {
	#[must_use]
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

/// Reads a complete attribute table from `reader`.
///
/// # Errors
/// Returns a [`GeoError::Io`] if reading fails, otherwise the errors of [`decode_dbf`].
pub fn read_dbf(mut reader: impl Read) -> Result<DbfTable> {
	let mut bytes = Vec::new();
	reader.read_to_end(&mut bytes).map_err(GeoError::from)?;
	decode_dbf(&bytes)
}

/// Reads the attribute table at `path`, returning `None` if there is no such file.
///
/// # Errors
/// Returns a [`GeoError::Io`] if the file exists but cannot be read, or the errors of
/// [`decode_dbf`].
pub fn read_dbf_file(path: &Path) -> Result<Option<DbfTable>> {
	let file = match File::open(path) {
		Ok(file) => file,
		Err(e) if e.kind() == ErrorKind::NotFound => {
			info!("no attribute table at {path:?}");
			return Ok(None);
		}
		Err(e) => return Err(GeoError::from(e)).with_context(|| format!("while opening {path:?}")),
	};
	read_dbf(file)
		.map(Some)
		.with_context(|| format!("while reading {path:?}"))
}

/// Decodes an attribute table held in memory.
///
/// # Errors
/// Returns a [`GeoError::Format`] if the header is too short, declares more data than
/// present, or the columns do not fit into a record.
pub fn decode_dbf(bytes: &[u8]) -> Result<DbfTable> {
	if bytes.len() < HEADER_SIZE {
		return Err(GeoError::format(format!(
			"attribute table needs a {HEADER_SIZE}-byte header, but has only {} bytes",
			bytes.len()
		))
		.into());
	}

	let row_count = parse_value_at::<LittleEndian, u32>(bytes, 4)?;
	let header_size = parse_value_at::<LittleEndian, u16>(bytes, 8)?;
	let record_length = parse_value_at::<LittleEndian, u16>(bytes, 10)?;
	if usize::from(header_size) <= HEADER_SIZE {
		return Err(GeoError::format(format!("attribute table header size {header_size} is below 33")).into());
	}

	let column_count = (usize::from(header_size) - HEADER_SIZE - 1) / DESCRIPTOR_SIZE;
	let columns = (0..column_count)
		.map(|index| parse_column(bytes, index))
		.collect::<Result<Vec<_>>>()?;

	// every record starts with its deletion flag
	if record_length == 0 && row_count > 0 {
		return Err(GeoError::format(format!("attribute table declares {row_count} rows of 0 bytes")).into());
	}

	let required = u64::from(row_count) * u64::from(record_length) + u64::from(header_size) + 1;
	if required > bytes.len() as u64 {
		return Err(GeoError::format(format!(
			"attribute table declares {row_count} rows of {record_length} bytes, which needs {required} bytes, but the file has only {}",
			bytes.len()
		))
		.into());
	}

	let width: usize = columns.iter().map(|c| usize::from(c.size)).sum();
	if width > usize::from(record_length) {
		return Err(GeoError::format(format!(
			"attribute columns need {width} bytes, but a record has only {record_length}"
		))
		.into());
	}

	debug!("decoding attribute table with {row_count} rows and {column_count} columns");

	let record_length = usize::from(record_length);
	let mut rows = Vec::with_capacity((row_count as usize).min(bytes.len() / record_length.max(1)));
	for row_index in 0..row_count as usize {
		let start = usize::from(header_size) + 1 + row_index * record_length;
		let record = &bytes[start..start + record_length];

		let mut properties = GeoProperties::with_capacity(columns.len());
		let mut offset = 0;
		for column in &columns {
			let end = offset + usize::from(column.size);
			properties.insert(column.name.clone(), column.decode_field(&record[offset..end]));
			offset = end;
		}
		rows.push(properties);
	}

	Ok(DbfTable { columns, rows })
}

fn parse_column(bytes: &[u8], index: usize) -> Result<DbfColumn> {
	let start = HEADER_SIZE + index * DESCRIPTOR_SIZE;
	let descriptor = bytes.get(start..start + DESCRIPTOR_SIZE).ok_or_else(|| {
		GeoError::format(format!(
			"descriptor of column {index} ends past the {} bytes of the attribute table",
			bytes.len()
		))
	})?;

	let name = &descriptor[..NAME_SIZE];
	let name = name.iter().position(|b| *b == 0).map_or(name, |end| &name[..end]);
	Ok(DbfColumn {
		name: String::from_utf8_lossy(name).trim().to_string(),
		data_type: descriptor[11] as char,
		size: descriptor[16],
	})
}
