//! In-memory builders for shapefile fixtures.
//!
//! Tests in this crate and in the CLI build their `.shp` and `.dbf` files byte by byte
//! instead of shipping binary fixtures.

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::{
	fs, io,
	path::{Path, PathBuf},
};

pub const SHAPE_POINT: i32 = 1;
pub const SHAPE_POLY_LINE: i32 = 3;
pub const SHAPE_POLYGON: i32 = 5;
pub const SHAPE_MULTI_POINT: i32 = 8;

/// Record content of a point: shape code followed by x and y.
#[must_use]
pub fn point_content(code: i32, x: f64, y: f64) -> Vec<u8> {
	let mut content = Vec::with_capacity(20);
	content.write_i32::<LittleEndian>(code).unwrap();
	content.write_f64::<LittleEndian>(x).unwrap();
	content.write_f64::<LittleEndian>(y).unwrap();
	content
}

/// Record content of a multipoint with a zeroed bounding box.
#[must_use]
pub fn multi_point_content(code: i32, points: &[[f64; 2]]) -> Vec<u8> {
	let mut content = Vec::with_capacity(40 + points.len() * 16);
	content.write_i32::<LittleEndian>(code).unwrap();
	content.extend_from_slice(&[0u8; 32]);
	content.write_i32::<LittleEndian>(points.len() as i32).unwrap();
	write_points(&mut content, points);
	content
}

/// Record content of a polyline or polygon, with the part offsets given verbatim.
#[must_use]
pub fn parts_content_raw(code: i32, offsets: &[i32], points: &[[f64; 2]]) -> Vec<u8> {
	let mut content = Vec::with_capacity(44 + offsets.len() * 4 + points.len() * 16);
	content.write_i32::<LittleEndian>(code).unwrap();
	content.extend_from_slice(&[0u8; 32]);
	content.write_i32::<LittleEndian>(offsets.len() as i32).unwrap();
	content.write_i32::<LittleEndian>(points.len() as i32).unwrap();
	for offset in offsets {
		content.write_i32::<LittleEndian>(*offset).unwrap();
	}
	write_points(&mut content, points);
	content
}

/// Record content of a polyline or polygon, computing the part offsets from `parts`.
#[must_use]
pub fn parts_content(code: i32, parts: &[Vec<[f64; 2]>]) -> Vec<u8> {
	let mut offsets = Vec::with_capacity(parts.len());
	let mut points = Vec::new();
	for part in parts {
		offsets.push(points.len() as i32);
		points.extend_from_slice(part);
	}
	parts_content_raw(code, &offsets, &points)
}

fn write_points(content: &mut Vec<u8>, points: &[[f64; 2]]) {
	for [x, y] in points {
		content.write_f64::<LittleEndian>(*x).unwrap();
		content.write_f64::<LittleEndian>(*y).unwrap();
	}
}

/// Builds a complete `.shp` file from record contents.
#[derive(Default)]
pub struct ShpBuilder {
	records: Vec<Vec<u8>>,
	file_length_words: Option<i32>,
}

impl ShpBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn add_content(mut self, content: Vec<u8>) -> Self {
		self.records.push(content);
		self
	}

	#[must_use]
	pub fn add_point(self, x: f64, y: f64) -> Self {
		self.add_content(point_content(SHAPE_POINT, x, y))
	}

	#[must_use]
	pub fn add_multi_point(self, points: &[[f64; 2]]) -> Self {
		self.add_content(multi_point_content(SHAPE_MULTI_POINT, points))
	}

	#[must_use]
	pub fn add_poly_line(self, parts: &[Vec<[f64; 2]>]) -> Self {
		self.add_content(parts_content(SHAPE_POLY_LINE, parts))
	}

	#[must_use]
	pub fn add_polygon(self, rings: &[Vec<[f64; 2]>]) -> Self {
		self.add_content(parts_content(SHAPE_POLYGON, rings))
	}

	/// Overrides the file length written to the header, in 16-bit words.
	#[must_use]
	pub fn with_file_length_words(mut self, words: i32) -> Self {
		self.file_length_words = Some(words);
		self
	}

	#[must_use]
	pub fn build(&self) -> Vec<u8> {
		let mut body = Vec::new();
		for (index, content) in self.records.iter().enumerate() {
			let mut content = content.clone();
			if content.len() % 2 == 1 {
				content.push(0);
			}
			body.write_i32::<BigEndian>(index as i32 + 1).unwrap();
			body.write_i32::<BigEndian>((content.len() / 2) as i32).unwrap();
			body.extend_from_slice(&content);
		}

		let shape_code = self
			.records
			.first()
			.and_then(|content| content.get(0..4))
			.map_or(0, |code| i32::from_le_bytes([code[0], code[1], code[2], code[3]]));
		let file_length_words = self.file_length_words.unwrap_or(((100 + body.len()) / 2) as i32);

		let mut file = Vec::with_capacity(100 + body.len());
		file.write_i32::<BigEndian>(9994).unwrap();
		file.extend_from_slice(&[0u8; 20]);
		file.write_i32::<BigEndian>(file_length_words).unwrap();
		file.write_i32::<LittleEndian>(1000).unwrap();
		file.write_i32::<LittleEndian>(shape_code).unwrap();
		file.extend_from_slice(&[0u8; 64]);
		file.extend_from_slice(&body);
		file
	}
}

/// Builds a complete dBASE III `.dbf` file.
#[derive(Default)]
pub struct DbfBuilder {
	columns: Vec<(String, char, u8)>,
	rows: Vec<Vec<String>>,
	declared_row_count: Option<u32>,
}

impl DbfBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn add_column(mut self, name: &str, data_type: char, width: u8) -> Self {
		self.columns.push((name.to_string(), data_type, width));
		self
	}

	/// Adds a row. Values are padded to the column width, numbers right-aligned, text
	/// left-aligned, and cut if they are too long.
	#[must_use]
	pub fn add_row(mut self, values: &[&str]) -> Self {
		self.rows.push(values.iter().map(|v| (*v).to_string()).collect());
		self
	}

	/// Overrides the row count written to the header.
	#[must_use]
	pub fn with_declared_row_count(mut self, count: u32) -> Self {
		self.declared_row_count = Some(count);
		self
	}

	#[must_use]
	pub fn header_size(&self) -> u16 {
		(32 + 32 * self.columns.len() + 1) as u16
	}

	#[must_use]
	pub fn record_length(&self) -> u16 {
		1 + self.columns.iter().map(|(_, _, width)| u16::from(*width)).sum::<u16>()
	}

	#[must_use]
	pub fn build(&self) -> Vec<u8> {
		let mut file = Vec::new();
		file.push(0x03);
		file.extend_from_slice(&[126, 1, 1]);
		let row_count = self.declared_row_count.unwrap_or(self.rows.len() as u32);
		file.write_u32::<LittleEndian>(row_count).unwrap();
		file.write_u16::<LittleEndian>(self.header_size()).unwrap();
		file.write_u16::<LittleEndian>(self.record_length()).unwrap();
		file.extend_from_slice(&[0u8; 20]);

		for (name, data_type, width) in &self.columns {
			let mut descriptor = [0u8; 32];
			let name = name.as_bytes();
			let len = name.len().min(10);
			descriptor[..len].copy_from_slice(&name[..len]);
			descriptor[11] = *data_type as u8;
			descriptor[16] = *width;
			file.extend_from_slice(&descriptor);
		}
		file.push(0x0D);

		for row in &self.rows {
			file.push(b' ');
			for ((_, data_type, width), value) in self.columns.iter().zip(row) {
				let width = usize::from(*width);
				let mut field = match data_type {
					'N' | 'F' => format!("{value:>width$}"),
					_ => format!("{value:<width$}"),
				}
				.into_bytes();
				field.truncate(width);
				file.extend_from_slice(&field);
			}
		}
		file.push(0x1A);
		file
	}
}

/// The smallest complete shapefile: one point at (1, 2) with `TestField` = `"Hello!"`.
#[must_use]
pub fn hello_shapefile() -> (Vec<u8>, Vec<u8>) {
	let shp = ShpBuilder::new().add_point(1.0, 2.0).build();
	let dbf = DbfBuilder::new()
		.add_column("TestField", 'C', 16)
		.add_row(&["Hello!"])
		.build();
	(shp, dbf)
}

/// Writes `<stem>.shp` and, if given, `<stem>.dbf` into `dir` and returns the `.shp` path.
pub fn write_shapefile(dir: &Path, stem: &str, shp: &[u8], dbf: Option<&[u8]>) -> io::Result<PathBuf> {
	let shp_path = dir.join(format!("{stem}.shp"));
	fs::write(&shp_path, shp)?;
	if let Some(dbf) = dbf {
		fs::write(dir.join(format!("{stem}.dbf")), dbf)?;
	}
	Ok(shp_path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shp_header() {
		let shp = ShpBuilder::new().add_point(1.0, 2.0).add_point(3.0, 4.0).build();
		assert_eq!(shp.len(), 100 + 2 * 28);
		assert_eq!(&shp[0..4], &[0, 0, 0x27, 0x0A]);
		assert_eq!(i32::from_be_bytes([shp[24], shp[25], shp[26], shp[27]]), 78);
		assert_eq!(i32::from_le_bytes([shp[32], shp[33], shp[34], shp[35]]), SHAPE_POINT);
		// second record header
		assert_eq!(&shp[128..136], &[0, 0, 0, 2, 0, 0, 0, 10]);
	}

	#[test]
	fn dbf_layout() {
		let builder = DbfBuilder::new()
			.add_column("NAME", 'C', 5)
			.add_column("POP", 'N', 4)
			.add_row(&["ab", "12"]);
		let dbf = builder.build();
		assert_eq!(builder.header_size(), 97);
		assert_eq!(builder.record_length(), 10);
		assert_eq!(dbf.len(), 97 + 10 + 1);
		assert_eq!(&dbf[97..107], b" ab     12");
		assert_eq!(dbf[32 + 32 + 11], b'N');
		assert_eq!(dbf[32 + 32 + 16], 4);
	}
}
