use super::parse_geojson;
use crate::GeoCollection;
use anyhow::Result;
use geoshape_core::GeoError;
use std::{fs::File, io::Read, path::Path};

/// Reads a complete GeoJSON `FeatureCollection` from `reader`.
///
/// # Errors
/// Returns a [`GeoError::Io`] if reading fails, otherwise the errors of [`parse_geojson`].
pub fn read_geojson(mut reader: impl Read) -> Result<GeoCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer).map_err(GeoError::from)?;
	parse_geojson(&buffer)
}

/// Reads a GeoJSON file. Without a `name` member, the file stem becomes the collection name.
pub fn read_geojson_file(path: &Path) -> Result<GeoCollection> {
	let file = File::open(path).map_err(GeoError::from)?;
	let mut collection = read_geojson(file)?;
	if collection.name.is_none() {
		collection.name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
	}
	Ok(collection)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeometryType;
	use geoshape_core::GeoErrorKind;
	use std::io::{self, Cursor};

	struct FailingReader;

	impl Read for FailingReader {
		fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
			Err(io::Error::other("disk on fire"))
		}
	}

	#[test]
	fn read_basic() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let collection = read_geojson(Cursor::new(json))?;
		assert_eq!(collection.features.len(), 1);
		assert_eq!(collection.features[0].geometry_type(), GeometryType::Point);
		Ok(())
	}

	#[test]
	fn read_errors_are_io_faults() {
		let err = read_geojson(FailingReader).unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::Io));
	}

	#[test]
	fn file_stem_becomes_the_name() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("lakes.geojson");
		std::fs::write(&path, r#"{"type":"FeatureCollection","features":[]}"#)?;
		assert_eq!(read_geojson_file(&path)?.name.as_deref(), Some("lakes"));

		let missing = read_geojson_file(&dir.path().join("missing.geojson")).unwrap_err();
		assert_eq!(GeoError::kind_of(&missing), Some(GeoErrorKind::Io));
		Ok(())
	}
}
