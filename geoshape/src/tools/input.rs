//! Opening input files by extension.

use anyhow::{Result, bail};
use geoshape_geometry::{GeoCollection, ShapefileOptions, read_geojson_file, read_shapefile_with_options};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
	Shapefile,
	GeoJson,
}

impl InputFormat {
	pub fn from_path(path: &Path) -> Result<Self> {
		let extension = path
			.extension()
			.map(|e| e.to_string_lossy().to_ascii_lowercase())
			.unwrap_or_default();
		Ok(match extension.as_str() {
			"shp" => InputFormat::Shapefile,
			"geojson" | "json" => InputFormat::GeoJson,
			_ => bail!("unknown input format of {path:?}, expected *.shp, *.geojson or *.json"),
		})
	}
}

/// Reads `path` as a shapefile or as GeoJSON. `options` only apply to shapefiles.
pub async fn read_input(path: &Path, options: &ShapefileOptions) -> Result<GeoCollection> {
	match InputFormat::from_path(path)? {
		InputFormat::Shapefile => read_shapefile_with_options(path, options).await,
		InputFormat::GeoJson => {
			let path = path.to_path_buf();
			tokio::task::spawn_blocking(move || read_geojson_file(&path)).await?
		}
	}
}
