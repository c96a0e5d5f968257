//! Joining decoded geometries with attribute rows, and the entry points reading whole
//! shapefiles.
//!
//! The geometry file and the attribute table are independent, so both are decoded at the
//! same time in blocking tasks. The join waits for both and only then looks at the results:
//! a geometry failure is reported before a table failure.

use super::{DbfTable, read_dbf, read_dbf_file, read_shp, read_shp_file};
use crate::{GeoCollection, GeoFeature};
use anyhow::{Context, Result, anyhow};
use geoshape_core::GeoError;
use log::debug;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::{Path, PathBuf},
};
use tokio::task::{JoinError, spawn_blocking};

/// Where the attribute table of a shapefile is read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AttributeTableSource {
	/// The `.dbf` file next to the `.shp` file. A missing file means no properties.
	#[default]
	Companion,
	/// An explicit table file, which must exist.
	Path(PathBuf),
	/// Ignore any table.
	Skip,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapefileOptions {
	pub table: AttributeTableSource,
}

impl ShapefileOptions {
	#[must_use]
	pub fn with_table(mut self, table: AttributeTableSource) -> Self {
		self.table = table;
		self
	}
}

/// Returns the path of the attribute table paired with the geometry file at `path`.
///
/// The extension is replaced by `dbf`, or `DBF` if it was written in upper case.
///
/// # Errors
/// Returns a [`GeoError::Format`] if `path` does not end in `.shp`, ignoring case.
pub fn companion_table_path(path: &Path) -> Result<PathBuf> {
	match path.extension().and_then(|ext| ext.to_str()) {
		Some(ext) if ext.eq_ignore_ascii_case("shp") => {
			let table_ext = if ext == "SHP" { "DBF" } else { "dbf" };
			Ok(path.with_extension(table_ext))
		}
		_ => Err(GeoError::format(format!("{path:?} does not appear to be a shapefile")).into()),
	}
}

/// Reads a shapefile and its companion attribute table.
///
/// ```no_run
/// # async fn example() -> anyhow::Result<()> {
/// let collection = geoshape_geometry::read_shapefile(std::path::Path::new("lakes.shp")).await?;
/// println!("{}", collection.to_geojson_string(Some(6)));
/// # Ok(())
/// # }
/// ```
pub async fn read_shapefile(path: &Path) -> Result<GeoCollection> {
	read_shapefile_with_options(path, &ShapefileOptions::default()).await
}

/// Reads a shapefile, taking the attribute table from where `options` says.
///
/// The collection is named after the file stem.
pub async fn read_shapefile_with_options(path: &Path, options: &ShapefileOptions) -> Result<GeoCollection> {
	let companion = companion_table_path(path)?;
	debug!("reading shapefile {path:?} with table source {:?}", options.table);

	let shp_path = path.to_path_buf();
	let geometry = spawn_blocking(move || read_shp_file(&shp_path));

	let table = match &options.table {
		AttributeTableSource::Companion => Some(spawn_blocking(move || read_dbf_file(&companion))),
		AttributeTableSource::Path(table_path) => {
			let table_path = table_path.clone();
			Some(spawn_blocking(move || read_required_table(&table_path).map(Some)))
		}
		AttributeTableSource::Skip => None,
	};

	let features = join_tasks(geometry, table).await?;
	let mut collection = GeoCollection::new(features);
	collection.name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
	Ok(collection)
}

/// Reads a shapefile from already opened streams, for example entries of an archive.
///
/// Without a table stream every feature gets empty properties.
pub async fn read_shapefile_data<S, D>(shp: S, dbf: Option<D>) -> Result<GeoCollection>
where
	S: Read + Send + 'static,
	D: Read + Send + 'static,
{
	let geometry = spawn_blocking(move || read_shp(shp));
	let table = dbf.map(|dbf| spawn_blocking(move || read_dbf(dbf).map(Some)));
	Ok(GeoCollection::new(join_tasks(geometry, table).await?))
}

/// Attaches the rows of `table` to `features`, matched by position.
///
/// # Errors
/// Returns a [`GeoError::Format`] if the table has a different number of rows than there
/// are features.
pub fn join_features(mut features: Vec<GeoFeature>, table: Option<DbfTable>) -> Result<Vec<GeoFeature>> {
	let Some(table) = table else {
		return Ok(features);
	};

	if table.rows.len() != features.len() {
		return Err(GeoError::format(format!(
			"mismatching number of rows in attribute table ({}) and shapes in geometry file ({})",
			table.rows.len(),
			features.len()
		))
		.into());
	}

	for (feature, properties) in features.iter_mut().zip(table.rows) {
		feature.set_properties(properties);
	}
	Ok(features)
}

fn read_required_table(path: &Path) -> Result<DbfTable> {
	let file = File::open(path)
		.map_err(GeoError::from)
		.with_context(|| format!("while opening attribute table {path:?}"))?;
	read_dbf(BufReader::new(file)).with_context(|| format!("while reading {path:?}"))
}

async fn join_tasks(
	geometry: tokio::task::JoinHandle<Result<Vec<GeoFeature>>>,
	table: Option<tokio::task::JoinHandle<Result<Option<DbfTable>>>>,
) -> Result<Vec<GeoFeature>> {
	let table = async move {
		match table {
			Some(handle) => handle.await,
			None => Ok(Ok(None)),
		}
	};
	let (features, table) = tokio::join!(geometry, table);

	let features = task_result(features, "geometry")?;
	let table = task_result(table, "attribute table")?;
	if table.is_none() {
		debug!("no attribute table, {} features keep empty properties", features.len());
	}
	join_features(features, table)
}

fn task_result<T>(result: Result<Result<T>, JoinError>, what: &str) -> Result<T> {
	match result {
		Ok(Ok(value)) => Ok(value),
		Ok(Err(e)) => Err(e),
		Err(e) => Err(anyhow!("{what} task failed: {e}")),
	}
}
