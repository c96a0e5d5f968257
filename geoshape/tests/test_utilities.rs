#![allow(unused)]

use assert_cmd::{Command, cargo};
use geoshape_geometry::shapefile::test_utils::{DbfBuilder, ShpBuilder, hello_shapefile, write_shapefile};
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

#[cfg(windows)]
pub const BINARY_NAME: &str = "geoshape.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "geoshape";

/// Helper to create a Command for the geoshape binary.
pub fn geoshape_cmd() -> Command {
	Command::new(cargo::cargo_bin!("geoshape"))
}

/// Helper to write the one-point "Hello!" shapefile into a fresh temp dir.
pub fn hello_fixture() -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let (shp, dbf) = hello_shapefile();
	let path = write_shapefile(dir.path(), "hello", &shp, Some(&dbf)).expect("failed to write fixture");
	(dir, path)
}

/// Helper to write a shapefile with three shapes and the given `NAME` rows, or no table.
pub fn three_shapes_fixture(names: Option<&[&str]>) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let shp = ShpBuilder::new()
		.add_point(13.4, 52.5)
		.add_poly_line(&[vec![[0.0, 0.0], [1.0, 1.0]], vec![[2.0, 2.0], [3.0, 3.0]]])
		.add_polygon(&[vec![[0.0, 0.0], [4.0, 0.0], [0.0, 3.0], [0.0, 0.0]]])
		.build();
	let dbf = names.map(|names| {
		names
			.iter()
			.fold(DbfBuilder::new().add_column("NAME", 'C', 10), |builder, name| {
				builder.add_row(&[*name])
			})
			.build()
	});
	let path = write_shapefile(dir.path(), "shapes", &shp, dbf.as_deref()).expect("failed to write fixture");
	(dir, path)
}

pub fn path_str(path: &Path) -> &str {
	path.to_str().expect("path is not valid UTF-8")
}
