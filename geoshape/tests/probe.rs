mod test_utilities;
use predicates::{prelude::*, str};
use test_utilities::*;

#[test]
fn probe_requires_filename() {
	geoshape_cmd()
		.arg("probe")
		.assert()
		.failure()
		.code(2)
		.stderr(str::contains("Usage: geoshape probe"));
}

#[test]
fn probe_shapefile() {
	let (_dir, input) = three_shapes_fixture(Some(&["a", "b", "c"]));

	geoshape_cmd()
		.args(["probe", path_str(&input)])
		.assert()
		.success()
		.stdout(str::diff(
			"name: shapes\nfeatures: 3\n  Point: 1\n  Polygon: 1\n  MultiLineString: 1\ncolumns: 1\n  NAME (C, 10)\nbbox: [0, 0, 13.4, 52.5]\n",
		));
}

#[test]
fn probe_shapefile_without_table() {
	let (_dir, input) = three_shapes_fixture(None);

	geoshape_cmd()
		.args(["probe", path_str(&input)])
		.assert()
		.success()
		.stdout(str::contains("features: 3\n"))
		.stdout(str::contains("columns").not());
}

#[test]
fn probe_geojson() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("cities.geojson");
	std::fs::write(
		&input,
		r#"{"type":"FeatureCollection","name":"cities","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[7.27,43.7]},"properties":{"name":"Nice"}}]}"#,
	)
	.unwrap();

	geoshape_cmd()
		.args(["probe", path_str(&input)])
		.assert()
		.success()
		.stdout(str::diff("name: cities\nfeatures: 1\n  Point: 1\nbbox: [7.27, 43.7, 7.27, 43.7]\n"));
}

#[test]
fn probe_missing_file_fails() {
	geoshape_cmd()
		.args(["probe", "does/not/exist.shp"])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("i/o error"));
}
