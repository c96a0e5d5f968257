use super::input::{InputFormat, read_input};
use anyhow::{Context, Result};
use geoshape_geometry::{DbfColumn, GeoCollection, ShapefileOptions, companion_table_path, read_dbf_file};
use std::{fmt::Write, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// file you want to probe: *.shp, *.geojson or *.json
	#[arg(required = true, verbatim_doc_comment)]
	filename: PathBuf,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("probe {:?}", arguments.filename);

	let collection = read_input(&arguments.filename, &ShapefileOptions::default())
		.await
		.with_context(|| format!("Failed to read {:?}", arguments.filename))?;

	let columns = match InputFormat::from_path(&arguments.filename)? {
		InputFormat::Shapefile => read_dbf_file(&companion_table_path(&arguments.filename)?)?.map(|table| table.columns),
		InputFormat::GeoJson => None,
	};

	print!("{}", describe(&collection, columns.as_deref()));
	Ok(())
}

/// Renders the summary printed by `probe`.
fn describe(collection: &GeoCollection, columns: Option<&[DbfColumn]>) -> String {
	let mut text = String::new();
	if let Some(name) = &collection.name {
		_ = writeln!(text, "name: {name}");
	}
	_ = writeln!(text, "features: {}", collection.len());
	for (geometry_type, count) in collection.count_by_type() {
		_ = writeln!(text, "  {geometry_type}: {count}");
	}

	if let Some(columns) = columns {
		_ = writeln!(text, "columns: {}", columns.len());
		for column in columns {
			_ = writeln!(text, "  {} ({}, {})", column.name, column.data_type, column.size);
		}
	}

	match collection.compute_bounds() {
		Some([x_min, y_min, x_max, y_max]) => _ = writeln!(text, "bbox: [{x_min}, {y_min}, {x_max}, {y_max}]"),
		None => _ = writeln!(text, "bbox: none"),
	}
	text
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use geoshape_geometry::{GeoFeature, Geometry, shapefile::test_utils::*};
	use pretty_assertions::assert_eq;

	#[test]
	fn describe_collection() {
		let collection = GeoCollection::new(vec![
			GeoFeature::new(Geometry::new_point([1, 2])),
			GeoFeature::new(Geometry::new_line_string(vec![[-3.5, 0.0], [4.0, 8.0]])),
			GeoFeature::new(Geometry::new_point([0, 0])),
		])
		.with_name("mixed");
		let columns = [DbfColumn {
			name: "NAME".to_string(),
			data_type: 'C',
			size: 12,
		}];

		assert_eq!(
			describe(&collection, Some(&columns)),
			"name: mixed\nfeatures: 3\n  Point: 2\n  LineString: 1\ncolumns: 1\n  NAME (C, 12)\nbbox: [-3.5, 0, 4, 8]\n"
		);
	}

	#[test]
	fn describe_empty_collection() {
		assert_eq!(
			describe(&GeoCollection::default(), None),
			"features: 0\nbbox: none\n"
		);
	}

	#[test]
	fn probe_shapefile() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let (shp, dbf) = hello_shapefile();
		let input = write_shapefile(dir.path(), "hello", &shp, Some(&dbf))?;
		run_command(vec!["geoshape", "probe", input.to_str().unwrap()])?;
		Ok(())
	}
}
