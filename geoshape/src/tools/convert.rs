use super::input::read_input;
use anyhow::{Context, Result, bail};
use geoshape_geometry::{AttributeTableSource, GeoCollection, ShapefileOptions};
use log::{info, warn};
use std::{
	io::Write,
	path::{Path, PathBuf},
};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
	Geojson,
	Wkt,
}

impl OutputFormat {
	/// Derives the format from the output file extension. Standard output defaults to GeoJSON.
	fn from_output(output: &str) -> Result<Self> {
		if output == "-" {
			return Ok(OutputFormat::Geojson);
		}
		let extension = Path::new(output)
			.extension()
			.map(|e| e.to_string_lossy().to_ascii_lowercase())
			.unwrap_or_default();
		Ok(match extension.as_str() {
			"geojson" | "json" => OutputFormat::Geojson,
			"wkt" => OutputFormat::Wkt,
			_ => bail!("can not derive the output format from {output:?}, use --format"),
		})
	}

	fn encode(self, collection: &GeoCollection, precision: Option<u8>, pretty: bool) -> String {
		match self {
			OutputFormat::Geojson if pretty => collection.to_pretty_geojson_string(precision),
			OutputFormat::Geojson => collection.to_geojson_string(precision),
			OutputFormat::Wkt => {
				if precision.is_some() || pretty {
					warn!("--precision and --pretty only apply to GeoJSON output");
				}
				collection.to_wkt()
			}
		}
	}
}

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input file: *.shp (with its *.dbf attribute table), *.geojson or *.json
	#[arg()]
	input_file: PathBuf,

	/// output file: *.geojson, *.json or *.wkt, use "-" for standard output
	#[arg()]
	output_file: String,

	/// read the attribute table from this file instead of the *.dbf next to the input
	#[arg(long, value_name = "PATH", conflicts_with = "no_table", display_order = 1)]
	table: Option<PathBuf>,

	/// ignore the attribute table, features get empty properties
	#[arg(long, display_order = 1)]
	no_table: bool,

	/// round coordinates to this number of decimals
	#[arg(long, short, value_name = "int", display_order = 2)]
	precision: Option<u8>,

	/// indent the GeoJSON output
	#[arg(long, display_order = 2)]
	pretty: bool,

	/// output format, derived from the output file extension if not set
	#[arg(long, short, value_enum, display_order = 2)]
	format: Option<OutputFormat>,
}

impl Subcommand {
	fn shapefile_options(&self) -> ShapefileOptions {
		let table = if self.no_table {
			AttributeTableSource::Skip
		} else if let Some(path) = &self.table {
			AttributeTableSource::Path(path.clone())
		} else {
			AttributeTableSource::Companion
		};
		ShapefileOptions::default().with_table(table)
	}
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("convert from {:?} to {:?}", arguments.input_file, arguments.output_file);

	let format = match arguments.format {
		Some(format) => format,
		None => OutputFormat::from_output(&arguments.output_file)?,
	};

	let collection = read_input(&arguments.input_file, &arguments.shapefile_options())
		.await
		.with_context(|| format!("Failed to read {:?}", arguments.input_file))?;
	info!("read {} features", collection.len());

	let mut text = format.encode(&collection, arguments.precision, arguments.pretty);
	text.push('\n');

	if arguments.output_file == "-" {
		let mut stdout = std::io::stdout().lock();
		stdout.write_all(text.as_bytes())?;
		stdout.flush()?;
	} else {
		std::fs::write(&arguments.output_file, text)
			.with_context(|| format!("Failed to write {:?}", arguments.output_file))?;
	}

	eprintln!("finished converting {} features", collection.len());

	Ok(())
}
