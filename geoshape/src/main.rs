mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	#[clap(alias = "converter")]
	/// Convert a shapefile or GeoJSON file to GeoJSON or WKT
	Convert(tools::convert::Subcommand),

	/// Show information about a shapefile or GeoJSON file
	Probe(tools::probe::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Convert(arguments) => tools::convert::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geoshape"]).unwrap_err().to_string();
		assert!(err.starts_with("Reads ESRI shapefiles"));
		assert!(err.contains("\nUsage: geoshape [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geoshape", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geoshape "));
	}

	#[test]
	fn convert_subcommand() {
		let output = run_command(vec!["geoshape", "convert"]).unwrap_err().to_string();
		assert!(output.starts_with("Convert a shapefile or GeoJSON file to GeoJSON or WKT"));
	}

	#[test]
	fn probe_subcommand() {
		let output = run_command(vec!["geoshape", "probe"]).unwrap_err().to_string();
		assert!(output.starts_with("Show information about a shapefile or GeoJSON file"));
	}
}
