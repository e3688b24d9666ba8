mod server;
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
	/// Render the places as a standalone HTML map
	Render(tools::render::Subcommand),

	/// List the markers a data file produces
	Probe(tools::probe::Subcommand),

	/// Write the markers as WGS84 GeoJSON
	Export(tools::export::Subcommand),

	#[clap(alias = "server")]
	/// Serve the map via http
	Serve(tools::serve::Subcommand),
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
		Commands::Render(arguments) => tools::render::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
		Commands::Export(arguments) => tools::export::run(arguments),
		Commands::Serve(arguments) => tools::serve::run(arguments),
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
		let err = run_command(vec!["vietas"]).unwrap_err().to_string();
		assert!(err.starts_with("Renders LKS-92 point data as markers on a web map."));
		assert!(err.contains("\nUsage: vietas [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["vietas", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("vietas "));
	}

	#[test]
	fn render_subcommand() {
		let output = run_command(vec!["vietas", "render"]).unwrap_err().to_string();
		assert!(output.starts_with("Render the places as a standalone HTML map"));
	}

	#[test]
	fn probe_subcommand() {
		let output = run_command(vec!["vietas", "probe"]).unwrap_err().to_string();
		assert!(output.starts_with("List the markers a data file produces"));
	}

	#[test]
	fn export_subcommand() {
		let output = run_command(vec!["vietas", "export"]).unwrap_err().to_string();
		assert!(output.starts_with("Write the markers as WGS84 GeoJSON"));
	}

	#[test]
	fn serve_subcommand() {
		let output = run_command(vec!["vietas", "serve"]).unwrap_err().to_string();
		assert!(output.starts_with("Serve the map via http"));
	}
}
