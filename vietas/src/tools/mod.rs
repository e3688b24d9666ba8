pub mod export;
pub mod probe;
pub mod render;
pub mod serve;

use anyhow::{Result, bail};
use std::path::PathBuf;
use vietas_core::{
	config::Config,
	diagnostics::StderrAlert,
	io::DataSource,
	map::MapView,
	pipeline::{PipelineReport, render_source},
};

/// Options shared by every subcommand that builds a map.
#[derive(clap::Args, Debug)]
pub struct MapArgs {
	/// Path to a configuration file (YAML) with map, tile and server settings.
	/// Command line arguments override configuration file settings.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0, verbatim_doc_comment)]
	pub config: Option<PathBuf>,

	/// Initial zoom level of the map. Default: 13
	#[arg(short = 'z', long, display_order = 0)]
	pub zoom: Option<u8>,
}

impl MapArgs {
	pub fn load_config(&self) -> Result<Config> {
		let mut config = if let Some(path) = &self.config {
			Config::from_path(path)?
		} else {
			Config::default()
		};
		config.map.override_optional_zoom(&self.zoom);
		Ok(config)
	}
}

/// Runs the pipeline for the command line: alerts go to stderr and a fatal load error fails
/// the command.
#[tokio::main]
pub async fn build_map(data: &str, config: &Config) -> Result<(MapView, PipelineReport)> {
	let mut map = MapView::from_config(&config.map, &config.tiles);
	let report = render_source(&mut map, &DataSource::from(data), &mut StderrAlert).await?;

	if let Some(error) = &report.error {
		bail!("could not build a map from {data}: {error}");
	}
	Ok((map, report))
}
