use super::{MapArgs, build_map};
use anyhow::{Context, Result};
use std::path::PathBuf;
use vietas_core::map::render_page;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// Point data in LKS-92: a JSON array of features or a GeoJSON FeatureCollection.
	/// Local file or http(s):// URL.
	#[arg(required = true, verbatim_doc_comment)]
	pub data: String,

	/// HTML file to write.
	#[arg(required = true)]
	pub output: PathBuf,

	#[command(flatten)]
	pub map: MapArgs,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.map.load_config()?;
	let (map, report) = build_map(&arguments.data, &config)?;

	let page = render_page(&map, &[])?;
	std::fs::write(&arguments.output, page).with_context(|| format!("failed to write {:?}", arguments.output))?;

	eprintln!(
		"rendered {} markers ({} skipped) into {:?}",
		report.markers, report.skipped, arguments.output
	);
	Ok(())
}
