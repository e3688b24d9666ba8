use super::{MapArgs, build_map};
use anyhow::{Context, Result};
use std::path::PathBuf;
use vietas_core::map::markers_to_geojson;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Point data in LKS-92, local file or http(s):// URL
	#[arg(required = true)]
	pub data: String,

	/// GeoJSON file to write, "-" for stdout
	#[arg(required = true)]
	pub output: PathBuf,

	#[command(flatten)]
	pub map: MapArgs,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.map.load_config()?;
	let (map, report) = build_map(&arguments.data, &config)?;

	let geojson = serde_json::to_string_pretty(&markers_to_geojson(&map))?;

	if arguments.output.as_os_str() == "-" {
		println!("{geojson}");
	} else {
		std::fs::write(&arguments.output, geojson)
			.with_context(|| format!("failed to write {:?}", arguments.output))?;
		eprintln!("exported {} markers into {:?}", report.markers, arguments.output);
	}
	Ok(())
}
