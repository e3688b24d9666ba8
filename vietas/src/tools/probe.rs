use super::{MapArgs, build_map};
use anyhow::Result;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Point data in LKS-92, local file or http(s):// URL
	#[arg(required = true)]
	pub data: String,

	#[command(flatten)]
	pub map: MapArgs,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.map.load_config()?;
	let (map, report) = build_map(&arguments.data, &config)?;

	for marker in map.markers() {
		println!(
			"{:.6}\t{:.6}\t{}",
			marker.position.lat,
			marker.position.lng,
			marker.properties.display("PLACENAME")
		);
	}

	let envelope = report.envelope.map_or_else(|| String::from("none"), |kind| kind.to_string());
	println!(
		"{} records ({envelope}), {} markers, {} skipped",
		report.records, report.markers, report.skipped
	);
	Ok(())
}
