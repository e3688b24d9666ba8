use super::MapArgs;
use crate::server::MapServer;
use anyhow::Result;
use tokio::time::{Duration, sleep};
use vietas_core::io::DataSource;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// Point data in LKS-92, local file or http(s):// URL.
	/// The data is loaded again on every page request.
	#[arg(required = true, verbatim_doc_comment)]
	pub data: String,

	#[command(flatten)]
	pub map: MapArgs,

	/// Serve via socket ip. Default: 0.0.0.0
	#[arg(short = 'i', long, display_order = 0)]
	pub ip: Option<String>,

	/// Serve via port. Default: 8080
	#[arg(short, long, display_order = 0)]
	pub port: Option<u16>,

	/// Shutdown server automatically after x milliseconds.
	#[arg(long, display_order = 4)]
	pub auto_shutdown: Option<u64>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = arguments.map.load_config()?;
	config.server.override_optional_ip(&arguments.ip);
	config.server.override_optional_port(&arguments.port);

	let source = DataSource::from(arguments.data.as_str());
	eprintln!("   {:30}  <-  {source}", "/");
	eprintln!("   {:30}  <-  {source}", "/markers.geojson");

	let mut server = MapServer::from_config(&config, source);
	server.start().await?;

	if let Some(milliseconds) = arguments.auto_shutdown {
		sleep(Duration::from_millis(milliseconds)).await;
	} else {
		loop {
			sleep(Duration::from_secs(60)).await;
		}
	}

	server.stop().await;
	Ok(())
}
