use super::handlers::{MapState, error_404, serve_geojson, serve_page, serve_status};
use anyhow::{Result, anyhow};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::oneshot::Sender;
use vietas_core::{
	config::{Config, ServerConfig},
	io::DataSource,
};

pub struct MapServer {
	ip: String,
	port: u16,
	state: Arc<MapState>,
	exit_signal: Option<Sender<()>>,
	local_addr: Option<SocketAddr>,
}

impl MapServer {
	pub fn from_config(config: &Config, source: DataSource) -> MapServer {
		let server: &ServerConfig = &config.server;
		MapServer {
			ip: server.ip().to_string(),
			port: server.port(),
			state: Arc::new(MapState {
				source,
				map: config.map.clone(),
				tiles: config.tiles.clone(),
			}),
			exit_signal: None,
			local_addr: None,
		}
	}

	fn router(&self) -> Router {
		Router::new()
			.route("/", get(serve_page))
			.route("/index.html", get(serve_page))
			.route("/markers.geojson", get(serve_geojson))
			.route("/status", get(serve_status))
			.fallback(|| async { error_404() })
			.with_state(Arc::clone(&self.state))
	}

	pub async fn start(&mut self) -> Result<()> {
		if self.exit_signal.is_some() {
			self.stop().await;
		}

		log::info!("starting server for {:?}", self.state.source);

		let addr = format!("{}:{}", self.ip, self.port);
		let listener = tokio::net::TcpListener::bind(&addr).await?;
		let local_addr = listener.local_addr()?;
		eprintln!("server starts listening on {local_addr}");

		let router = self.router();
		let (tx, rx) = tokio::sync::oneshot::channel::<()>();

		tokio::spawn(async move {
			let result = axum::serve(listener, router.into_make_service())
				.with_graceful_shutdown(async {
					rx.await.ok();
				})
				.await;
			if let Err(err) = result {
				log::error!("server stopped with error: {err}");
			}
		});

		self.exit_signal = Some(tx);
		self.local_addr = Some(local_addr);

		Ok(())
	}

	pub async fn stop(&mut self) {
		let Some(exit_signal) = self.exit_signal.take() else {
			return;
		};

		log::info!("stopping server");
		exit_signal.send(()).ok();
		self.local_addr = None;
	}

	/// Address the server is bound to, once started.
	pub fn local_addr(&self) -> Result<SocketAddr> {
		self.local_addr.ok_or_else(|| anyhow!("server is not running"))
	}
}
