//! Request handlers and small response helpers.
//!
//! Every page request runs the pipeline from scratch with its own map view, so a changed data
//! file shows up on the next reload.

use axum::{
	body::Body,
	extract::State,
	http::{StatusCode, header},
	response::Response,
};
use std::sync::Arc;
use vietas_core::{
	config::{MapConfig, TileConfig},
	io::DataSource,
	map::{MapView, markers_to_geojson, render_page},
	pipeline::render_source,
};

/// Read-only state shared by all requests.
#[derive(Debug)]
pub struct MapState {
	pub source: DataSource,
	pub map: MapConfig,
	pub tiles: TileConfig,
}

impl MapState {
	fn new_map(&self) -> MapView {
		MapView::from_config(&self.map, &self.tiles)
	}
}

/// `GET /`: the map page. A load failure still returns the page, with the error shown as an alert.
pub async fn serve_page(State(state): State<Arc<MapState>>) -> Response<Body> {
	let mut map = state.new_map();
	let mut alerts: Vec<String> = Vec::new();

	if let Err(err) = render_source(&mut map, &state.source, &mut alerts).await {
		log::error!("failed to run pipeline:\n{}", format_error_chain(&err));
		return error_500();
	}

	match render_page(&map, &alerts) {
		Ok(page) => ok_with("text/html; charset=utf-8", page),
		Err(err) => {
			log::error!("failed to render page:\n{}", format_error_chain(&err));
			error_500()
		}
	}
}

/// `GET /markers.geojson`: the markers as WGS84 GeoJSON.
pub async fn serve_geojson(State(state): State<Arc<MapState>>) -> Response<Body> {
	let mut map = state.new_map();
	let mut alerts: Vec<String> = Vec::new();

	match render_source(&mut map, &state.source, &mut alerts).await {
		Ok(report) if report.is_failed() => error_with(502, &alerts.join("\n")),
		Ok(_) => ok_with("application/geo+json", markers_to_geojson(&map).to_string()),
		Err(err) => {
			log::error!("failed to run pipeline:\n{}", format_error_chain(&err));
			error_500()
		}
	}
}

pub async fn serve_status() -> &'static str {
	"ready!"
}

fn format_error_chain(err: &anyhow::Error) -> String {
	let mut result = err.to_string();

	for (i, cause) in err.chain().skip(1).enumerate() {
		if i == 0 {
			result.push_str("\n  Caused by:");
		}
		result.push_str(&format!("\n    {cause}"));
	}

	result
}

fn ok_with(content_type: &str, body: String) -> Response<Body> {
	Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, content_type)
		.body(Body::from(body))
		.unwrap_or_else(|_| error_500())
}

fn error_with(status: u16, message: &str) -> Response<Body> {
	let mut response = Response::new(Body::from(message.to_string()));
	*response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
	response
		.headers_mut()
		.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("text/plain; charset=utf-8"));
	response
}

pub fn error_404() -> Response<Body> {
	error_with(404, "Not Found")
}

pub fn error_500() -> Response<Body> {
	error_with(500, "Internal Server Error")
}
