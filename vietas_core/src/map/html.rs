//! Renders a [`MapView`] as a standalone Leaflet page.
//!
//! All dynamic data is embedded as one JSON object. Every `<` inside it is written as
//! `\u003c`, so no value can close the surrounding `<script>` element. Popup markup itself is
//! left untouched and is interpreted as HTML by Leaflet.

use super::{LatLng, MapView};
use anyhow::Result;
use serde::Serialize;

pub const LEAFLET_VERSION: &str = "1.9.4";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageData<'a> {
	container: &'a str,
	center: [f64; 2],
	zoom: u8,
	tile_layers: Vec<PageTileLayer<'a>>,
	markers: Vec<PageMarker<'a>>,
	alerts: &'a [String],
}

#[derive(Serialize)]
struct PageTileLayer<'a> {
	url: &'a str,
	attribution: &'a str,
}

#[derive(Serialize)]
struct PageMarker<'a> {
	#[serde(flatten)]
	position: LatLng,
	popup: &'a str,
}

const PAGE_SCRIPT: &str = r#"
const page = JSON.parse(document.getElementById("vietas-data").textContent);
const map = L.map(page.container).setView(page.center, page.zoom);
for (const layer of page.tileLayers) {
	L.tileLayer(layer.url, { attribution: layer.attribution }).addTo(map);
}
for (const marker of page.markers) {
	L.marker([marker.lat, marker.lng]).addTo(map).bindPopup(marker.popup);
}
for (const message of page.alerts) {
	alert(message);
}
"#;

/// Renders the page. `alerts` are shown as blocking dialogs once the page has loaded.
pub fn render_page(view: &MapView, alerts: &[String]) -> Result<String> {
	let data = PageData {
		container: view.container(),
		center: [view.center().lat, view.center().lng],
		zoom: view.zoom(),
		tile_layers: view
			.tile_layers()
			.iter()
			.map(|layer| PageTileLayer {
				url: &layer.url_template,
				attribution: &layer.attribution,
			})
			.collect(),
		markers: view
			.markers()
			.iter()
			.map(|marker| PageMarker {
				position: marker.position,
				popup: &marker.popup,
			})
			.collect(),
		alerts,
	};

	let json = serde_json::to_string(&data)?.replace('<', "\\u003c");

	let mut page = String::new();
	page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
	page.push_str("<meta charset=\"utf-8\">\n");
	page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
	page.push_str(&format!("<title>{}</title>\n", escape_html(view.title())));
	page.push_str(&format!(
		"<link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css\">\n"
	));
	page.push_str(&format!(
		"<script src=\"https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js\"></script>\n"
	));
	page.push_str("<style>html, body { height: 100%; margin: 0; } .vietas-map { height: 100%; }</style>\n");
	page.push_str("</head>\n<body>\n");
	page.push_str(&format!(
		"<div id=\"{}\" class=\"vietas-map\"></div>\n",
		escape_html(view.container())
	));
	page.push_str(&format!(
		"<script id=\"vietas-data\" type=\"application/json\">{json}</script>\n"
	));
	page.push_str(&format!("<script>{PAGE_SCRIPT}</script>\n"));
	page.push_str("</body>\n</html>\n");

	Ok(page)
}

fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			c => escaped.push(c),
		}
	}
	escaped
}
