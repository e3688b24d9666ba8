use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct MapConfig {
	/// Id of the HTML element that holds the map.
	pub container: String,

	/// Initial center as `[latitude, longitude]`.
	pub center: [f64; 2],

	/// Initial zoom level.
	pub zoom: u8,

	/// Title of the generated page.
	pub title: String,
}

impl Default for MapConfig {
	fn default() -> Self {
		MapConfig {
			container: String::from("map"),
			center: [56.946, 24.105],
			zoom: 13,
			title: String::from("Atpūtas vietas"),
		}
	}
}

impl MapConfig {
	pub fn override_optional_zoom(&mut self, zoom: &Option<u8>) {
		if let Some(zoom) = zoom {
			self.zoom = *zoom;
		}
	}
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct TileConfig {
	/// Raster tile URL template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
	pub url: String,

	/// Attribution HTML shown in the map corner.
	pub attribution: String,
}

impl Default for TileConfig {
	fn default() -> Self {
		TileConfig {
			url: String::from("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"),
			attribution: String::from(
				"&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
			),
		}
	}
}
