use super::{LatLng, Marker};
use crate::config::{MapConfig, TileConfig};

/// A raster tile background.
#[derive(Clone, Debug, PartialEq)]
pub struct TileLayer {
	pub url_template: String,
	pub attribution: String,
}

impl From<&TileConfig> for TileLayer {
	fn from(config: &TileConfig) -> Self {
		TileLayer {
			url_template: config.url.clone(),
			attribution: config.attribution.clone(),
		}
	}
}

/// One map per page: its container, initial view, background layers and markers.
///
/// The view is handed to every rendering step explicitly; markers are only ever added.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
	container: String,
	title: String,
	center: LatLng,
	zoom: u8,
	tile_layers: Vec<TileLayer>,
	markers: Vec<Marker>,
}

impl MapView {
	pub fn new(config: &MapConfig) -> MapView {
		let center = LatLng::new(config.center[0], config.center[1]);
		log::info!(
			"map created in #{} with center [{}, {}], zoom {}",
			config.container,
			center.lat,
			center.lng,
			config.zoom
		);

		MapView {
			container: config.container.clone(),
			title: config.title.clone(),
			center,
			zoom: config.zoom,
			tile_layers: Vec::new(),
			markers: Vec::new(),
		}
	}

	/// A map with its single background layer, ready for markers.
	pub fn from_config(map: &MapConfig, tiles: &TileConfig) -> MapView {
		let mut view = MapView::new(map);
		view.add_tile_layer(TileLayer::from(tiles));
		view
	}

	pub fn add_tile_layer(&mut self, layer: TileLayer) {
		log::info!("tile layer added: {}", layer.url_template);
		self.tile_layers.push(layer);
	}

	pub fn add_marker(&mut self, marker: Marker) {
		log::trace!("marker added at [{}, {}]", marker.position.lat, marker.position.lng);
		self.markers.push(marker);
	}

	pub fn container(&self) -> &str {
		&self.container
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn center(&self) -> LatLng {
		self.center
	}

	pub fn zoom(&self) -> u8 {
		self.zoom
	}

	pub fn tile_layers(&self) -> &[TileLayer] {
		&self.tile_layers
	}

	pub fn markers(&self) -> &[Marker] {
		&self.markers
	}
}
