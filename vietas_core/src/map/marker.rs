use crate::geo::PlaceProperties;
use geo_types::Coord;
use serde::Serialize;

/// A position in map order: latitude first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLng {
	pub lat: f64,
	pub lng: f64,
}

impl LatLng {
	pub fn new(lat: f64, lng: f64) -> LatLng {
		LatLng { lat, lng }
	}
}

/// Swaps a projected `(longitude, latitude)` coordinate into map order.
impl From<Coord<f64>> for LatLng {
	fn from(coord: Coord<f64>) -> Self {
		LatLng {
			lat: coord.y,
			lng: coord.x,
		}
	}
}

/// A point annotation with its popup, owned by the [`MapView`](super::MapView).
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
	pub position: LatLng,
	pub popup: String,
	pub properties: PlaceProperties,
}

impl Marker {
	pub fn new(position: LatLng, popup: String, properties: PlaceProperties) -> Marker {
		Marker {
			position,
			popup,
			properties,
		}
	}
}
