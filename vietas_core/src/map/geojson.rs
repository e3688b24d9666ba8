use super::MapView;
use serde_json::{Value, json};

/// The markers of `view` as a WGS84 GeoJSON `FeatureCollection`.
///
/// Each feature keeps the original properties and gains a `popup` property with the rendered
/// popup markup.
pub fn markers_to_geojson(view: &MapView) -> Value {
	let features: Vec<Value> = view
		.markers()
		.iter()
		.map(|marker| {
			let mut properties = marker.properties.to_json();
			properties["popup"] = Value::from(marker.popup.as_str());
			json!({
				"type": "Feature",
				"geometry": {
					"type": "Point",
					"coordinates": [marker.position.lng, marker.position.lat],
				},
				"properties": properties,
			})
		})
		.collect();

	json!({ "type": "FeatureCollection", "features": features })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		config::MapConfig,
		geo::PlaceProperties,
		map::{LatLng, Marker},
	};
	use pretty_assertions::assert_eq;

	#[test]
	fn exports_longitude_first() {
		let mut view = MapView::new(&MapConfig::default());
		view.add_marker(Marker::new(
			LatLng::new(56.9, 24.1),
			String::from("<b>X</b>"),
			PlaceProperties::from(vec![("PLACENAME", "X")]),
		));

		assert_eq!(
			markers_to_geojson(&view),
			json!({
				"type": "FeatureCollection",
				"features": [{
					"type": "Feature",
					"geometry": { "type": "Point", "coordinates": [24.1, 56.9] },
					"properties": { "PLACENAME": "X", "popup": "<b>X</b>" }
				}]
			})
		);
	}

	#[test]
	fn empty_view_gives_empty_collection() {
		let view = MapView::new(&MapConfig::default());
		assert_eq!(markers_to_geojson(&view)["features"], json!([]));
	}
}
