//! The load → normalize → transform → render pipeline.
//!
//! Loading is the only asynchronous step. Once the payload is in memory the remaining stages
//! run to completion without suspending:
//!
//! 1. a load or parse failure is fatal: it is logged, shown through the [`AlertSink`] and
//!    nothing is rendered,
//! 2. the payload is classified as an [`Envelope`]; an unrecognized shape is logged and
//!    nothing is rendered, without telling the user,
//! 3. every record is decoded and reprojected; a record that fails is logged as a warning
//!    and skipped,
//! 4. every surviving record becomes one [`Marker`] on the [`MapView`].

use crate::{
	PipelineError,
	diagnostics::{AlertSink, Diagnostic, DiagnosticSink, LogSink},
	geo::{CoordinateTransform, Envelope, EnvelopeKind, PlaceFeature, Reprojector},
	io::{DataLoaderTrait, DataSource, open_loader},
	map::{LatLng, MapView, Marker, popup_content},
};
use anyhow::{Result, ensure};
use geo_types::Coord;
use log::Level;
use serde_json::Value;

/// What a single pipeline run did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipelineReport {
	/// Shape of the payload, `None` if loading failed.
	pub envelope: Option<EnvelopeKind>,
	/// Number of records in the payload.
	pub records: usize,
	pub markers: usize,
	pub skipped: usize,
	/// Message of the fatal error, if any.
	pub error: Option<String>,
}

impl PipelineReport {
	pub fn is_failed(&self) -> bool {
		self.error.is_some()
	}
}

/// Fetches the resource once and parses it as JSON.
pub async fn load_payload(loader: &dyn DataLoaderTrait) -> Result<Value, PipelineError> {
	let body = loader.read_all().await.map_err(PipelineError::Load)?;
	log::info!("data loaded from {} ({} bytes)", loader.get_name(), body.len());
	Ok(serde_json::from_slice(&body)?)
}

/// Opens the loader for `source` and loads it. Failing to open counts as a load failure.
pub async fn load_source(source: &DataSource) -> Result<Value, PipelineError> {
	let loader = open_loader(source).map_err(PipelineError::Load)?;
	load_payload(&*loader).await
}

/// Runs the whole pipeline on `source` with the LKS-92 → WGS84 transform and diagnostics sent
/// to the `log` facade.
///
/// Only a broken projection setup is returned as an error; everything the data can do wrong
/// is handled inside the pipeline and described by the report.
pub async fn render_source(map: &mut MapView, source: &DataSource, alerts: &mut dyn AlertSink) -> Result<PipelineReport> {
	let loaded = load_source(source).await;

	let reprojector = Reprojector::lks92_to_wgs84()?;
	let mut diagnostics = LogSink;
	let mut pipeline = Pipeline::new(&reprojector, &mut diagnostics, alerts);
	Ok(pipeline.finish(map, &source.to_string(), loaded))
}

/// Holds the injected parts of a run: the coordinate transform and both reporting channels.
pub struct Pipeline<'a> {
	transform: &'a dyn CoordinateTransform,
	diagnostics: &'a mut dyn DiagnosticSink,
	alerts: &'a mut dyn AlertSink,
}

impl<'a> Pipeline<'a> {
	pub fn new(
		transform: &'a dyn CoordinateTransform,
		diagnostics: &'a mut dyn DiagnosticSink,
		alerts: &'a mut dyn AlertSink,
	) -> Pipeline<'a> {
		Pipeline {
			transform,
			diagnostics,
			alerts,
		}
	}

	pub async fn run(&mut self, map: &mut MapView, loader: &dyn DataLoaderTrait) -> PipelineReport {
		let loaded = load_payload(loader).await;
		self.finish(map, loader.get_name(), loaded)
	}

	/// The synchronous part of a run, starting from the outcome of the load.
	pub fn finish(&mut self, map: &mut MapView, name: &str, loaded: Result<Value, PipelineError>) -> PipelineReport {
		match loaded {
			Ok(payload) => {
				self.emit(Diagnostic::new(Level::Debug, "data parsed").with("source", name));
				self.render_payload(map, payload)
			}
			Err(err) => self.fail(name, err),
		}
	}

	fn fail(&mut self, name: &str, err: PipelineError) -> PipelineReport {
		self.emit(
			Diagnostic::new(Level::Error, "error loading the data")
				.with("source", name)
				.with("error", &err),
		);
		self.alerts.alert(&format!("Error loading data: {err}"));

		PipelineReport {
			error: Some(err.to_string()),
			..PipelineReport::default()
		}
	}

	/// Normalizes `payload` and places one marker per valid record on `map`.
	pub fn render_payload(&mut self, map: &mut MapView, payload: Value) -> PipelineReport {
		let envelope = Envelope::from_json(payload);
		let mut report = PipelineReport {
			envelope: Some(envelope.kind()),
			..PipelineReport::default()
		};

		match &envelope {
			Envelope::Array(_) => {}
			Envelope::FeatureCollection(_) => {
				self.emit(Diagnostic::new(
					Level::Warn,
					"payload is not an array, using its 'features' member",
				));
			}
			Envelope::Unrecognized(found) => {
				self.emit(
					Diagnostic::new(Level::Error, "payload is neither an array nor an object with a 'features' array")
						.with("found", found),
				);
			}
		}

		let Some(records) = envelope.into_records() else {
			return report;
		};

		report.records = records.len();
		for (index, record) in records.iter().enumerate() {
			if self.render_record(map, index, record) {
				report.markers += 1;
			} else {
				report.skipped += 1;
			}
		}

		self.emit(
			Diagnostic::new(Level::Info, "markers placed")
				.with("markers", report.markers)
				.with("skipped", report.skipped),
		);
		report
	}

	fn render_record(&mut self, map: &mut MapView, index: usize, record: &Value) -> bool {
		let feature = match PlaceFeature::from_json(record) {
			Ok(feature) => feature,
			Err(err) => {
				self.emit(
					Diagnostic::new(Level::Warn, "invalid record")
						.with("record", index)
						.with("reason", err),
				);
				return false;
			}
		};

		self.emit(
			Diagnostic::new(Level::Debug, "original coordinates")
				.with("record", index)
				.with("coordinates", format!("{:?}", feature.coordinates)),
		);

		let projected = match self.project(&feature) {
			Ok(projected) => projected,
			Err(err) => {
				self.emit(
					Diagnostic::new(Level::Warn, "invalid coordinates")
						.with("record", index)
						.with("coordinates", format!("{:?}", feature.coordinates))
						.with("reason", err),
				);
				return false;
			}
		};

		self.emit(
			Diagnostic::new(Level::Debug, "converted coordinates")
				.with("record", index)
				.with("coordinates", format!("[{}, {}]", projected.x, projected.y)),
		);

		let popup = popup_content(&feature.properties);
		map.add_marker(Marker::new(LatLng::from(projected), popup, feature.properties));
		true
	}

	fn project(&self, feature: &PlaceFeature) -> Result<Coord<f64>> {
		let projected = self.transform.transform(feature.source_coordinate()?)?;
		ensure!(
			projected.x.is_finite() && projected.y.is_finite(),
			"transform produced non-numeric result ({}, {})",
			projected.x,
			projected.y
		);
		Ok(projected)
	}

	fn emit(&mut self, diagnostic: Diagnostic) {
		self.diagnostics.emit(diagnostic);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		config::{MapConfig, TileConfig},
		io::DataLoaderMemory,
	};
	use anyhow::anyhow;
	use approx::assert_abs_diff_eq;
	use async_trait::async_trait;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	/// Returns the source coordinate unchanged, so expected positions are easy to write down.
	struct Identity;

	impl CoordinateTransform for Identity {
		fn transform(&self, source: Coord<f64>) -> Result<Coord<f64>> {
			Ok(source)
		}
	}

	/// Produces a result that is not a pair of numbers.
	struct Garbage;

	impl CoordinateTransform for Garbage {
		fn transform(&self, _source: Coord<f64>) -> Result<Coord<f64>> {
			Ok(Coord { x: f64::NAN, y: 1.0 })
		}
	}

	#[derive(Debug)]
	struct FailingLoader(&'static str);

	#[async_trait]
	impl DataLoaderTrait for FailingLoader {
		async fn read_all(&self) -> Result<Vec<u8>> {
			Err(anyhow!(self.0))
		}

		fn get_name(&self) -> &str {
			"data.json"
		}
	}

	#[derive(Default)]
	struct Outcome {
		map: Option<MapView>,
		report: PipelineReport,
		diagnostics: Vec<Diagnostic>,
		alerts: Vec<String>,
	}

	impl Outcome {
		fn markers(&self) -> Vec<(f64, f64, String)> {
			self
				.map
				.as_ref()
				.unwrap()
				.markers()
				.iter()
				.map(|m| (m.position.lat, m.position.lng, m.popup.clone()))
				.collect()
		}

		fn at_level(&self, level: Level) -> Vec<&Diagnostic> {
			self.diagnostics.iter().filter(|d| d.level == level).collect()
		}
	}

	async fn run_with(transform: &dyn CoordinateTransform, loader: &dyn DataLoaderTrait) -> Outcome {
		let mut outcome = Outcome::default();
		let mut map = MapView::from_config(&MapConfig::default(), &TileConfig::default());
		outcome.report = Pipeline::new(transform, &mut outcome.diagnostics, &mut outcome.alerts)
			.run(&mut map, loader)
			.await;
		outcome.map = Some(map);
		outcome
	}

	async fn run_json(transform: &dyn CoordinateTransform, payload: Value) -> Outcome {
		run_with(transform, &DataLoaderMemory::new("data.json", payload.to_string())).await
	}

	fn feature(x: f64, y: f64, name: &str) -> Value {
		json!({
			"type": "Feature",
			"geometry": { "type": "Point", "coordinates": [x, y] },
			"properties": {
				"PLACENAME": name,
				"PLACESUBTY": "Atpūtas vieta",
				"REG_CODE": "1",
				"LVM_DISTRI": "Rīgas",
				"BLOCKKEY": "B-1"
			}
		})
	}

	#[tokio::test]
	async fn array_of_n_features_gives_n_markers() {
		let payload = json!([feature(1.0, 2.0, "A"), feature(3.0, 4.0, "B"), feature(5.0, 6.0, "C")]);
		let outcome = run_json(&Identity, payload).await;

		assert_eq!(
			outcome.report,
			PipelineReport {
				envelope: Some(EnvelopeKind::Array),
				records: 3,
				markers: 3,
				skipped: 0,
				error: None,
			}
		);
		let positions: Vec<(f64, f64)> = outcome.markers().iter().map(|m| (m.0, m.1)).collect();
		assert_eq!(positions, [(2.0, 1.0), (4.0, 3.0), (6.0, 5.0)]);
		assert!(outcome.alerts.is_empty());
		assert!(outcome.at_level(Level::Warn).is_empty());
	}

	#[tokio::test]
	async fn feature_collection_behaves_like_an_array() {
		let payload = json!({
			"type": "FeatureCollection",
			"features": [feature(1.0, 2.0, "A"), feature(3.0, 4.0, "B")]
		});
		let outcome = run_json(&Identity, payload).await;

		assert_eq!(outcome.report.envelope, Some(EnvelopeKind::FeatureCollection));
		assert_eq!(outcome.report.markers, 2);
		assert_eq!(outcome.markers()[1].0, 4.0);
		assert_eq!(outcome.markers()[1].1, 3.0);
		assert!(outcome.alerts.is_empty());
		assert!(outcome.at_level(Level::Error).is_empty());

		let warnings = outcome.at_level(Level::Warn);
		assert_eq!(warnings.len(), 1);
		assert_eq!(warnings[0].message, "payload is not an array, using its 'features' member");
	}

	#[tokio::test]
	async fn marker_sits_at_swapped_lks92_projection() {
		let payload = json!([feature(506387.7613, 311379.8247, "Rīga")]);
		let outcome = run_json(&Reprojector::lks92_to_wgs84().unwrap(), payload).await;

		let markers = outcome.markers();
		assert_eq!(markers.len(), 1);
		assert_abs_diff_eq!(markers[0].0, 56.946, epsilon = 1e-6);
		assert_abs_diff_eq!(markers[0].1, 24.105, epsilon = 1e-6);
	}

	#[tokio::test]
	async fn popup_is_built_from_properties() {
		let payload = json!([{
			"geometry": { "coordinates": [1, 2] },
			"properties": { "PLACENAME": "X", "PLACESUBTY": "Y", "REG_CODE": "1", "LVM_DISTRI": "D", "BLOCKKEY": "B" }
		}]);
		let outcome = run_json(&Identity, payload).await;

		assert_eq!(
			outcome.markers()[0].2,
			"<b>X</b><br>\nType: Y<br>\nRegion Code: 1<br>\nLVM District: D<br>\nBlock Key: B"
		);
	}

	#[rstest::rstest]
	#[case(json!(null), "null")]
	#[case(json!("hello"), "a string")]
	#[case(json!({ "type": "FeatureCollection" }), "an object without 'features'")]
	#[case(json!({ "features": "none" }), "an object whose 'features' is a string")]
	#[tokio::test]
	async fn unrecognized_payload_renders_nothing_silently(#[case] payload: Value, #[case] found: &str) {
		let outcome = run_json(&Identity, payload).await;

		assert_eq!(outcome.report.envelope, Some(EnvelopeKind::Unrecognized));
		assert_eq!(outcome.report.markers, 0);
		assert!(!outcome.report.is_failed());
		assert!(outcome.markers().is_empty());
		assert!(outcome.alerts.is_empty());

		let errors = outcome.at_level(Level::Error);
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].get("found"), Some(found));
	}

	#[tokio::test]
	async fn non_success_status_alerts_the_user() {
		let loader = FailingLoader("failed to load data.json: HTTP 404 Not Found");
		let outcome = run_with(&Identity, &loader).await;

		assert!(outcome.markers().is_empty());
		assert_eq!(
			outcome.alerts,
			["Error loading data: failed to load data.json: HTTP 404 Not Found"]
		);
		assert_eq!(
			outcome.report.error.as_deref(),
			Some("failed to load data.json: HTTP 404 Not Found")
		);
		assert_eq!(outcome.report.envelope, None);
		assert_eq!(outcome.at_level(Level::Error).len(), 1);
	}

	#[tokio::test]
	async fn malformed_body_alerts_the_user() {
		let outcome = run_with(&Identity, &DataLoaderMemory::new("data.json", "[{\"geometry\":")).await;

		assert!(outcome.markers().is_empty());
		assert_eq!(outcome.alerts.len(), 1);
		assert!(outcome.alerts[0].starts_with("Error loading data: failed to parse data: "));
		assert!(outcome.report.is_failed());
	}

	#[tokio::test]
	async fn non_numeric_transform_result_is_skipped_with_warning() {
		let payload = json!([feature(1.0, 2.0, "A"), feature(3.0, 4.0, "B")]);
		let outcome = run_json(&Garbage, payload).await;

		assert_eq!(outcome.report.markers, 0);
		assert_eq!(outcome.report.skipped, 2);
		assert!(outcome.alerts.is_empty());

		let warnings = outcome.at_level(Level::Warn);
		assert_eq!(warnings.len(), 2);
		assert_eq!(warnings[0].message, "invalid coordinates");
		assert_eq!(warnings[1].get("record"), Some("1"));
	}

	#[tokio::test]
	async fn bad_records_do_not_stop_the_loop() {
		let payload = json!([
			feature(1.0, 2.0, "ok"),
			{ "geometry": { "coordinates": [1, 2, 3] }, "properties": {} },
			{ "properties": { "PLACENAME": "no geometry" } },
			{ "geometry": { "coordinates": ["1", 2] } },
			feature(5.0, 6.0, "also ok")
		]);
		let outcome = run_json(&Identity, payload).await;

		assert_eq!(outcome.report.records, 5);
		assert_eq!(outcome.report.markers, 2);
		assert_eq!(outcome.report.skipped, 3);

		let warnings: Vec<(&str, Option<&str>)> = outcome
			.at_level(Level::Warn)
			.iter()
			.map(|d| (d.message.as_str(), d.get("record")))
			.collect();
		assert_eq!(
			warnings,
			[
				("invalid coordinates", Some("1")),
				("invalid record", Some("2")),
				("invalid record", Some("3")),
			]
		);
	}

	#[tokio::test]
	async fn render_source_reads_a_file() {
		let mut map = MapView::from_config(&MapConfig::default(), &TileConfig::default());
		let mut alerts: Vec<String> = Vec::new();
		let report = render_source(&mut map, &DataSource::from("../testdata/data.json"), &mut alerts)
			.await
			.unwrap();

		assert_eq!(report.envelope, Some(EnvelopeKind::Array));
		assert_eq!(report.markers, 3);
		assert_eq!(report.skipped, 1);
		assert!(alerts.is_empty());
		assert!(map.markers().iter().all(|m| (55.0..59.0).contains(&m.position.lat)));
	}

	#[tokio::test]
	async fn render_source_alerts_on_missing_file() {
		let mut map = MapView::from_config(&MapConfig::default(), &TileConfig::default());
		let mut alerts: Vec<String> = Vec::new();
		let report = render_source(&mut map, &DataSource::from("../testdata/missing.json"), &mut alerts)
			.await
			.unwrap();

		assert!(report.is_failed());
		assert!(map.markers().is_empty());
		assert_eq!(
			alerts,
			["Error loading data: failed to load ../testdata/missing.json: file does not exist"]
		);
	}

	#[tokio::test]
	async fn render_source_alerts_on_http_404() -> Result<()> {
		use axum::{Router, routing::get};

		let app = Router::new().route("/data.json", get(|| async { "[]" }));
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let host = format!("http://{}", listener.local_addr()?);
		tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

		let mut map = MapView::from_config(&MapConfig::default(), &TileConfig::default());
		let mut alerts: Vec<String> = Vec::new();
		let source = DataSource::from(format!("{host}/missing.json").as_str());
		let report = render_source(&mut map, &source, &mut alerts).await?;

		assert!(report.is_failed());
		assert_eq!(report.markers, 0);
		assert!(map.markers().is_empty());
		assert_eq!(
			alerts,
			[format!("Error loading data: failed to load {host}/missing.json: HTTP 404 Not Found")]
		);
		Ok(())
	}
}
