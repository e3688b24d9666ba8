//! Reprojection from the Latvian LKS-92 grid to WGS84 longitude/latitude.
//!
//! The projection math itself is done by `proj4rs`, using the same PROJ.4 definitions a
//! browser map would hand to proj4js.

use anyhow::{Result, anyhow, ensure};
use geo_types::Coord;
use proj4rs::{Proj, transform::transform};

/// LKS-92 / Latvia TM (EPSG:3059).
pub const LKS92: &str =
	"+proj=tmerc +lat_0=0 +lon_0=24 +k=0.9996 +x_0=500000 +y_0=-6000000 +datum=WGS84 +units=m +no_defs";

/// Geographic WGS84 (EPSG:4326), longitude first.
pub const WGS84: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Maps a source coordinate pair to geographic `(longitude, latitude)` in degrees.
pub trait CoordinateTransform {
	fn transform(&self, source: Coord<f64>) -> Result<Coord<f64>>;
}

/// A fixed transform between two PROJ.4 definitions.
pub struct Reprojector {
	source: Proj,
	target: Proj,
}

impl Reprojector {
	pub fn new(source_definition: &str, target_definition: &str) -> Result<Reprojector> {
		let source = Proj::from_proj_string(source_definition)
			.map_err(|e| anyhow!("invalid source projection '{source_definition}': {e}"))?;
		let target = Proj::from_proj_string(target_definition)
			.map_err(|e| anyhow!("invalid target projection '{target_definition}': {e}"))?;

		log::debug!("projection ready: '{source_definition}' -> '{target_definition}'");

		Ok(Reprojector { source, target })
	}

	/// LKS-92 grid metres to WGS84 degrees.
	pub fn lks92_to_wgs84() -> Result<Reprojector> {
		Reprojector::new(LKS92, WGS84)
	}
}

impl CoordinateTransform for Reprojector {
	fn transform(&self, source: Coord<f64>) -> Result<Coord<f64>> {
		ensure!(
			source.x.is_finite() && source.y.is_finite(),
			"source coordinate ({}, {}) is not finite",
			source.x,
			source.y
		);

		// proj4rs works in radians on geographic systems
		let mut point = if self.source.is_latlong() {
			(source.x.to_radians(), source.y.to_radians(), 0.0)
		} else {
			(source.x, source.y, 0.0)
		};

		transform(&self.source, &self.target, &mut point)
			.map_err(|e| anyhow!("failed to transform ({}, {}): {e}", source.x, source.y))?;

		let (x, y) = if self.target.is_latlong() {
			(point.0.to_degrees(), point.1.to_degrees())
		} else {
			(point.0, point.1)
		};

		Ok(Coord { x, y })
	}
}
