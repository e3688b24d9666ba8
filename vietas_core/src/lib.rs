//! # Vietas core
//!
//! Loads point data in the Latvian LKS-92 grid, reprojects every point to WGS84 and places a
//! marker with a popup on a [`map::MapView`].
//!
//! ```rust,no_run
//! use vietas_core::{
//!     config::{MapConfig, TileConfig},
//!     diagnostics::StderrAlert,
//!     io::DataSource,
//!     map::{MapView, render_page},
//!     pipeline::render_source,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut map = MapView::from_config(&MapConfig::default(), &TileConfig::default());
//!     let report = render_source(&mut map, &DataSource::from("data.json"), &mut StderrAlert).await?;
//!     println!("{} markers", report.markers);
//!     std::fs::write("map.html", render_page(&map, &[])?)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod diagnostics;
mod error;
pub mod geo;
pub mod io;
pub mod map;
pub mod pipeline;

pub use error::PipelineError;
