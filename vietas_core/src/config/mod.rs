//! Configuration for the map page and the HTTP server.
//!
//! - [`Config`]: top-level loader for the YAML file (`vietas.yml`)
//! - [`MapConfig`]: container, initial center/zoom and page title
//! - [`TileConfig`]: raster tile template and attribution
//! - [`ServerConfig`]: network settings of `vietas serve`
//!
//! Every field is optional. Command line flags override file values.

mod main;
mod map;
mod server;

pub use main::Config;
pub use map::{MapConfig, TileConfig};
pub use server::ServerConfig;
