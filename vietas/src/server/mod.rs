//! HTTP server showing the map page.

mod handlers;
mod map_server;

pub use map_server::*;
