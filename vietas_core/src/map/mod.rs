//! The map view and everything that is rendered from it.

mod geojson;
mod html;
mod marker;
mod popup;
mod view;

pub use geojson::*;
pub use html::*;
pub use marker::*;
pub use popup::*;
pub use view::*;
