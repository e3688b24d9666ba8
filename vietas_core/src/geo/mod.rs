//! Input records and their reprojection.

mod envelope;
mod feature;
mod projection;

pub use envelope::*;
pub use feature::{PlaceFeature, PlaceProperties};
pub use projection::*;
