//! Popup content of a marker.
//!
//! Property values are inserted into the markup verbatim. A value containing HTML is rendered
//! as HTML by the browser, so data files must come from a trusted source.

use crate::geo::PlaceProperties;

/// Fields shown in a popup, in display order.
pub const POPUP_FIELDS: [&str; 5] = ["PLACENAME", "PLACESUBTY", "REG_CODE", "LVM_DISTRI", "BLOCKKEY"];

pub fn popup_content(properties: &PlaceProperties) -> String {
	let [name, subtype, region, district, block] = POPUP_FIELDS.map(|field| properties.display(field));
	format!(
		"<b>{name}</b><br>\nType: {subtype}<br>\nRegion Code: {region}<br>\nLVM District: {district}<br>\nBlock Key: {block}"
	)
}
