use anyhow::{Result, anyhow, bail};
use geo_types::Coord;
use serde_json::{Map, Value};
use std::{collections::BTreeMap, fmt::Debug};

/// Descriptive fields of a place, keyed by their attribute names (`PLACENAME`, `REG_CODE`, ...).
#[derive(Clone, Default, PartialEq)]
pub struct PlaceProperties {
	properties: BTreeMap<String, Value>,
}

impl PlaceProperties {
	pub fn new() -> PlaceProperties {
		PlaceProperties::default()
	}

	/// Text shown for `key`: strings as they are, other JSON values in their JSON form and
	/// `undefined` when the key is missing.
	pub fn display(&self, key: &str) -> String {
		match self.properties.get(key) {
			None => String::from("undefined"),
			Some(Value::String(s)) => s.clone(),
			Some(other) => other.to_string(),
		}
	}

	pub fn to_json(&self) -> Value {
		Value::Object(
			self
				.properties
				.iter()
				.map(|(k, v)| (k.clone(), v.clone()))
				.collect::<Map<String, Value>>(),
		)
	}
}

#[cfg(test)]
impl From<Vec<(&str, &str)>> for PlaceProperties {
	fn from(value: Vec<(&str, &str)>) -> Self {
		PlaceProperties {
			properties: value
				.into_iter()
				.map(|(k, v)| (k.to_string(), Value::from(v)))
				.collect(),
		}
	}
}

impl FromIterator<(String, Value)> for PlaceProperties {
	fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
		PlaceProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for PlaceProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}

/// One input record: a coordinate sequence in source-projection units plus its properties.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceFeature {
	pub coordinates: Vec<f64>,
	pub properties: PlaceProperties,
}

impl PlaceFeature {
	/// Decodes one record of the payload.
	///
	/// Only `geometry.coordinates` is required and it must be an array of numbers. A missing
	/// or non-object `properties` member yields empty properties.
	pub fn from_json(value: &Value) -> Result<PlaceFeature> {
		let object = value
			.as_object()
			.ok_or_else(|| anyhow!("feature must be an object, found {}", json_kind(value)))?;

		let coordinates = object
			.get("geometry")
			.and_then(|geometry| geometry.get("coordinates"))
			.ok_or_else(|| anyhow!("feature is missing 'geometry.coordinates'"))?;

		let coordinates = match coordinates {
			Value::Array(entries) => entries
				.iter()
				.map(|entry| {
					entry
						.as_f64()
						.ok_or_else(|| anyhow!("coordinate {entry} is not a number"))
				})
				.collect::<Result<Vec<f64>>>()?,
			other => bail!("'geometry.coordinates' must be an array, found {}", json_kind(other)),
		};

		let properties = match object.get("properties") {
			Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
			_ => PlaceProperties::new(),
		};

		Ok(PlaceFeature {
			coordinates,
			properties,
		})
	}

	/// The source coordinate as an `(x, y)` pair. Fails unless there are exactly two finite numbers.
	pub fn source_coordinate(&self) -> Result<Coord<f64>> {
		match self.coordinates.as_slice() {
			[x, y] if x.is_finite() && y.is_finite() => Ok(Coord { x: *x, y: *y }),
			[_, _] => bail!("coordinates {:?} are not finite", self.coordinates),
			other => bail!("expected 2 coordinates, found {}", other.len()),
		}
	}
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
