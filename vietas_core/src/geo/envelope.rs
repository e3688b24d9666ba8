use super::feature::json_kind;
use serde_json::Value;
use std::fmt::{self, Display};

/// The top-level shape of a payload, resolved once before any record is looked at.
#[derive(Clone, Debug, PartialEq)]
pub enum Envelope {
	/// A bare JSON array of features.
	Array(Vec<Value>),
	/// An object whose `features` member is an array, e.g. a GeoJSON `FeatureCollection`.
	FeatureCollection(Vec<Value>),
	/// Anything else. Carries a short description of what was found.
	Unrecognized(String),
}

/// Tag of an [`Envelope`] without its records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvelopeKind {
	Array,
	FeatureCollection,
	Unrecognized,
}

impl Envelope {
	pub fn from_json(payload: Value) -> Envelope {
		match payload {
			Value::Array(records) => Envelope::Array(records),
			Value::Object(mut object) => match object.remove("features") {
				Some(Value::Array(records)) => Envelope::FeatureCollection(records),
				Some(other) => Envelope::Unrecognized(format!("an object whose 'features' is {}", json_kind(&other))),
				None => Envelope::Unrecognized(String::from("an object without 'features'")),
			},
			other => Envelope::Unrecognized(json_kind(&other).to_string()),
		}
	}

	pub fn kind(&self) -> EnvelopeKind {
		match self {
			Envelope::Array(_) => EnvelopeKind::Array,
			Envelope::FeatureCollection(_) => EnvelopeKind::FeatureCollection,
			Envelope::Unrecognized(_) => EnvelopeKind::Unrecognized,
		}
	}

	/// The records to render, or `None` for an unrecognized payload.
	pub fn into_records(self) -> Option<Vec<Value>> {
		match self {
			Envelope::Array(records) | Envelope::FeatureCollection(records) => Some(records),
			Envelope::Unrecognized(_) => None,
		}
	}
}

impl Display for EnvelopeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			EnvelopeKind::Array => "array",
			EnvelopeKind::FeatureCollection => "feature collection",
			EnvelopeKind::Unrecognized => "unrecognized",
		})
	}
}
