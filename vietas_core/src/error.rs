//! Errors that abort the whole pipeline.
//!
//! Only two things are fatal: the data could not be loaded, or the loaded body is not JSON.
//! Everything else (bad records, unknown payload shapes) is reported through
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) and never reaches the user.

use std::fmt::{self, Display};

#[derive(Debug)]
pub enum PipelineError {
	/// The resource could not be fetched: missing file, transport failure or a non-success HTTP status.
	Load(anyhow::Error),
	/// The resource was fetched but its body is not valid JSON.
	Parse(serde_json::Error),
}

impl Display for PipelineError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PipelineError::Load(err) => write!(f, "{err}"),
			PipelineError::Parse(err) => write!(f, "failed to parse data: {err}"),
		}
	}
}

impl std::error::Error for PipelineError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PipelineError::Load(err) => Some(err.as_ref()),
			PipelineError::Parse(err) => Some(err),
		}
	}
}

impl From<serde_json::Error> for PipelineError {
	fn from(err: serde_json::Error) -> Self {
		PipelineError::Parse(err)
	}
}
