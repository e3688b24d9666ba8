//! Injected reporting channels of the pipeline.
//!
//! [`DiagnosticSink`] receives developer-facing diagnostics (level, message, context pairs).
//! [`AlertSink`] is the user-facing failure channel and is only used for fatal errors.

use log::Level;
use std::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
	pub level: Level,
	pub message: String,
	pub context: Vec<(&'static str, String)>,
}

impl Diagnostic {
	pub fn new(level: Level, message: impl Into<String>) -> Diagnostic {
		Diagnostic {
			level,
			message: message.into(),
			context: Vec::new(),
		}
	}

	pub fn with(mut self, key: &'static str, value: impl Display) -> Diagnostic {
		self.context.push((key, value.to_string()));
		self
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.context.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)?;
		for (key, value) in &self.context {
			write!(f, " {key}={value}")?;
		}
		Ok(())
	}
}

pub trait DiagnosticSink: Send {
	fn emit(&mut self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
	fn emit(&mut self, diagnostic: Diagnostic) {
		log::log!(diagnostic.level, "{diagnostic}");
	}
}

/// Keeps everything in memory, in emission order.
impl DiagnosticSink for Vec<Diagnostic> {
	fn emit(&mut self, diagnostic: Diagnostic) {
		self.push(diagnostic);
	}
}

pub trait AlertSink: Send {
	fn alert(&mut self, message: &str);
}

/// Prints alerts to stderr, the user-facing channel of the command line.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrAlert;

impl AlertSink for StderrAlert {
	fn alert(&mut self, message: &str) {
		eprintln!("{message}");
	}
}

impl AlertSink for Vec<String> {
	fn alert(&mut self, message: &str) {
		self.push(message.to_string());
	}
}
