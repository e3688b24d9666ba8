use reqwest::Url;
use std::{
	fmt::{self, Debug, Display},
	path::PathBuf,
};

/// Where the point data comes from: a local file or an HTTP(S) URL.
#[derive(Clone, PartialEq)]
pub enum DataSource {
	Url(Url),
	Path(PathBuf),
}

impl From<&str> for DataSource {
	fn from(s: &str) -> Self {
		match Url::parse(s) {
			Ok(url) if matches!(url.scheme(), "http" | "https") => DataSource::Url(url),
			_ => DataSource::Path(PathBuf::from(s)),
		}
	}
}

impl Debug for DataSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DataSource::Url(url) => write!(f, "Url({url})"),
			DataSource::Path(path) => write!(f, "Path({})", path.display()),
		}
	}
}

impl Display for DataSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DataSource::Url(url) => write!(f, "{url}"),
			DataSource::Path(path) => write!(f, "{}", path.display()),
		}
	}
}
