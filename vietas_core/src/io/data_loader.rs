use super::{DataLoaderFile, DataLoaderHttp, DataSource};
use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// Type alias for a boxed, dynamically dispatched loader.
pub type DataLoader = Box<dyn DataLoaderTrait>;

/// Reads a complete resource in one go.
#[async_trait]
pub trait DataLoaderTrait: Debug + Send + Sync {
	/// Reads the whole resource.
	///
	/// Any failure (missing file, transport error, non-success status) is returned as an error
	/// whose message is suitable for showing to the user.
	async fn read_all(&self) -> Result<Vec<u8>>;

	/// Name of the resource, used in log lines and error messages.
	fn get_name(&self) -> &str;
}

/// Returns the loader for `source`.
pub fn open_loader(source: &DataSource) -> Result<DataLoader> {
	log::debug!("open loader for {source:?}");
	let loader: DataLoader = match source {
		DataSource::Url(url) => DataLoaderHttp::from_url(url.clone())?,
		DataSource::Path(path) => DataLoaderFile::new(path),
	};
	Ok(loader)
}
