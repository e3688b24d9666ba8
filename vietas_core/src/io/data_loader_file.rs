//! Reads point data from the local filesystem.

use super::DataLoaderTrait;
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct DataLoaderFile {
	name: String,
	path: PathBuf,
}

impl DataLoaderFile {
	/// Creates a loader for `path`. The file is only touched by [`DataLoaderTrait::read_all`],
	/// so a missing file surfaces as a load failure of the pipeline.
	pub fn new(path: &Path) -> Box<DataLoaderFile> {
		Box::new(DataLoaderFile {
			name: path.to_string_lossy().into_owned(),
			path: path.to_path_buf(),
		})
	}
}

#[async_trait]
impl DataLoaderTrait for DataLoaderFile {
	async fn read_all(&self) -> Result<Vec<u8>> {
		ensure!(self.path.exists(), "failed to load {}: file does not exist", self.name);
		ensure!(self.path.is_file(), "failed to load {}: not a file", self.name);

		std::fs::read(&self.path).with_context(|| format!("failed to load {}", self.name))
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}
