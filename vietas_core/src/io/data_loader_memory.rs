use super::DataLoaderTrait;
use anyhow::Result;
use async_trait::async_trait;

/// Serves a fixed byte buffer. Handy when the data is already in memory.
#[derive(Debug, Clone)]
pub struct DataLoaderMemory {
	name: String,
	data: Vec<u8>,
}

impl DataLoaderMemory {
	pub fn new(name: &str, data: impl Into<Vec<u8>>) -> DataLoaderMemory {
		DataLoaderMemory {
			name: name.to_string(),
			data: data.into(),
		}
	}
}

#[async_trait]
impl DataLoaderTrait for DataLoaderMemory {
	async fn read_all(&self) -> Result<Vec<u8>> {
		Ok(self.data.clone())
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}
