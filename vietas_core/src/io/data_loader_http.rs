//! Reads point data from an HTTP(S) endpoint.
//!
//! One GET request, no retries. Anything other than a 2xx status is a load failure whose
//! message names the resource and the status line.

use super::DataLoaderTrait;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

#[derive(Debug)]
pub struct DataLoaderHttp {
	client: Client,
	name: String,
	url: Url,
}

impl DataLoaderHttp {
	pub fn from_url(url: Url) -> Result<Box<DataLoaderHttp>> {
		match url.scheme() {
			"http" | "https" => (),
			other => bail!("unsupported URL scheme '{other}' in '{url}', expected 'http' or 'https'"),
		}

		let client = Client::builder()
			.connect_timeout(Duration::from_secs(30))
			.use_rustls_tls()
			.build()?;

		Ok(Box::new(DataLoaderHttp {
			client,
			name: url.to_string(),
			url,
		}))
	}
}

#[async_trait]
impl DataLoaderTrait for DataLoaderHttp {
	async fn read_all(&self) -> Result<Vec<u8>> {
		log::debug!("GET {}", self.url);

		let response = self
			.client
			.get(self.url.clone())
			.send()
			.await
			.with_context(|| format!("failed to load {}", self.name))?;

		let status = response.status();
		if !status.is_success() {
			bail!("failed to load {}: HTTP {status}", self.name);
		}

		let body = response
			.bytes()
			.await
			.with_context(|| format!("failed to read body of {}", self.name))?;
		Ok(body.to_vec())
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}
