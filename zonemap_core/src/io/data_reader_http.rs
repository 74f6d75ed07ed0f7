//! Fetches boundary documents over HTTP(S).
//!
//! Transient failures (connection, timeout, interrupted body) are retried up to
//! [`MAX_RETRIES`] times, waiting 1 s, 2 s, 4 s in between. A response with a non-success
//! status fails immediately. No request timeout is set, so the client defaults apply.
//!
//! ```rust,no_run
//! use zonemap_core::io::{DataReaderHttp, DataReaderTrait};
//! use reqwest::Url;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let reader = DataReaderHttp::from_url(Url::parse("https://example.com/zones.kml")?)?;
//!     println!("{} bytes", reader.read_all().await?.len());
//!     Ok(())
//! }
//! ```

use super::{DataReader, DataReaderTrait};
use crate::Blob;
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tokio::time::sleep;

pub const MAX_RETRIES: u32 = 3;
#[cfg(not(test))]
const FIRST_BACKOFF: Duration = Duration::from_secs(1);
#[cfg(test)]
const FIRST_BACKOFF: Duration = Duration::from_millis(10);

#[derive(Debug)]
pub struct DataReaderHttp {
	client: Client,
	name: String,
	url: Url,
}

/// Result of one request that did not fail for good.
enum Attempt {
	Done(Blob),
	Transient(reqwest::Error),
}

fn is_transient(error: &reqwest::Error) -> bool {
	error.is_connect() || error.is_timeout() || error.is_body()
}

impl DataReaderHttp {
	/// Only `http` and `https` URLs are accepted.
	pub fn from_url(url: Url) -> Result<DataReader> {
		ensure!(
			matches!(url.scheme(), "http" | "https"),
			"cannot fetch '{url}': only http and https URLs are supported"
		);

		let client = Client::builder().use_rustls_tls().build()?;
		Ok(Box::new(DataReaderHttp {
			client,
			name: url.to_string(),
			url,
		}))
	}

	async fn attempt(&self) -> Result<Attempt> {
		let response = match self.client.get(self.url.clone()).send().await {
			Ok(response) => response,
			Err(error) if is_transient(&error) => return Ok(Attempt::Transient(error)),
			Err(error) => return Err(error).with_context(|| format!("requesting '{}'", self.url)),
		};

		let status = response.status();
		ensure!(status.is_success(), "'{}' answered with status {status}", self.url);

		// `bytes` reports a body cut short as a decode error
		match response.bytes().await {
			Ok(bytes) => Ok(Attempt::Done(Blob::from(bytes.to_vec()))),
			Err(error) if is_transient(&error) || error.is_decode() => Ok(Attempt::Transient(error)),
			Err(error) => Err(error).with_context(|| format!("reading the body of '{}'", self.url)),
		}
	}
}

#[async_trait]
impl DataReaderTrait for DataReaderHttp {
	async fn read_all(&self) -> Result<Blob> {
		let mut retries = 0;
		let mut backoff = FIRST_BACKOFF;
		loop {
			match self.attempt().await? {
				Attempt::Done(blob) => {
					log::debug!("read {} bytes from '{}'", blob.len(), self.url);
					return Ok(blob);
				}
				Attempt::Transient(error) if retries < MAX_RETRIES => {
					retries += 1;
					log::warn!("reading '{}' failed: {error}; retry {retries}/{MAX_RETRIES} in {backoff:?}", self.url);
					sleep(backoff).await;
					backoff *= 2;
				}
				Attempt::Transient(error) => {
					return Err(error).with_context(|| format!("giving up on '{}' after {MAX_RETRIES} retries", self.url));
				}
			}
		}
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}
