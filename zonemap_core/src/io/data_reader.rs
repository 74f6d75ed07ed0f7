//! This module defines the `DataReaderTrait`, the interface for reading a complete document from
//! a data source, and the `DataReader` type alias for a boxed implementation of it.
//!
//! # Examples
//!
//! ```rust
//! use zonemap_core::{io::{DataReader, DataReaderTrait}, Blob};
//! use anyhow::Result;
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct StaticReader;
//!
//! #[async_trait]
//! impl DataReaderTrait for StaticReader {
//!     async fn read_all(&self) -> Result<Blob> {
//!         Ok(Blob::from("<kml/>"))
//!     }
//!
//!     fn get_name(&self) -> &str {
//!         "static"
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let reader: DataReader = Box::new(StaticReader);
//!     assert_eq!(reader.read_all().await?.as_str()?, "<kml/>");
//!     Ok(())
//! }
//! ```

use crate::Blob;
use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// Type alias for a boxed dynamic implementation of the `DataReaderTrait`.
pub type DataReader = Box<dyn DataReaderTrait>;

/// A trait for reading documents from various sources.
#[async_trait]
pub trait DataReaderTrait: Debug + Send + Sync {
	/// Reads all the data from the data source.
	async fn read_all(&self) -> Result<Blob>;

	/// Gets the name of the data source, used in log and error messages.
	fn get_name(&self) -> &str;
}
