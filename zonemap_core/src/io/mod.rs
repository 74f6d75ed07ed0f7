//! Readers that fetch a complete boundary document from a [`DataLocation`](crate::DataLocation).
//!
//! The module provides one reader per location kind (blob, file, HTTP) behind the common
//! [`DataReaderTrait`], plus [`open_reader`] that picks the right one.

mod data_reader;
mod data_reader_blob;
mod data_reader_file;
mod data_reader_http;

pub use data_reader::*;
pub use data_reader_blob::*;
pub use data_reader_file::*;
pub use data_reader_http::*;

use crate::DataLocation;
use anyhow::Result;

/// Opens a reader for the given location.
pub fn open_reader(location: &DataLocation) -> Result<DataReader> {
	Ok(match location {
		DataLocation::Url(url) => DataReaderHttp::from_url(url.clone())?,
		DataLocation::Path(path) => DataReaderFile::open(path)?,
		DataLocation::Blob(blob) => DataReaderBlob::new("blob", blob.clone()),
	})
}
