use super::{DataReader, DataReaderTrait};
use crate::Blob;
use anyhow::Result;
use async_trait::async_trait;

/// Serves a document that is already held in memory.
#[derive(Debug)]
pub struct DataReaderBlob {
	name: String,
	blob: Blob,
}

impl DataReaderBlob {
	pub fn new(name: &str, blob: Blob) -> DataReader {
		Box::new(DataReaderBlob {
			name: name.to_string(),
			blob,
		})
	}
}

#[async_trait]
impl DataReaderTrait for DataReaderBlob {
	async fn read_all(&self) -> Result<Blob> {
		Ok(self.blob.clone())
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}
