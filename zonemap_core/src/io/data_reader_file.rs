//! This module provides functionality for reading boundary documents from files.
//!
//! # Overview
//!
//! The `DataReaderFile` struct reads a whole file into a [`Blob`]. Relative paths are resolved
//! against the current working directory, and the path must point to an existing regular file.

use super::{DataReader, DataReaderTrait};
use crate::Blob;
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A struct that provides reading capabilities from a file.
#[derive(Debug)]
pub struct DataReaderFile {
	name: String,
	path: PathBuf,
}

impl DataReaderFile {
	/// Checks the path and creates a `DataReaderFile` instance.
	pub fn open(path: &Path) -> Result<DataReader> {
		let path = if path.is_absolute() {
			path.to_path_buf()
		} else {
			std::env::current_dir()?.join(path)
		};
		ensure!(path.exists(), "file {path:?} does not exist");
		ensure!(path.is_file(), "path {path:?} must be a file");

		let path = path.canonicalize()?;
		Ok(Box::new(DataReaderFile {
			name: path.to_string_lossy().to_string(),
			path,
		}))
	}
}

#[async_trait]
impl DataReaderTrait for DataReaderFile {
	async fn read_all(&self) -> Result<Blob> {
		let buffer = std::fs::read(&self.path).with_context(|| format!("failed to read file '{}'", self.name))?;
		log::debug!("read {} bytes from '{}'", buffer.len(), self.name);
		Ok(Blob::from(buffer))
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}
