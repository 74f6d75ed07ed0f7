//! This module provides the [`Blob`] struct, a wrapper around [`Vec<u8>`] holding the raw bytes of a
//! boundary document before it is parsed.
//!
//! # Examples
//!
//! ```rust
//! use zonemap_core::Blob;
//!
//! let blob = Blob::from("<kml/>");
//! assert_eq!(blob.len(), 6);
//! assert_eq!(blob.as_str().unwrap(), "<kml/>");
//! ```

use anyhow::{Context, Result};
use std::fmt::Debug;

/// A simple wrapper around [`Vec<u8>`] with a few helpers for text documents.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns the bytes as a slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	/// Interprets the bytes as UTF-8 text.
	///
	/// A leading byte order mark is skipped, since exported KML files often carry one.
	pub fn as_str(&self) -> Result<&str> {
		let bytes = self.0.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&self.0);
		std::str::from_utf8(bytes).context("blob is not valid UTF-8")
	}

	/// Returns the first byte that is not ASCII whitespace, if any.
	#[must_use]
	pub fn first_non_whitespace(&self) -> Option<u8> {
		let bytes = self.0.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&self.0);
		bytes.iter().copied().find(|b| !b.is_ascii_whitespace())
	}

	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}
}

impl From<Vec<u8>> for Blob {
	fn from(value: Vec<u8>) -> Self {
		Blob(value)
	}
}

impl From<&[u8]> for Blob {
	fn from(value: &[u8]) -> Self {
		Blob(value.to_vec())
	}
}

impl From<&str> for Blob {
	fn from(value: &str) -> Self {
		Blob(value.as_bytes().to_vec())
	}
}

impl From<String> for Blob {
	fn from(value: String) -> Self {
		Blob(value.into_bytes())
	}
}

impl From<&String> for Blob {
	fn from(value: &String) -> Self {
		Blob(value.as_bytes().to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({})", self.0.len())
	}
}
